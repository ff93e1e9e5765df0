use crate::domain::model::{ContactDraft, ContactField};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Headless driver for the portfolio page: content, navigation and contact form")]
pub struct CliConfig {
    /// Path to a site TOML file; the built-in portfolio is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the page content as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Section id to scroll to (repeatable)
    #[arg(long = "section")]
    pub sections: Vec<String>,

    #[arg(long, default_value = "900")]
    pub viewport_height: f64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Open an external link in a new window
    #[arg(long)]
    pub open: Option<String>,

    /// Trigger the resume download
    #[arg(long)]
    pub resume: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Contact fields given on the command line, or `None` if no contact
    /// flag was passed at all.
    pub fn contact_input(&self) -> Option<Vec<(ContactField, String)>> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ];
        if fields.iter().all(|(_, value)| value.is_none()) {
            return None;
        }

        Some(
            fields
                .into_iter()
                .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
                .collect(),
        )
    }

    pub fn contact_draft(&self) -> Option<ContactDraft> {
        let mut draft = ContactDraft::default();
        for (field, value) in self.contact_input()? {
            draft.set(field, value);
        }
        Some(draft)
    }
}
