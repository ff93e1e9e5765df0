use crate::domain::model::ContactSubmission;
use crate::domain::ports::{Alerts, ContactChannel};
use crate::utils::error::Result;

/// Stand-in for a notification backend: records the submission in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContactChannel;

impl ContactChannel for LogContactChannel {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(submission = %payload, "Contact form submitted");
        Ok(())
    }
}

/// Prints notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlerts;

impl Alerts for ConsoleAlerts {
    fn alert(&mut self, message: &str) {
        println!("💬 {}", message);
    }
}

/// Keeps every notice so callers can inspect what the user was shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlerts {
    messages: Vec<String>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&mut self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.messages.push(message.to_string());
    }
}
