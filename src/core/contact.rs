use crate::domain::model::{ContactDraft, ContactField, ContactSubmission, SubmitOutcome};
use crate::domain::ports::{Alerts, ContactChannel};
use crate::utils::error::Result;
use chrono::Utc;

/// Owns the contact draft between keystrokes and submission.
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Input-change event for a single field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        self.draft.missing_fields()
    }

    /// Validates, hands the draft to `channel`, shows the outcome through
    /// `alerts` and clears the draft on success.
    ///
    /// An invalid draft is not an error: the notice is shown and the draft is
    /// kept as is. A channel failure is returned and also leaves the draft
    /// untouched.
    pub fn submit<C, A>(&mut self, channel: &C, alerts: &mut A) -> Result<SubmitOutcome>
    where
        C: ContactChannel + ?Sized,
        A: Alerts + ?Sized,
    {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            tracing::debug!("Contact form rejected, missing: {}", names.join(", "));
            let outcome = SubmitOutcome::MissingFields(missing);
            alerts.alert(outcome.notice());
            return Ok(outcome);
        }

        let submission = ContactSubmission {
            draft: self.draft.clone(),
            submitted_at: Utc::now(),
        };
        channel.deliver(&submission)?;

        let outcome = SubmitOutcome::Submitted;
        alerts.alert(outcome.notice());
        self.draft = ContactDraft::default();
        Ok(outcome)
    }
}
