//! The key/value payload sent to the form relay.

use crate::models::Submission;
use serde::Serialize;

/// Control field: subject of the email the relay forwards.
pub const SUBJECT_FIELD: &str = "_subject";

/// Control field: disables the relay's interactive challenge page.
pub const CAPTCHA_FIELD: &str = "_captcha";

/// Ordered form fields, record fields first, control fields last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    fields: Vec<(String, String)>,
}

impl RelayPayload {
    /// Flatten a validated submission and append the relay control fields.
    pub fn from_submission(submission: &impl Submission) -> Self {
        let mut fields: Vec<(String, String)> = submission
            .form_fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        fields.push((SUBJECT_FIELD.to_string(), submission.subject_line()));
        fields.push((CAPTCHA_FIELD.to_string(), "false".to_string()));

        Self { fields }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
