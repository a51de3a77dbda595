//! Contact form records.

use super::submission::{Draft, Submission};
use crate::domain::EmailAddress;
use crate::validation::{self, FieldErrors, Validate};
use serde::{Deserialize, Serialize};

pub const NAME_MESSAGE: &str = "Nome deve ter pelo menos 3 caracteres";
pub const EMAIL_MESSAGE: &str = "Email inválido";
pub const SUBJECT_MESSAGE: &str = "Assunto deve ter pelo menos 5 caracteres";
pub const MESSAGE_MESSAGE: &str = "Mensagem deve ter pelo menos 10 caracteres";

/// The contact form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl Draft for ContactDraft {
    const FORM: &'static str = "contact";
    const FIELDS: &'static [&'static str] = &["name", "email", "subject", "message"];

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "subject" => Some(&mut self.subject),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }

    fn field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactDraft {
    type Valid = ContactSubmission;

    fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::min_chars(&mut errors, "name", &self.name, 3, NAME_MESSAGE);
        let email = validation::email(&mut errors, "email", &self.email, EMAIL_MESSAGE);
        let subject =
            validation::min_chars(&mut errors, "subject", &self.subject, 5, SUBJECT_MESSAGE);
        let message =
            validation::min_chars(&mut errors, "message", &self.message, 10, MESSAGE_MESSAGE);

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(ContactSubmission {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Submission for ContactSubmission {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.as_str().to_string()),
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
        ]
    }

    fn subject_line(&self) -> String {
        format!("Contato via Site: {}", self.subject)
    }
}
