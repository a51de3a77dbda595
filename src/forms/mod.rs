//! Lead forms: their kinds, status store and per-instance sessions.

mod session;
mod status;

pub use session::{FormSession, FormSnapshot, SubmitOutcome};
pub use status::SubmissionStatus;

use crate::error::FormError;
use crate::models::{ContactDraft, ContactSubmission, Draft, QuoteDraft, QuoteSubmission, Submission};
use crate::validation::{FieldErrors, Validate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The two lead forms the site offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    Quote,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Quote => "quote",
        }
    }

    /// Shown after the relay accepted the submission.
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Mensagem enviada com sucesso! Responderemos em breve.",
            FormKind::Quote => "Orçamento enviado com sucesso! Entraremos em contato em breve.",
        }
    }

    /// Shown for any transmission failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Ocorreu um erro ao enviar. Tente novamente mais tarde.",
            FormKind::Quote => {
                "Ocorreu um erro ao enviar. Tente novamente ou contate-nos por WhatsApp."
            }
        }
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" | "contato" => Ok(FormKind::Contact),
            "quote" | "orcamento" => Ok(FormKind::Quote),
            other => Err(FormError::UnknownForm(other.to_string())),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A draft that belongs to one of the lead forms.
pub trait FormDraft: Draft + Serialize + 'static {
    const KIND: FormKind;

    /// Validated record sent to the relay.
    type Submission: Submission + 'static;

    fn check(&self) -> Result<Self::Submission, FieldErrors>;
}

impl FormDraft for ContactDraft {
    const KIND: FormKind = FormKind::Contact;
    type Submission = ContactSubmission;

    fn check(&self) -> Result<ContactSubmission, FieldErrors> {
        self.validate()
    }
}

impl FormDraft for QuoteDraft {
    const KIND: FormKind = FormKind::Quote;
    type Submission = QuoteSubmission;

    fn check(&self) -> Result<QuoteSubmission, FieldErrors> {
        self.validate()
    }
}

/// Session for the contact page.
pub type ContactForm = FormSession<ContactDraft>;

/// Session for the quote page.
pub type QuoteForm = FormSession<QuoteDraft>;
