//! Data models for the site's lead forms.
//!
//! Each form has a raw, editable draft (what the visitor typed) and a validated
//! submission (what the relay receives). Submissions can only be obtained by
//! validating a draft.

pub mod contact_submission;
pub mod quote_submission;
pub mod submission;

pub use contact_submission::{ContactDraft, ContactSubmission};
pub use quote_submission::{QuoteDraft, QuoteSubmission};
pub use submission::{Draft, Submission};
