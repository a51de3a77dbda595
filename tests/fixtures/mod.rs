//! Form drafts shared by the integration tests.

#![allow(dead_code)]

use actech_site::{ContactDraft, QuoteDraft};

/// A contact message that passes every rule.
pub fn valid_contact() -> ContactDraft {
    ContactDraft {
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        subject: "Hello there".to_string(),
        message: "This is a test message".to_string(),
    }
}

/// The quote request from the site's reference scenario.
pub fn valid_quote() -> QuoteDraft {
    QuoteDraft {
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        phone: String::new(),
        project_type: "ecommerce".to_string(),
        description: "I need an online store for my clothing brand".to_string(),
    }
}

/// A string of `n` characters.
pub fn chars(n: usize) -> String {
    "a".repeat(n)
}
