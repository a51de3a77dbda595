//! Acceptance rules for both lead forms, checked field by field at the
//! length boundaries.

mod fixtures;

use actech_site::relay::{RelayPayload, CAPTCHA_FIELD, SUBJECT_FIELD};
use actech_site::{ContactDraft, QuoteDraft, Validate};
use fixtures::{chars, valid_contact, valid_quote};

const GOOD_EMAILS: &[&str] = &["a@b.com", "maria@example.com", "first.last+tag@mail.co.mz"];
const BAD_EMAILS: &[&str] = &["", "maria", "maria@", "@example.com", "maria@example", "a b@c.com"];

#[test]
fn test_contact_scenario_short_name_only() {
    let draft = ContactDraft {
        name: "Jo".to_string(),
        email: "a@b.com".to_string(),
        subject: "Hello there".to_string(),
        message: "This is a test message".to_string(),
    };

    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name"), Some("Nome deve ter pelo menos 3 caracteres"));
}

#[test]
fn test_quote_scenario_payload() {
    let submission = valid_quote().validate().unwrap();
    let payload = RelayPayload::from_submission(&submission);

    assert_eq!(
        payload.keys(),
        vec!["name", "email", "phone", "projectType", "description", SUBJECT_FIELD, CAPTCHA_FIELD]
    );
    assert_eq!(payload.get("name"), Some("Maria Silva"));
    assert_eq!(payload.get("email"), Some("maria@example.com"));
    assert_eq!(payload.get("phone"), Some(""));
    assert_eq!(payload.get("projectType"), Some("ecommerce"));
    assert_eq!(
        payload.get("description"),
        Some("I need an online store for my clothing brand")
    );
    assert_eq!(payload.get(SUBJECT_FIELD), Some("Novo Pedido de Orçamento: ecommerce"));
    assert_eq!(payload.get(CAPTCHA_FIELD), Some("false"));
}

#[test]
fn test_contact_accepts_iff_every_rule_holds() {
    for name_len in 0..6 {
        for subject_len in 3..8 {
            for message_len in 8..12 {
                for email in GOOD_EMAILS.iter().chain(BAD_EMAILS) {
                    let draft = ContactDraft {
                        name: chars(name_len),
                        email: email.to_string(),
                        subject: chars(subject_len),
                        message: chars(message_len),
                    };
                    let expected = name_len >= 3
                        && GOOD_EMAILS.contains(email)
                        && subject_len >= 5
                        && message_len >= 10;
                    assert_eq!(
                        draft.validate().is_ok(),
                        expected,
                        "name={} subject={} message={} email={:?}",
                        name_len,
                        subject_len,
                        message_len,
                        email
                    );
                }
            }
        }
    }
}

#[test]
fn test_quote_accepts_iff_every_rule_holds() {
    let project_types = ["website", "ecommerce", "mobile_app", "custom_system", "other", "", "app"];
    let phones = ["", "12345678", "123456789", "+258 84 123 4567"];

    for name_len in [2, 3] {
        for description_len in [19, 20] {
            for phone in phones {
                for project_type in project_types {
                    for email in ["maria@example.com", "maria@"] {
                        let draft = QuoteDraft {
                            name: chars(name_len),
                            email: email.to_string(),
                            phone: phone.to_string(),
                            project_type: project_type.to_string(),
                            description: chars(description_len),
                        };
                        let expected = name_len >= 3
                            && email == "maria@example.com"
                            && (phone.is_empty() || phone.encode_utf16().count() >= 9)
                            && !matches!(project_type, "" | "app")
                            && description_len >= 20;
                        assert_eq!(
                            draft.validate().is_ok(),
                            expected,
                            "{:?}",
                            draft
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_violation_is_reported_at_once() {
    let draft = QuoteDraft {
        name: "Jo".to_string(),
        email: "maria".to_string(),
        phone: "1234".to_string(),
        project_type: String::new(),
        description: "curto".to_string(),
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(
        errors.fields(),
        vec!["description", "email", "name", "phone", "projectType"]
    );
    assert_eq!(errors.get("projectType"), Some("Selecione um tipo de projeto"));
    assert_eq!(
        errors.get("description"),
        Some("Descreva seu projeto com pelo menos 20 caracteres")
    );
}

#[test]
fn test_validation_is_idempotent() {
    let mut contact = valid_contact();
    contact.subject = "Oi".to_string();
    assert_eq!(contact.validate(), contact.validate());

    let quote = valid_quote();
    assert_eq!(quote.validate(), quote.validate());
}

#[test]
fn test_lengths_count_utf16_units() {
    // "Zé" is 2 units but 3 bytes
    let mut contact = valid_contact();
    contact.name = "Zé".to_string();
    assert!(contact.validate().is_err());

    contact.name = "Zéa".to_string();
    assert!(contact.validate().is_ok());

    // each emoji is 2 units
    contact.name = "😀😀".to_string();
    assert!(contact.validate().is_ok());

    let mut quote = valid_quote();
    quote.phone = "📞📞📞📞📞".to_string();
    assert!(quote.validate().is_ok());
}
