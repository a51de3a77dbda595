//! Validation rules for the lead forms.
//!
//! Rules are pure functions of the input. Every field is checked independently and
//! all violations are collected in one pass, so a shell can show each message next
//! to its field.

use crate::domain::{EmailAddress, PhoneNumber, ProjectType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Violation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. The first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Names of the failing fields, in alphabetical order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.keys().copied().collect()
    }
}

/// A raw record that can be checked against its rules.
pub trait Validate {
    /// The record type produced when every rule passes.
    type Valid;

    /// Check every field; return the validated record or all violations.
    fn validate(&self) -> Result<Self::Valid, FieldErrors>;
}

/// Length of `value` in UTF-16 code units, the unit browser form checks count in.
///
/// "Zé" is 2 long; an emoji outside the Basic Multilingual Plane is 2 long.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Accept `value` when it is at least `min` long, as measured by [`text_len`].
pub fn min_chars(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) -> Option<String> {
    if text_len(value) >= min {
        Some(value.to_string())
    } else {
        errors.add(field, message);
        None
    }
}

/// Accept `value` when it has email-address syntax.
pub fn email(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<EmailAddress> {
    match EmailAddress::new(value) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

/// Optional phone: empty is valid (`Some(None)`); otherwise the length rule applies.
pub fn optional_phone(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<Option<PhoneNumber>> {
    if value.is_empty() {
        return Some(None);
    }
    match PhoneNumber::new(value) {
        Ok(phone) => Some(Some(phone)),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

/// Accept `value` when it names one of the offered project types.
pub fn project_type(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<ProjectType> {
    match value.parse::<ProjectType>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}
