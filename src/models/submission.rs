//! Shared behaviour of validated submission records.

use crate::error::FormError;

/// A validated record ready to be sent to the relay.
pub trait Submission: Send + Sync {
    /// The record flattened into key/value pairs, keyed by the form's field names.
    fn form_fields(&self) -> Vec<(&'static str, String)>;

    /// Subject line the relay uses for the forwarded email.
    fn subject_line(&self) -> String;
}

/// A raw, editable form record.
pub trait Draft: Default + Clone + Send + Sync {
    /// Form name used in error messages.
    const FORM: &'static str;

    /// Field names, in display order.
    const FIELDS: &'static [&'static str];

    /// Mutable slot for a field, looked up by its form name.
    fn field_mut(&mut self, field: &str) -> Option<&mut String>;

    /// Current value of a field.
    fn field(&self, field: &str) -> Option<&str>;

    /// Overwrite one field.
    fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.field_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::UnknownField {
                form: Self::FORM,
                field: field.to_string(),
            }),
        }
    }

    /// Clear every field back to its initial value.
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no field has been filled in.
    fn is_empty(&self) -> bool {
        Self::FIELDS
            .iter()
            .all(|field| self.field(field).map_or(true, str::is_empty))
    }
}
