//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum length of a phone number, in UTF-16 code units.
pub const MIN_PHONE_CHARS: usize = 9;

/// A type-safe wrapper for the quote form's phone number.
///
/// The form accepts free text (e.g. `+258 84 123 4567`), so the only rule is a
/// minimum length. An empty phone is not a `PhoneNumber`: the field is optional
/// and absence is represented as `Option::None` by the caller.
///
/// # Example
///
/// ```
/// use actech_site::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+258 84 123 4567").unwrap();
/// assert_eq!(phone.digits_only(), "258841234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number has fewer than
    /// [`MIN_PHONE_CHARS`] UTF-16 code units.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.encode_utf16().count() < MIN_PHONE_CHARS {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
