//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a visitor types into the
//! lead forms: email addresses, phone numbers and the project type picked from the
//! quote form's select box. These value objects provide validation at construction
//! time and prevent invalid data from reaching the relay.

pub mod email;
pub mod errors;
pub mod phone;
pub mod project_type;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use project_type::ProjectType;
