//! Quote request records.

use super::submission::{Draft, Submission};
use crate::domain::{EmailAddress, PhoneNumber, ProjectType};
use crate::validation::{self, FieldErrors, Validate};
use serde::{Deserialize, Serialize};

pub const NAME_MESSAGE: &str = "Nome deve ter pelo menos 3 caracteres";
pub const EMAIL_MESSAGE: &str = "Email inválido";
pub const PHONE_MESSAGE: &str = "Telefone inválido (mín. 9 dígitos)";
pub const PROJECT_TYPE_MESSAGE: &str = "Selecione um tipo de projeto";
pub const DESCRIPTION_MESSAGE: &str = "Descreva seu projeto com pelo menos 20 caracteres";

/// The quote form as typed by the visitor.
///
/// `project_type` holds the raw select value; an empty string means nothing was
/// picked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
}

impl Draft for QuoteDraft {
    const FORM: &'static str = "quote";
    const FIELDS: &'static [&'static str] =
        &["name", "email", "phone", "projectType", "description"];

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "projectType" => Some(&mut self.project_type),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }

    fn field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "projectType" => Some(&self.project_type),
            "description" => Some(&self.description),
            _ => None,
        }
    }
}

/// A quote request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub project_type: ProjectType,
    pub description: String,
}

impl Validate for QuoteDraft {
    type Valid = QuoteSubmission;

    fn validate(&self) -> Result<QuoteSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::min_chars(&mut errors, "name", &self.name, 3, NAME_MESSAGE);
        let email = validation::email(&mut errors, "email", &self.email, EMAIL_MESSAGE);
        let phone = validation::optional_phone(&mut errors, "phone", &self.phone, PHONE_MESSAGE);
        let project_type = validation::project_type(
            &mut errors,
            "projectType",
            &self.project_type,
            PROJECT_TYPE_MESSAGE,
        );
        let description = validation::min_chars(
            &mut errors,
            "description",
            &self.description,
            20,
            DESCRIPTION_MESSAGE,
        );

        match (name, email, phone, project_type, description) {
            (Some(name), Some(email), Some(phone), Some(project_type), Some(description))
                if errors.is_empty() =>
            {
                Ok(QuoteSubmission {
                    name,
                    email,
                    phone,
                    project_type,
                    description,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Submission for QuoteSubmission {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.as_str().to_string()),
            (
                "phone",
                self.phone
                    .as_ref()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default(),
            ),
            ("projectType", self.project_type.as_str().to_string()),
            ("description", self.description.clone()),
        ]
    }

    fn subject_line(&self) -> String {
        format!("Novo Pedido de Orçamento: {}", self.project_type)
    }
}
