//! ProjectType value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of project a visitor asks a quote for.
///
/// The wire values (`website`, `ecommerce`, ...) are what the quote form's select
/// box submits and what ends up in the relay's subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Website,
    Ecommerce,
    MobileApp,
    CustomSystem,
    Other,
}

impl ProjectType {
    /// Every project type, in select-box order.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::Ecommerce,
        ProjectType::MobileApp,
        ProjectType::CustomSystem,
        ProjectType::Other,
    ];

    /// The value submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::MobileApp => "mobile_app",
            ProjectType::CustomSystem => "custom_system",
            ProjectType::Other => "other",
        }
    }

    /// The option text shown to visitors.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Website => "Criação de Site Profissional",
            ProjectType::Ecommerce => "Loja Online (E-commerce)",
            ProjectType::MobileApp => "Aplicativo Mobile (Android/iOS)",
            ProjectType::CustomSystem => "Sistema Web Personalizado",
            ProjectType::Other => "Outro",
        }
    }
}

impl FromStr for ProjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownProjectType(s.to_string()))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
