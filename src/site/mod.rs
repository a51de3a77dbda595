//! Static site identity, page routes and service catalogue.
//!
//! Everything here is compiled in and read-only at runtime.

pub mod catalog;
pub mod routes;

pub use catalog::{faq_entries, service_offerings, FaqEntry, ServiceOffering};
pub use routes::{nav_links, NavLink, Route};

use chrono::Datelike;
use serde::Serialize;

/// Links to the company's social profiles; absent ones are not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// The company's public identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Display name
    pub name: &'static str,

    /// Tagline shown in the footer
    pub tagline: &'static str,

    /// Public contact email
    pub email: &'static str,

    /// Address the form relay forwards submissions to
    pub form_submit_email: &'static str,

    /// WhatsApp number as displayed
    pub whatsapp_number: &'static str,

    pub socials: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "AC TECH",
            tagline: "Transformando ideias em soluções digitais reais.",
            email: "contato@actech.co.mz",
            form_submit_email: "contato@actech.co.mz",
            whatsapp_number: "+258 84 000 0000",
            socials: SocialLinks {
                facebook: Some("https://facebook.com/actech".to_string()),
                instagram: Some("https://instagram.com/actech".to_string()),
                linkedin: None,
            },
        }
    }
}

impl SiteConfig {
    /// `wa.me` deep link built from the digits of the WhatsApp number.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self
            .whatsapp_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        format!("https://wa.me/{}", digits)
    }

    /// Deep link that opens the chat with `text` already typed.
    pub fn whatsapp_link_with_text(&self, text: &str) -> String {
        format!("{}?text={}", self.whatsapp_link(), urlencoding::encode(text))
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Relay URL for this site's destination under `base_url`.
    pub fn relay_endpoint(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.form_submit_email
        )
    }

    pub fn copyright_notice(&self, year: i32) -> String {
        format!("© {} {}. Todos os direitos reservados.", year, self.name)
    }

    /// Footer notice for the current year.
    pub fn current_copyright_notice(&self) -> String {
        self.copyright_notice(chrono::Local::now().year())
    }

    /// Social links that are configured, as `(network, url)` pairs.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.socials.facebook.as_deref()),
            ("instagram", self.socials.instagram.as_deref()),
            ("linkedin", self.socials.linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.map(|u| (network, u)))
        .collect()
    }
}
