//! Page routes and navigation.

use super::SiteConfig;
use serde::Serialize;

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Services,
    Quote,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Quote,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/sobre",
            Route::Services => "/servicos",
            Route::Quote => "/orcamento",
            Route::Contact => "/contato",
        }
    }

    /// Resolve a path; a trailing slash is ignored, unknown paths give `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Início",
            Route::About => "Sobre",
            Route::Services => "Serviços",
            Route::Quote => "Orçamento",
            Route::Contact => "Contato",
        }
    }

    /// Document title for the page.
    pub fn title(&self, site: &SiteConfig) -> String {
        match self {
            Route::Home => format!("{} - Soluções Digitais Inovadoras", site.name),
            Route::About => format!("Sobre Nós - {}", site.name),
            Route::Services => format!("Nossos Serviços - {}", site.name),
            Route::Quote => format!("Orçamento Personalizado - {}", site.name),
            Route::Contact => format!("Contato - {}", site.name),
        }
    }

    pub fn meta_description(&self) -> &'static str {
        match self {
            Route::Home => "AC TECH: Transformamos ideias em soluções digitais reais. Criação de websites, aplicativos mobile e sistemas personalizados com entrega rápida e eficiente.",
            Route::About => "Conheça a AC TECH: nossa missão, visão e experiência em desenvolvimento de software e soluções digitais.",
            Route::Services => "Conheça os serviços da AC TECH: criação de sites, lojas online, aplicativos mobile e sistemas web personalizados.",
            Route::Quote => "Solicite um orçamento personalizado para seu projeto de website, e-commerce, app mobile ou sistema web com a AC TECH.",
            Route::Contact => "Entre em contato com a AC TECH. Estamos prontos para ouvir sobre seu projeto ou responder suas dúvidas.",
        }
    }
}

/// A footer navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Footer navigation, in display order.
pub fn nav_links() -> Vec<NavLink> {
    Route::ALL
        .iter()
        .map(|route| NavLink {
            href: route.path(),
            label: route.label(),
        })
        .collect()
}
