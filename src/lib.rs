//! AC TECH site - lead capture for a small digital-services company.
//!
//! The library validates the site's two lead forms (contact message and quote
//! request), delivers accepted submissions to a third-party form relay as a
//! multipart POST, and tracks each form's submission status. The binary exposes
//! the forms over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email address, phone number, project type)
//! - **validation**: Per-field rules and the `FieldErrors` map
//! - **models**: Form drafts and validated submissions
//! - **relay**: Payload building, multipart encoding and the relay HTTP client
//! - **forms**: Submission status store and per-instance form sessions
//! - **site**: Static site identity, routes and service catalogue
//! - **config**: Relay transport configuration from environment variables
//! - **metrics**: Counters for relay calls and submit outcomes
//! - **server**: MCP tools wrapping the forms

pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod metrics;
pub mod models;
pub mod relay;
pub mod server;
pub mod site;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, FormError, RelayError};
pub use forms::{ContactForm, FormKind, FormSession, QuoteForm, SubmissionStatus, SubmitOutcome};
pub use metrics::{Metrics, MetricsSummary, RelayTimer};
pub use models::{ContactDraft, ContactSubmission, QuoteDraft, QuoteSubmission};
pub use relay::{AsyncRelay, AsyncRelayClient, RelayClient, RelayPayload};
pub use server::LeadCaptureServer;
pub use site::{Route, SiteConfig};
pub use validation::{FieldErrors, Validate};
