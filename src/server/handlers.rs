//! MCP tool handlers for the lead-capture server.
//!
//! Each tool is a thin shell over a form session: it fills the form, asks the
//! session to submit and reports the resulting status. Validation and delivery
//! failures are part of a successful tool result; only serialization problems and
//! bad form names become MCP errors.

use crate::domain::ProjectType;
use crate::error::FormError;
use crate::forms::{ContactForm, FormDraft, FormKind, FormSession, QuoteForm, SubmitOutcome};
use crate::metrics::Metrics;
use crate::models::{ContactDraft, QuoteDraft};
use crate::relay::AsyncRelay;
use crate::site::{faq_entries, nav_links, service_offerings, Route, SiteConfig};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing the site's contact and quote forms.
#[derive(Clone)]
pub struct LeadCaptureServer {
    site: SiteConfig,
    contact: ContactForm,
    quote: QuoteForm,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for LeadCaptureServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "actech-site".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some(self.site.name.into()),
                website_url: None,
            },
            instructions: Some("Lead capture for the AC TECH site - send contact messages and quote requests to the company's inbox.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContactFormParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactFormParams> for ContactDraft {
    fn from(params: ContactFormParams) -> Self {
        ContactDraft {
            name: params.name,
            email: params.email,
            subject: params.subject,
            message: params.message,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct QuoteRequestParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Optional; at least 9 characters when given
    #[serde(default)]
    pub phone: Option<String>,
    /// One of: website, ecommerce, mobile_app, custom_system, other
    #[serde(default, rename = "projectType", alias = "project_type")]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
}

impl From<QuoteRequestParams> for QuoteDraft {
    fn from(params: QuoteRequestParams) -> Self {
        QuoteDraft {
            name: params.name,
            email: params.email,
            phone: params.phone.unwrap_or_default(),
            project_type: params.project_type,
            description: params.description,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FormParams {
    /// "contact" or "quote"
    pub form: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: FormError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Tool response for a submit or retry action.
async fn outcome_response<D: FormDraft>(session: &FormSession<D>, outcome: SubmitOutcome) -> Value {
    let snapshot = session.snapshot().await;
    let mut response = json!({
        "form": D::KIND,
        "outcome": outcome.label(),
        "status": snapshot.status,
        "message": snapshot.status.message(),
    });
    if let SubmitOutcome::Rejected(errors) = &outcome {
        response["errors"] = json!(errors);
    }
    response
}

#[tool_router]
impl LeadCaptureServer {
    /// Create a server with one contact and one quote form sharing `relay`.
    pub fn new(site: SiteConfig, relay: Arc<dyn AsyncRelay>, metrics: Metrics) -> Self {
        Self {
            contact: FormSession::new(relay.clone(), metrics.clone()),
            quote: FormSession::new(relay, metrics.clone()),
            site,
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn quote_form(&self) -> &QuoteForm {
        &self.quote
    }

    /// Site identity, routes and counters.
    pub fn site_info(&self) -> Value {
        json!({
            "name": self.site.name,
            "tagline": self.site.tagline,
            "email": self.site.email,
            "mailto": self.site.mailto(),
            "whatsapp": {
                "number": self.site.whatsapp_number,
                "link": self.site.whatsapp_link(),
            },
            "socials": self.site.social_links().into_iter().collect::<std::collections::BTreeMap<_, _>>(),
            "routes": Route::ALL.iter().map(|route| json!({
                "path": route.path(),
                "title": route.title(&self.site),
                "description": route.meta_description(),
            })).collect::<Vec<_>>(),
            "nav": nav_links(),
            "copyright": self.site.current_copyright_notice(),
            "metrics": self.metrics.summary(),
        })
    }

    /// Fill the contact form with `params` and submit it.
    pub async fn submit_contact(&self, params: ContactFormParams) -> Value {
        tracing::info!("MCP Handler: submit_contact_form called");
        let outcome = self.contact.submit_with(params.into()).await;
        outcome_response(&self.contact, outcome).await
    }

    /// Fill the quote form with `params` and submit it.
    pub async fn submit_quote(&self, params: QuoteRequestParams) -> Value {
        tracing::info!("MCP Handler: submit_quote_request called");
        let outcome = self.quote.submit_with(params.into()).await;
        outcome_response(&self.quote, outcome).await
    }

    pub async fn retry(&self, form: FormKind) -> Value {
        tracing::info!("MCP Handler: retry_submission called for {}", form);
        match form {
            FormKind::Contact => {
                let outcome = self.contact.retry().await;
                outcome_response(&self.contact, outcome).await
            }
            FormKind::Quote => {
                let outcome = self.quote.retry().await;
                outcome_response(&self.quote, outcome).await
            }
        }
    }

    pub async fn form_status(&self, form: FormKind) -> Value {
        match form {
            FormKind::Contact => json!(self.contact.snapshot().await),
            FormKind::Quote => json!(self.quote.snapshot().await),
        }
    }

    /// Describe the company, its pages and contact channels.
    #[tool(
        description = "Describe the company: name, contact email, WhatsApp link, social profiles, site pages and submission counters"
    )]
    async fn get_site_info(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.site_info())
    }

    /// List the project types a quote can be requested for.
    #[tool(description = "List the project types accepted by the quote request form, with their labels")]
    async fn list_project_types(&self) -> Result<CallToolResult, McpError> {
        let types = ProjectType::ALL
            .iter()
            .map(|kind| json!({ "value": kind.as_str(), "label": kind.label() }))
            .collect::<Vec<_>>();
        json_result(&json!(types))
    }

    /// List services and frequently asked questions.
    #[tool(description = "List the services offered, with features and benefits, and the frequently asked questions")]
    async fn list_services(&self) -> Result<CallToolResult, McpError> {
        json_result(&json!({
            "services": service_offerings(),
            "faq": faq_entries(),
        }))
    }

    /// Check a contact message against the form rules without sending it.
    #[tool(description = "Check a contact message against the form rules without sending it")]
    async fn validate_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        let draft: ContactDraft = params.0.into();
        json_result(&validation_response(draft.check().map(|_| ())))
    }

    /// Check a quote request against the form rules without sending it.
    #[tool(description = "Check a quote request against the form rules without sending it")]
    async fn validate_quote_request(
        &self,
        params: Parameters<QuoteRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        let draft: QuoteDraft = params.0.into();
        json_result(&validation_response(draft.check().map(|_| ())))
    }

    /// Send a contact message to the company.
    #[tool(
        description = "Send a contact message to the company. Requires name (3+ chars), email, subject (5+ chars) and message (10+ chars)."
    )]
    async fn submit_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.submit_contact(params.0).await)
    }

    /// Send a quote request to the company.
    #[tool(
        description = "Request a quote. Requires name (3+ chars), email, projectType and description (20+ chars); phone is optional (9+ chars)."
    )]
    async fn submit_quote_request(
        &self,
        params: Parameters<QuoteRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.submit_quote(params.0).await)
    }

    /// Re-send a form whose last submission failed.
    #[tool(description = "Re-send the values of a form whose last submission failed")]
    async fn retry_submission(
        &self,
        params: Parameters<FormParams>,
    ) -> Result<CallToolResult, McpError> {
        let form = params.0.form.parse::<FormKind>().map_err(invalid_params)?;
        json_result(&self.retry(form).await)
    }

    /// Show the current values and status of a form.
    #[tool(description = "Show the current values and submission status of the contact or quote form")]
    async fn get_form_status(
        &self,
        params: Parameters<FormParams>,
    ) -> Result<CallToolResult, McpError> {
        let form = params.0.form.parse::<FormKind>().map_err(invalid_params)?;
        json_result(&self.form_status(form).await)
    }
}

fn validation_response(result: Result<(), crate::validation::FieldErrors>) -> Value {
    match result {
        Ok(()) => json!({ "valid": true }),
        Err(errors) => json!({ "valid": false, "errors": errors }),
    }
}
