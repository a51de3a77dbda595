//! HTTP client for the third-party form relay.
//!
//! The relay receives a `multipart/form-data` POST at `<base>/<destination>` and
//! forwards it as an email. This module provides a synchronous client that can be
//! used from async contexts via `tokio::task::spawn_blocking`. One call means one
//! POST: nothing is retried, queued or deduplicated, and the response body is
//! ignored.

mod async_wrapper;
pub mod multipart;
pub mod payload;

pub use async_wrapper::{AsyncRelay, AsyncRelayClient};
pub use payload::{RelayPayload, CAPTCHA_FIELD, SUBJECT_FIELD};

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::metrics::{Metrics, RelayTimer};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the form relay.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct RelayClient {
    /// Relay base URL
    base_url: String,

    /// Address the relay forwards submissions to
    destination: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RelayClient {
    /// Create a new RelayClient from configuration and a destination address.
    pub fn new(config: &Config, destination: impl Into<String>, metrics: Metrics) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        Self {
            base_url: config.relay_base_url.clone(),
            destination: destination.into(),
            agent: Arc::new(builder.build()),
            metrics,
        }
    }

    /// Create a RelayClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, destination: String) -> Self {
        Self {
            base_url,
            destination,
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Full URL submissions are posted to.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let destination = self.destination.trim_start_matches('/');
        format!("{}/{}", base, destination)
    }

    /// Deliver one payload. Any non-error status counts as delivered.
    pub fn submit(&self, payload: &RelayPayload) -> RelayResult<()> {
        let body = multipart::encode(payload)?;
        let url = self.endpoint();

        tracing::debug!("POST {}", url);
        tracing::debug!("Form fields: {:?}", payload.keys());

        let timer = RelayTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(&url)
            .set("Content-Type", &body.content_type)
            .send_bytes(&body.bytes)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result.map(|_| ())
    }

    /// Map a ureq error to a RelayError. Response bodies are never read.
    fn map_error(&self, error: ureq::Error) -> RelayError {
        match error {
            ureq::Error::Status(code, _) => RelayError::StatusError { status: code },
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    RelayError::HttpError("Connection failed".to_string())
                } else if is_timeout(&transport) {
                    RelayError::Timeout
                } else {
                    RelayError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// True when the transport failed because an I/O deadline passed.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport.kind() == ureq::ErrorKind::Io
        && std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .map(|io| {
                matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
            .unwrap_or(false)
}
