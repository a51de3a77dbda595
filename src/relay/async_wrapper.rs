//! Async wrapper around the synchronous RelayClient.
//!
//! This module provides an async interface to the synchronous RelayClient by using
//! `tokio::task::spawn_blocking` to run the POST on a dedicated thread pool,
//! preventing blocking of the async runtime.

use super::{RelayClient, RelayPayload};
use crate::error::{RelayError, RelayResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async delivery of relay payloads.
///
/// Form sessions depend on this trait rather than on the HTTP client, so tests
/// can substitute an in-memory relay.
#[async_trait]
pub trait AsyncRelay: Send + Sync {
    /// Deliver one payload; exactly one relay call per invocation.
    async fn submit(&self, payload: RelayPayload) -> RelayResult<()>;
}

/// Async wrapper around synchronous RelayClient.
#[derive(Clone)]
pub struct AsyncRelayClient {
    client: Arc<RelayClient>,
}

impl AsyncRelayClient {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncRelay for AsyncRelayClient {
    async fn submit(&self, payload: RelayPayload) -> RelayResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.submit(&payload))
            .await
            .map_err(|e| RelayError::TaskError(e.to_string()))?
    }
}
