use actech_site::error::{RelayError, RelayResult};
use actech_site::relay::{AsyncRelay, RelayPayload};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory relay for form session tests.
///
/// Records every payload it receives. When gated, each call waits for
/// `release()` before resolving, which keeps a submission in flight.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRelay {
    payloads: Arc<Mutex<Vec<RelayPayload>>>,
    failing: Arc<AtomicBool>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            gate: None,
        }
    }

    pub fn failing() -> Self {
        let relay = Self::new();
        relay.set_failing(true);
        relay
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let one waiting (or the next) call resolve.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<RelayPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

impl Default for MockRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncRelay for MockRelay {
    async fn submit(&self, payload: RelayPayload) -> RelayResult<()> {
        self.payloads.lock().unwrap().push(payload);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            Err(RelayError::StatusError { status: 503 })
        } else {
            Ok(())
        }
    }
}
