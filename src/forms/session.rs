//! One form instance: its draft, its status and its relay.

use super::{FormDraft, SubmissionStatus};
use crate::error::FormError;
use crate::metrics::Metrics;
use crate::relay::{AsyncRelay, RelayPayload};
use crate::validation::FieldErrors;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result of a submit (or retry) action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay accepted the submission; the draft was cleared.
    Delivered { message: String },
    /// The relay call failed; the draft was kept for another try.
    Failed { message: String },
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// A submission was already in flight; nothing was sent.
    AlreadySubmitting,
    /// `retry` was called while the last attempt had not failed.
    NothingToRetry,
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Delivered { .. } => "delivered",
            SubmitOutcome::Failed { .. } => "failed",
            SubmitOutcome::Rejected(_) => "rejected",
            SubmitOutcome::AlreadySubmitting => "already_submitting",
            SubmitOutcome::NothingToRetry => "nothing_to_retry",
        }
    }
}

/// Draft and status at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot<D> {
    pub draft: D,
    pub status: SubmissionStatus,
}

struct SessionState<D> {
    draft: D,
    status: SubmissionStatus,
}

struct Inner<D> {
    state: Mutex<SessionState<D>>,
    relay: Arc<dyn AsyncRelay>,
    metrics: Metrics,
}

/// A single form instance.
///
/// Cloning yields another handle to the same instance. At most one relay call is
/// outstanding per instance: the `Idle → Submitting` transition happens under the
/// state lock, so a second `submit` racing the first observes `Submitting` and
/// returns [`SubmitOutcome::AlreadySubmitting`].
pub struct FormSession<D: FormDraft> {
    inner: Arc<Inner<D>>,
}

impl<D: FormDraft> Clone for FormSession<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<D: FormDraft> FormSession<D> {
    /// Mount an empty form.
    pub fn new(relay: Arc<dyn AsyncRelay>, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SessionState {
                    draft: D::default(),
                    status: SubmissionStatus::Idle,
                }),
                relay,
                metrics,
            }),
        }
    }

    /// Edit one field. A resolved status goes back to `Idle`.
    pub async fn set_field(&self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let mut state = self.inner.state.lock().await;
        state.draft.set_field(field, value)?;
        Self::clear_finished(&mut state);
        Ok(())
    }

    /// Replace the whole draft, as if every field had been typed.
    pub async fn fill(&self, draft: D) {
        let mut state = self.inner.state.lock().await;
        state.draft = draft;
        Self::clear_finished(&mut state);
    }

    /// Clear the draft. The status is left alone.
    pub async fn reset(&self) {
        self.inner.state.lock().await.draft.reset();
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.inner.state.lock().await.status.clone()
    }

    pub async fn draft(&self) -> D {
        self.inner.state.lock().await.draft.clone()
    }

    pub async fn snapshot(&self) -> FormSnapshot<D> {
        let state = self.inner.state.lock().await;
        FormSnapshot {
            draft: state.draft.clone(),
            status: state.status.clone(),
        }
    }

    /// Run the rules against the current draft without submitting.
    pub async fn validate(&self) -> Result<D::Submission, FieldErrors> {
        self.inner.state.lock().await.draft.check()
    }

    /// Validate and, if the draft passes, send it to the relay once.
    ///
    /// The relay call runs on its own task: dropping the returned future does not
    /// cancel an in-flight delivery, and the status still resolves.
    pub async fn submit(&self) -> SubmitOutcome {
        let started = {
            let mut state = self.inner.state.lock().await;
            self.begin(&mut state)
        };
        match started {
            Ok(payload) => self.deliver(payload).await,
            Err(outcome) => outcome,
        }
    }

    /// Replace the draft and submit it in one step.
    ///
    /// While a submission is in flight the draft is left untouched and
    /// [`SubmitOutcome::AlreadySubmitting`] is returned, so the retained values
    /// stay those of the in-flight attempt.
    pub async fn submit_with(&self, draft: D) -> SubmitOutcome {
        let started = {
            let mut state = self.inner.state.lock().await;
            if !state.status.is_submitting() {
                state.draft = draft;
                Self::clear_finished(&mut state);
            }
            self.begin(&mut state)
        };
        match started {
            Ok(payload) => self.deliver(payload).await,
            Err(outcome) => outcome,
        }
    }

    /// Guard and validate under the state lock; on success the form is `Submitting`.
    fn begin(&self, state: &mut SessionState<D>) -> Result<RelayPayload, SubmitOutcome> {
        let kind = D::KIND;
        if state.status.is_submitting() {
            tracing::debug!("{} form: submit ignored, already submitting", kind);
            self.inner.metrics.record_blocked_submit();
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        match state.draft.check() {
            Ok(submission) => {
                state.status = SubmissionStatus::Submitting;
                Ok(RelayPayload::from_submission(&submission))
            }
            Err(errors) => {
                tracing::info!("{} form: rejected fields {:?}", kind, errors.fields());
                self.inner.metrics.record_validation_rejection();
                Err(SubmitOutcome::Rejected(errors))
            }
        }
    }

    async fn deliver(&self, payload: RelayPayload) -> SubmitOutcome {
        let kind = D::KIND;
        tracing::info!("{} form: submitting", kind);
        let inner = self.inner.clone();
        let delivery = tokio::spawn(async move {
            let result = inner.relay.submit(payload).await;
            let mut state = inner.state.lock().await;
            match result {
                Ok(()) => {
                    let message = kind.success_message().to_string();
                    state.draft.reset();
                    state.status = SubmissionStatus::Succeeded {
                        message: message.clone(),
                    };
                    inner.metrics.record_delivered();
                    tracing::info!("{} form: delivered", kind);
                    SubmitOutcome::Delivered { message }
                }
                Err(e) => {
                    let message = kind.failure_message().to_string();
                    state.status = SubmissionStatus::Failed {
                        message: message.clone(),
                    };
                    tracing::warn!("{} form: delivery failed: {}", kind, e);
                    SubmitOutcome::Failed { message }
                }
            }
        });

        match delivery.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{} form: delivery task failed: {}", kind, e);
                let message = kind.failure_message().to_string();
                self.inner.state.lock().await.status = SubmissionStatus::Failed {
                    message: message.clone(),
                };
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Re-submit the retained values after a failed attempt.
    pub async fn retry(&self) -> SubmitOutcome {
        {
            let state = self.inner.state.lock().await;
            if !state.status.is_failed() {
                return SubmitOutcome::NothingToRetry;
            }
        }
        self.submit().await
    }

    fn clear_finished(state: &mut SessionState<D>) {
        if state.status.is_finished() {
            state.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RelayError, RelayResult};
    use crate::forms::FormKind;
    use crate::models::{ContactDraft, QuoteDraft};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRelay {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AsyncRelay for CountingRelay {
        async fn submit(&self, _payload: RelayPayload) -> RelayResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(RelayError::StatusError { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    fn relay(fail: bool) -> Arc<CountingRelay> {
        Arc::new(CountingRelay {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    fn valid_contact() -> ContactDraft {
        ContactDraft {
            name: "Maria".into(),
            email: "maria@example.com".into(),
            subject: "Site novo".into(),
            message: "Quero um site para a minha loja".into(),
        }
    }

    #[tokio::test]
    async fn test_rejected_submit_makes_no_call() {
        let relay = relay(false);
        let form = FormSession::<ContactDraft>::new(relay.clone(), Metrics::new());

        let outcome = form.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 4));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.status().await, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        let relay = relay(false);
        let form = FormSession::<ContactDraft>::new(relay.clone(), Metrics::new());
        form.fill(valid_contact()).await;

        let outcome = form.submit().await;
        assert_eq!(outcome.label(), "delivered");
        assert_eq!(form.draft().await, ContactDraft::default());
        assert!(matches!(form.status().await, SubmissionStatus::Succeeded { .. }));

        form.set_field("name", "Jo").await.unwrap();
        assert_eq!(form.status().await, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_failure_keeps_draft_and_allows_retry() {
        let relay = relay(true);
        let form = FormSession::<QuoteDraft>::new(relay.clone(), Metrics::new());
        form.fill(QuoteDraft {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            phone: String::new(),
            project_type: "website".into(),
            description: "Site institucional com cinco páginas".into(),
        })
        .await;
        let before = form.draft().await;

        let outcome = form.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: FormKind::Quote.failure_message().to_string()
            }
        );
        assert_eq!(form.draft().await, before);

        assert_eq!(form.retry().await.label(), "failed");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_retry_without_failure() {
        let form = FormSession::<ContactDraft>::new(relay(false), Metrics::new());
        assert_eq!(form.retry().await, SubmitOutcome::NothingToRetry);
    }

    #[tokio::test]
    async fn test_unknown_field() {
        let form = FormSession::<ContactDraft>::new(relay(false), Metrics::new());
        assert!(form.set_field("projectType", "website").await.is_err());
    }
}
