//! Submission status of a single form instance.

use serde::Serialize;

/// `Idle → Submitting → (Succeeded | Failed)`, back to `Idle` on the next edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A relay call is outstanding; further submits are ignored.
    Submitting,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionStatus::Failed { .. })
    }

    /// Succeeded or failed: the last attempt has resolved.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Succeeded { .. } | SubmissionStatus::Failed { .. }
        )
    }

    /// Form-level message to show, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded { message } | SubmissionStatus::Failed { message } => {
                Some(message)
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Succeeded { .. } => "succeeded",
            SubmissionStatus::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let status = SubmissionStatus::default();
        assert_eq!(status, SubmissionStatus::Idle);
        assert!(!status.is_finished());
        assert_eq!(status.message(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let status = SubmissionStatus::Failed {
            message: "erro".to_string(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "erro");

        let json = serde_json::to_value(SubmissionStatus::Submitting).unwrap();
        assert_eq!(json["state"], "submitting");
    }
}
