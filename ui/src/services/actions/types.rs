use serde::{Deserialize, Serialize};

/// Body returned by every server-side form action
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl ActionResponse {
    pub fn success(message: &str) -> Self {
        Self {
            error: None,
            success: Some(message.to_string()),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            success: None,
        }
    }

    /// Collapse the two message slots into one outcome.
    /// A non-empty error wins; blank strings count as absent.
    pub fn into_outcome(self) -> Option<ActionOutcome> {
        let non_blank = |s: Option<String>| s.filter(|m| !m.trim().is_empty());

        match (non_blank(self.error), non_blank(self.success)) {
            (Some(error), _) => Some(ActionOutcome::Error(error)),
            (None, Some(success)) => Some(ActionOutcome::Success(success)),
            (None, None) => None,
        }
    }
}

/// Result of a submitted form, only one message can ever be set
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Success(String),
    Error(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success(_))
    }
}
