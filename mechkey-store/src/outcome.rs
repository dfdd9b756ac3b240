//! Business-rule outcomes of store operations.

use serde::{Deserialize, Serialize};

/// Result of a store operation that can be refused for a business reason.
///
/// Refusals such as a stock ceiling or a missing cart item are expected and
/// reported here; they are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the operation did what was asked.
    pub success: bool,
    /// User-facing message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionOutcome {
    /// A success with a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// A success with nothing to report.
    pub fn done() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A refusal with a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Returns the message or an empty string.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
