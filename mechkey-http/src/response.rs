//! Response body shapes shared by the resource APIs.

use serde::{Deserialize, Serialize};

/// A payload that the backend may or may not wrap in a `data` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// `{"data": ..., ...}`
    Wrapped {
        /// The payload.
        data: T,
    },
    /// The payload itself.
    Bare(T),
}

impl<T> Envelope<T> {
    /// Returns the payload regardless of wrapping.
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } | Envelope::Bare(data) => data,
        }
    }
}

/// Acknowledgement returned by admin mutations that have no entity payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Whether the backend applied the change.
    #[serde(default = "default_success")]
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}
