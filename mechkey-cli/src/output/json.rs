//! JSON output formatting.

use anyhow::Result;
use mechkey_core::{AdminSession, CartLineItem, Navigation};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// Cart contents with derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOutput<'a> {
    pub items: &'a [CartLineItem],
    pub item_count: u64,
    pub total_price: f64,
    pub formatted_total: String,
}

/// Admin session state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutput<'a> {
    #[serde(flatten)]
    pub session: &'a AdminSession,
    pub has_token: bool,
}

/// Navigation outcome for a requested path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOutput {
    pub requested: String,
    pub outcome: &'static str,
    pub route: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub requires_auth: bool,
}

impl NavigationOutput {
    /// Builds the output for a resolved navigation.
    pub fn new(requested: &str, navigation: &Navigation) -> Self {
        let target = navigation.target();
        Self {
            requested: requested.to_string(),
            outcome: if navigation.is_redirect() {
                "redirect"
            } else {
                "proceed"
            },
            route: target.name(),
            path: target.path(),
            title: target.title(),
            requires_auth: target.requires_auth(),
        }
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}
