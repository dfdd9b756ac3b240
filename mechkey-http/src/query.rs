//! Query-string construction.

use serde::Serialize;
use url::form_urlencoded;

/// Filter values the storefront UI uses to mean "no filter".
const SENTINEL_VALUES: &[&str] = &["All Products", "All Sizes", "All Types"];

/// Ordered query parameters for an API request.
///
/// Optional values that are absent or empty are dropped rather than sent as
/// empty parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter unconditionally.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter if the value is present and not empty.
    #[must_use]
    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.with(key, v),
            _ => self,
        }
    }

    /// Adds a boolean flag encoded as `1` or `0`.
    #[must_use]
    pub fn with_flag(self, key: &str, flag: bool) -> Self {
        self.with(key, if flag { "1" } else { "0" })
    }

    /// Returns the value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if a parameter named `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Builds a URL query string for client-side navigation.
///
/// Empty values and the UI's "All ..." sentinels are skipped.
pub fn build_query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if value.is_empty() || SENTINEL_VALUES.contains(&value) {
            continue;
        }
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
