//! Trait definitions for `MechKey`.
//!
//! These are the seams between the stores, the HTTP wrapper and whatever
//! hosts them: persisted storage and read access to the admin session.

use crate::error::CoreError;

/// Persisted key-value storage for small string blobs.
///
/// Mirrors browser local storage: values are opaque strings, usually JSON,
/// stored under a fixed key. Implementations must be safe to share between
/// the stores and the HTTP client, which reads the bearer token on every
/// request.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Read access to the admin session, consulted by the navigation guard.
pub trait SessionState {
    /// Returns true if an admin is currently logged in.
    fn is_authenticated(&self) -> bool;
}
