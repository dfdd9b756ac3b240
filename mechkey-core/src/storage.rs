//! Storage keys, JSON helpers, and the in-memory storage backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::CoreError;
use crate::traits::KeyValueStorage;

/// Storage keys shared by the stores and the HTTP client.
pub mod keys {
    /// Bearer token attached to outgoing API requests.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Persisted admin session.
    pub const ADMIN_AUTH: &str = "mechkey_admin_auth";
    /// Persisted cart line items.
    pub const CART: &str = "mechkey_cart";
}

// ============================================================================
// JSON Helpers
// ============================================================================

/// Loads and deserializes the JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored. A stored value that does not
/// parse as `T` is an error; callers decide whether to fall back to defaults.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, CoreError>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)?;
    debug!(key, "Loaded JSON value");
    Ok(Some(value))
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), CoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)?;
    debug!(key, bytes = raw.len(), "Saved JSON value");
    Ok(())
}

// ============================================================================
// Memory Storage
// ============================================================================

/// Process-local storage backed by a map.
///
/// Used for tests and for runs that should not touch the disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    /// Returns true if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().is_ok_and(|entries| entries.contains_key(key))
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
