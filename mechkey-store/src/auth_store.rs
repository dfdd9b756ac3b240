//! Admin session store.
//!
//! Two states: anonymous and authenticated. The session is persisted under
//! `mechkey_admin_auth` on login and removed on logout.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mechkey_core::{
    AdminSession, AdminUser, KeyValueStorage, SessionState, keys, load_json, save_json,
};
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::outcome::ActionOutcome;

// ============================================================================
// Credential Check
// ============================================================================

/// Decides whether a username/password pair may log in.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the admin profile for valid credentials, `None` otherwise.
    fn verify(&self, username: &str, password: &str) -> Option<AdminUser>;
}

/// Fixed demo account: `admin` / `admin123`.
///
/// Not an authentication mechanism. Replace with a verifier that calls the
/// backend before exposing the admin area.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentials;

impl DemoCredentials {
    /// Demo username.
    pub const USERNAME: &'static str = "admin";
    /// Demo password.
    pub const PASSWORD: &'static str = "admin123";

    /// Profile returned for the demo account.
    pub fn profile() -> AdminUser {
        AdminUser {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            email: "admin@mechkey.com".to_string(),
        }
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<AdminUser> {
        (username == Self::USERNAME && password == Self::PASSWORD).then(Self::profile)
    }
}

// ============================================================================
// Auth Store
// ============================================================================

/// The admin session.
pub struct AuthStore {
    session: RwLock<AdminSession>,
    storage: Arc<dyn KeyValueStorage>,
    verifier: Box<dyn CredentialVerifier>,
    notify: watch::Sender<u64>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("session", &*self.read())
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    /// Creates a store hydrated from `storage`, checking the demo account.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_verifier(storage, Box::new(DemoCredentials))
    }

    /// Creates a store hydrated from `storage` with a custom credential check.
    ///
    /// Malformed persisted data is logged and leaves the session anonymous.
    pub fn with_verifier(
        storage: Arc<dyn KeyValueStorage>,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        let session = match load_json::<AdminSession, _>(storage.as_ref(), keys::ADMIN_AUTH) {
            Ok(Some(session)) => session,
            Ok(None) => AdminSession::anonymous(),
            Err(e) => {
                error!(error = %e, "Error loading admin auth");
                AdminSession::anonymous()
            }
        };

        let (notify, _) = watch::channel(0);
        Self {
            session: RwLock::new(session),
            storage,
            verifier,
            notify,
        }
    }

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Logs in if the credentials check out.
    pub fn login(&self, username: &str, password: &str) -> ActionOutcome {
        let Some(user) = self.verifier.verify(username, password) else {
            warn!(username, "Admin login rejected");
            return ActionOutcome::fail("Invalid credentials");
        };

        let session = AdminSession::authenticated(user);
        if let Err(e) = save_json(self.storage.as_ref(), keys::ADMIN_AUTH, &session) {
            error!(error = %e, "Error saving admin auth");
        }
        *self.write() = session;
        self.bump();

        info!(username, "Admin logged in");
        ActionOutcome::done()
    }

    /// Logs out and forgets the persisted session.
    pub fn logout(&self) {
        *self.write() = AdminSession::anonymous();
        if let Err(e) = self.storage.remove(keys::ADMIN_AUTH) {
            error!(error = %e, "Error clearing admin auth");
        }
        self.bump();
        info!("Admin logged out");
    }

    /// Returns true if an admin is logged in.
    pub fn check_auth(&self) -> bool {
        self.read().is_authenticated
    }

    /// Returns a copy of the session.
    pub fn session(&self) -> AdminSession {
        self.read().clone()
    }

    /// Returns the logged-in admin, if any.
    pub fn admin_user(&self) -> Option<AdminUser> {
        self.read().admin_user.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, AdminSession> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AdminSession> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.notify.send_modify(|version| *version += 1);
    }
}

impl SessionState for AuthStore {
    fn is_authenticated(&self) -> bool {
        self.check_auth()
    }
}
