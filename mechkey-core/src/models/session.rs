//! Admin session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::SessionState;

/// Profile of the logged-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Authenticated/anonymous state of the admin user.
///
/// Persisted as `{"isAuthenticated": bool, "user": {...} | null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Whether an admin is logged in.
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: bool,
    /// Profile of the logged-in admin.
    #[serde(rename = "user", default)]
    pub admin_user: Option<AdminUser>,
    /// When the session was established.
    #[serde(rename = "loggedInAt", default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl AdminSession {
    /// Creates an authenticated session for `user`.
    pub fn authenticated(user: AdminUser) -> Self {
        Self {
            is_authenticated: true,
            admin_user: Some(user),
            logged_in_at: Some(Utc::now()),
        }
    }

    /// Creates an anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionState for AdminSession {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_shape() {
        let session = AdminSession {
            is_authenticated: true,
            admin_user: Some(AdminUser {
                username: "admin".to_string(),
                name: "Administrator".to_string(),
                email: "admin@mechkey.com".to_string(),
            }),
            logged_in_at: None,
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["user"]["username"], "admin");
        assert!(json.get("loggedInAt").is_none());
    }

    #[test]
    fn test_anonymous_from_null_user() {
        let session: AdminSession =
            serde_json::from_str(r#"{"isAuthenticated": false, "user": null}"#).unwrap();
        assert_eq!(session, AdminSession::anonymous());
        assert!(!SessionState::is_authenticated(&session));
    }
}
