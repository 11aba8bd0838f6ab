use serde::{Deserialize, Serialize};

use crate::utils::constants::ADMIN_ROLE;

/// Client-side authentication state.
///
/// `is_authenticated` and `is_admin` are derived: they are only ever set
/// through [`Session::authenticated`] / [`Session::from_persisted`], which
/// compute them from `token`, `user` and `role`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<String>,
    pub role: Option<String>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub error: Option<String>,
}

impl Session {
    /// Canonical logged-out state
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(token: &str, user: &str, role: Option<&str>) -> Self {
        Self {
            token: Some(token.to_string()),
            user: Some(user.to_string()),
            role: role.map(str::to_string),
            is_authenticated: true,
            is_admin: is_admin_role(role),
            error: None,
        }
    }

    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.clone(),
            user: self.user.clone(),
            role: self.role.clone(),
            is_authenticated: self.is_authenticated,
            is_admin: self.is_admin,
        }
    }

    /// Rebuild a session from storage. The stored flags are ignored and
    /// recomputed so a hand-edited record cannot claim admin or auth status.
    pub fn from_persisted(record: PersistedSession) -> Self {
        match (record.token, record.user) {
            (Some(token), Some(user)) if !token.is_empty() && !user.is_empty() => {
                Self::authenticated(&token, &user, record.role.as_deref())
            }
            _ => Self::empty(),
        }
    }
}

pub fn is_admin_role(role: Option<&str>) -> bool {
    role == Some(ADMIN_ROLE)
}

/// Shape of the encrypted `auth-storage` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_derives_flags() {
        let admin = Session::authenticated("t", "alice", Some("admin"));
        assert!(admin.is_authenticated);
        assert!(admin.is_admin);

        let user = Session::authenticated("t", "bob", Some("user"));
        assert!(user.is_authenticated);
        assert!(!user.is_admin);

        let no_role = Session::authenticated("t", "carol", None);
        assert!(!no_role.is_admin);
    }

    #[test]
    fn test_persisted_record_uses_camel_case() {
        let json = serde_json::to_value(Session::authenticated("t", "alice", Some("admin")).to_persisted()).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["user"], "alice");
    }

    #[test]
    fn test_from_persisted_recomputes_flags() {
        let forged = PersistedSession {
            token: None,
            user: Some("mallory".to_string()),
            role: Some("admin".to_string()),
            is_authenticated: true,
            is_admin: true,
        };
        assert_eq!(Session::from_persisted(forged), Session::empty());

        let elevated = PersistedSession {
            token: Some("t".to_string()),
            user: Some("bob".to_string()),
            role: Some("user".to_string()),
            is_authenticated: true,
            is_admin: true,
        };
        assert!(!Session::from_persisted(elevated).is_admin);
    }
}
