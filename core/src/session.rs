//! Session data model and persistence helpers.
//!
//! A [`Session`] is the pair of bearer token and cached user profile that
//! represents "who is currently using the client". It is persisted as two
//! string-valued keys ([`keys::TOKEN`] and [`keys::USER`]) that are always
//! set and cleared together; the helpers in this module correct any partial
//! or corrupted state they encounter by clearing both keys.

use crate::repository::SessionRepository;
use serde::{Deserialize, Serialize};

/// Keys under which session state is persisted.
pub mod keys {
    /// Bearer credential.
    pub const TOKEN: &str = "token";

    /// Serialized [`super::UserProfile`] JSON.
    pub const USER: &str = "user";
}

/// User role, a closed set of strings on the wire.
///
/// `ADMIN` is the privileged value. Unknown strings are preserved
/// round-trip so a newer backend role does not corrupt a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Administrator, may access the admin back-office.
    Admin,
    /// Regular customer account.
    User,
    /// A role string this client does not know about.
    Other(String),
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Other(s) => s,
        }
    }

    /// Whether this role grants access to admin-only routes.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ADMIN" => Self::Admin,
            "USER" => Self::User,
            _ => Self::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Cached user profile, mirroring the `/users/me` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Account role.
    pub role: Role,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Real (legal) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Creation timestamp, as formatted by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Last-update timestamp, as formatted by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl UserProfile {
    /// Create a profile with only the required fields set.
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            phone: None,
            email: None,
            real_name: None,
            avatar_url: None,
            create_time: None,
            update_time: None,
        }
    }
}

/// The client-held credential + profile pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// Cached user profile.
    pub profile: UserProfile,
}

impl Session {
    /// Create a session from a token and profile.
    #[must_use]
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }
}

/// Persist `session` under both keys.
pub fn persist(repo: &dyn SessionRepository, session: &Session) {
    match serde_json::to_string(&session.profile) {
        Ok(json) => {
            repo.set(keys::TOKEN, &session.token);
            repo.set(keys::USER, &json);
        }
        Err(err) => {
            // Leaving a stale pair behind would violate the paired-keys
            // invariant, so fail closed.
            tracing::warn!(error = %err, "failed to serialize profile, clearing session");
            discard(repo);
        }
    }
}

/// Restore the persisted session, if one is present and well-formed.
///
/// Partial state (one key without the other) and corrupted profile JSON are
/// both corrected by clearing the pair; in either case no session is
/// returned.
pub fn restore(repo: &dyn SessionRepository) -> Option<Session> {
    let token = repo.get(keys::TOKEN);
    let user = repo.get(keys::USER);

    let (Some(token), Some(user)) = (token, user) else {
        discard(repo);
        return None;
    };

    match serde_json::from_str::<UserProfile>(&user) {
        Ok(profile) => Some(Session { token, profile }),
        Err(err) => {
            tracing::warn!(error = %err, "stored profile is corrupted, clearing session");
            discard(repo);
            None
        }
    }
}

/// Clear both persisted keys.
///
/// Returns `true` if any value was actually removed, `false` if the session
/// was already empty. Clearing an empty session is a no-op, which makes the
/// operation safe to invoke from concurrently failing requests.
pub fn discard(repo: &dyn SessionRepository) -> bool {
    let had_token = repo.clear(keys::TOKEN);
    let had_user = repo.clear(keys::USER);
    had_token || had_user
}

/// Read the persisted bearer token without touching the profile.
#[must_use]
pub fn stored_token(repo: &dyn SessionRepository) -> Option<String> {
    repo.get(keys::TOKEN)
}

#[cfg(all(test, feature = "test-utils"))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::stores::MemoryStore;

    fn profile() -> UserProfile {
        let mut p = UserProfile::new(7, "alice", Role::Admin);
        p.phone = Some("13800000000".to_string());
        p
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from("ADMIN".to_string()), Role::Admin);
        assert_eq!(Role::from("USER".to_string()), Role::User);

        let custom = Role::from("AUDITOR".to_string());
        assert_eq!(custom.as_str(), "AUDITOR");
        assert!(!custom.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_persist_then_restore() {
        let repo = MemoryStore::new();
        persist(&repo, &Session::new("tok", profile()));

        let restored = restore(&repo).map(|s| (s.token, s.profile.username));
        assert_eq!(restored, Some(("tok".to_string(), "alice".to_string())));
    }

    #[test]
    fn test_restore_empty_is_none() {
        let repo = MemoryStore::new();
        assert!(restore(&repo).is_none());
    }

    #[test]
    fn test_partial_state_clears_both_keys() {
        let repo = MemoryStore::new();
        repo.set(keys::TOKEN, "orphan");

        assert!(restore(&repo).is_none());
        assert!(repo.get(keys::TOKEN).is_none());
        assert!(repo.get(keys::USER).is_none());
    }

    #[test]
    fn test_corrupted_profile_clears_both_keys() {
        let repo = MemoryStore::new();
        repo.set(keys::TOKEN, "tok");
        repo.set(keys::USER, "not json{");

        assert!(restore(&repo).is_none());
        assert!(repo.get(keys::TOKEN).is_none());
        assert!(repo.get(keys::USER).is_none());
    }

    #[test]
    fn test_discard_reports_whether_anything_was_cleared() {
        let repo = MemoryStore::new();
        persist(&repo, &Session::new("tok", profile()));

        assert!(discard(&repo));
        assert!(!discard(&repo));
    }

    #[test]
    fn test_profile_wire_names_are_camel_case() {
        let mut p = profile();
        p.real_name = Some("Alice L".to_string());
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["realName"], "Alice L");
        assert_eq!(json["role"], "ADMIN");
        assert!(json.get("avatarUrl").is_none());
    }
}
