//! The session/authorization state machine.

use std::sync::{Arc, Mutex, PoisonError};

use storefront_api::UsersApi;
use storefront_api::users::Credentials;
use storefront_client::Http;
use storefront_core::session::{self, keys};
use storefront_core::{Session, SessionRepository, UserProfile};

/// Partial profile update, merged field-by-field into the current profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New contact phone number.
    pub phone: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New real (legal) name.
    pub real_name: Option<String>,
    /// New avatar image URL.
    pub avatar_url: Option<String>,
}

/// Owns the login/registration/logout/refresh lifecycle and the derived
/// authorization flags.
///
/// The manager moves between two states: `Anonymous` (no token, no
/// profile) and `Authenticated` (both present). Token and profile are
/// committed and cleared together, through the injected repository; the
/// in-memory mirror exists so `is_admin` and `profile` do not re-read
/// storage on every call.
pub struct AuthManager {
    http: Arc<Http>,
    repo: Arc<dyn SessionRepository>,
    current: Mutex<Option<Session>>,
    last_error: Mutex<Option<String>>,
}

impl AuthManager {
    /// Create the manager and restore any persisted session.
    #[must_use]
    pub fn new(http: Arc<Http>, repo: Arc<dyn SessionRepository>) -> Self {
        let manager = Self {
            http,
            repo,
            current: Mutex::new(None),
            last_error: Mutex::new(None),
        };
        manager.check_auth();
        manager
    }

    /// Register a new account.
    ///
    /// Registration never authenticates: the state stays `Anonymous`
    /// regardless of outcome, and a failure is recorded in
    /// [`last_error`](Self::last_error).
    pub async fn register(&self, username: &str, password: &str) -> bool {
        self.set_error(None);

        match UsersApi::new(&self.http)
            .register(&Credentials::new(username, password))
            .await
        {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                self.set_error(Some(err.to_string()));
                false
            }
        }
    }

    /// Log in and commit the session.
    ///
    /// The token is persisted first so the follow-up profile fetch
    /// authenticates with it; only when that fetch succeeds do token and
    /// profile commit together. A login payload without a token is a
    /// failure with no state change; a failed profile fetch rolls the
    /// session back to `Anonymous`.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.set_error(None);
        let api = UsersApi::new(&self.http);

        let token = match api.login(&Credentials::new(username, password)).await {
            Ok(payload) => payload.token,
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.set_error(Some(err.to_string()));
                self.clear_session();
                return false;
            }
        };

        let Some(token) = token else {
            tracing::warn!("login response carried no token");
            self.set_error(Some("login failed: no token returned".to_string()));
            return false;
        };

        self.repo.set(keys::TOKEN, &token);

        match api.me().await {
            Ok(profile) => {
                self.commit(Session::new(token, profile));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch after login failed");
                self.set_error(Some(err.to_string()));
                self.clear_session();
                false
            }
        }
    }

    /// Clear to `Anonymous`. Always succeeds.
    pub fn logout(&self) {
        self.clear_session();
    }

    /// Restore the persisted session, typically at process start.
    ///
    /// A corrupted stored profile forces `Anonymous` and clears both
    /// persisted keys.
    pub fn check_auth(&self) -> bool {
        let restored = session::restore(&self.repo);
        let authenticated = restored.is_some();
        *self.lock_current() = restored;
        authenticated
    }

    /// Re-fetch the profile for the current token.
    ///
    /// Without a token this is a no-op failure. Any fetch failure clears
    /// to `Anonymous`: the fetch only fails through the pipeline's
    /// classified errors, most commonly an expired token whose 401 has
    /// already cleared storage, making this an idempotent confirmation.
    pub async fn refresh_me(&self) -> bool {
        let Some(token) = session::stored_token(&self.repo) else {
            return false;
        };

        self.set_error(None);

        match UsersApi::new(&self.http).me().await {
            Ok(profile) => {
                self.commit(Session::new(token, profile));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile refresh failed, dropping session");
                self.clear_session();
                false
            }
        }
    }

    /// Merge fields into the current profile and re-persist it.
    ///
    /// No-op when `Anonymous`.
    pub fn update_user(&self, update: ProfileUpdate) {
        let mut current = self.lock_current();
        let Some(existing) = current.as_mut() else {
            return;
        };

        let profile = &mut existing.profile;
        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }
        if let Some(email) = update.email {
            profile.email = Some(email);
        }
        if let Some(real_name) = update.real_name {
            profile.real_name = Some(real_name);
        }
        if let Some(avatar_url) = update.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }

        session::persist(&self.repo, existing);
    }

    /// Whether a session is currently committed.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock_current().is_some()
    }

    /// Whether the current session carries the privileged role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.lock_current()
            .as_ref()
            .is_some_and(|s| s.profile.role.is_admin())
    }

    /// The current profile, if authenticated.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.lock_current().as_ref().map(|s| s.profile.clone())
    }

    /// The current token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock_current().as_ref().map(|s| s.token.clone())
    }

    /// Message of the most recent failed operation.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.lock_error().clone()
    }

    /// Forget the last error.
    pub fn clear_error(&self) {
        self.set_error(None);
    }

    /// Drop the in-memory state without touching storage.
    pub fn reset(&self) {
        *self.lock_current() = None;
        self.set_error(None);
    }

    fn commit(&self, new_session: Session) {
        session::persist(&self.repo, &new_session);
        *self.lock_current() = Some(new_session);
    }

    fn clear_session(&self) {
        session::discard(&self.repo);
        *self.lock_current() = None;
    }

    fn set_error(&self, message: Option<String>) {
        *self.lock_error() = message;
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_error(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.last_error.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
