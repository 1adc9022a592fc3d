//! User account endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};
use storefront_core::{Role, UserProfile};

/// Login / registration credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Plaintext password (sent over TLS, never stored).
    pub password: String,
}

impl Credentials {
    /// Create a credentials pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// `POST /users/login` payload.
///
/// A response that omits the token is treated as a failed login by the
/// auth manager, so the field is optional here rather than defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Issued bearer credential.
    pub token: Option<String>,
    /// Role reported at login time.
    pub role: Option<Role>,
}

/// `PUT /users/me` payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeRequest {
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Real (legal) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// User record as seen by the admin back-office.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// User id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Account role.
    pub role: Option<Role>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Account status flag.
    pub status: Option<i32>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last-update timestamp.
    pub update_time: Option<String>,
}

#[derive(Serialize)]
struct KeywordQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a str>,
}

/// Client for `/users` and `/admin/users`.
pub struct UsersApi<'a> {
    http: &'a Http,
}

impl<'a> UsersApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Register a new account. Does not authenticate.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn register(&self, credentials: &Credentials) -> Result<i64> {
        self.http.post("/users/register", credentials).await
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.http.post("/users/login", credentials).await
    }

    /// Fetch the profile of the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn me(&self) -> Result<UserProfile> {
        self.http.get("/users/me").await
    }

    /// Update the current user's contact fields.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn update_me(&self, update: &UpdateMeRequest) -> Result<String> {
        self.http.put("/users/me", update).await
    }

    /// List users (admin), optionally filtered by keyword.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_list(&self, keyword: Option<&str>) -> Result<Vec<AdminUser>> {
        self.http
            .get_query("/admin/users", &KeywordQuery { keyword })
            .await
    }
}
