//! The HTTP pipeline.
//!
//! [`Http`] is the single chokepoint for every outbound call the client
//! makes. Each verb performs exactly one network attempt: the outbound
//! stages run front-to-back over the built request, the response (or its
//! absence) is classified into an [`ApiError`], and a well-formed envelope
//! is unwrapped so callers only ever see its `data`.
//!
//! The one cross-cutting side effect lives here: an HTTP 401 clears the
//! persisted session and fires the [`SessionExpiredObserver`] synchronously
//! before the error reaches the caller, so no caller can race a stale token
//! against the redirect.

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::observer::{NoopObserver, SessionExpiredObserver};
use crate::stage::{BearerAuth, CacheBust, RequestStage};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use storefront_core::{SessionRepository, session};

/// HTTP pipeline over a storefront backend.
#[derive(Clone)]
pub struct Http {
    client: Client,
    config: ClientConfig,
    repo: Arc<dyn SessionRepository>,
    stages: Vec<Arc<dyn RequestStage>>,
    observer: Arc<dyn SessionExpiredObserver>,
    // Serializes the 401 path: the two-key clear must act as one latch.
    expiry_gate: Arc<Mutex<()>>,
}

impl Http {
    /// Create a pipeline over `config` reading credentials from `repo`.
    ///
    /// The built-in stages (bearer injection, GET cache-busting) are always
    /// installed, in that order, ahead of any stage added later.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestSetup`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig, repo: Arc<dyn SessionRepository>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::RequestSetup(e.to_string()))?;

        let stages: Vec<Arc<dyn RequestStage>> = vec![
            Arc::new(BearerAuth::new(Arc::clone(&repo))),
            Arc::new(CacheBust::new()),
        ];

        Ok(Self {
            client,
            config,
            repo,
            stages,
            observer: Arc::new(NoopObserver),
            expiry_gate: Arc::new(Mutex::new(())),
        })
    }

    /// Append an outbound stage after the built-in ones.
    #[must_use]
    pub fn with_stage(mut self, stage: Arc<dyn RequestStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Register the session-expiry subscriber.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SessionExpiredObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// GET `path`, returning the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute::<T>(self.client.request(Method::GET, self.url(path)?))
            .await
    }

    /// GET `path` with serialized query parameters.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute::<T>(self.client.request(Method::GET, self.url(path)?).query(query))
            .await
    }

    /// POST a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T>(self.client.request(Method::POST, self.url(path)?).json(body))
            .await
    }

    /// PUT a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T>(self.client.request(Method::PUT, self.url(path)?).json(body))
            .await
    }

    /// PATCH a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T>(self.client.request(Method::PATCH, self.url(path)?).json(body))
            .await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute::<T>(self.client.request(Method::DELETE, self.url(path)?))
            .await
    }

    /// DELETE `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn delete_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T>(
            self.client
                .request(Method::DELETE, self.url(path)?)
                .json(body),
        )
        .await
    }

    /// POST a multipart form to `path`, overriding the JSON default.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failure.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        self.execute::<T>(
            self.client
                .request(Method::POST, self.url(path)?)
                .multipart(form),
        )
        .await
    }

    fn url(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        Url::parse(&joined).map_err(|e| ApiError::RequestSetup(format!("invalid url {joined}: {e}")))
    }

    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::RequestSetup(e.to_string()))?;

        for stage in &self.stages {
            stage.apply(&mut request);
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        self.unwrap_response(response).await
    }

    async fn unwrap_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let envelope: Envelope<serde_json::Value> = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let data = envelope.into_result()?;
            return serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let err = match status {
            StatusCode::UNAUTHORIZED => self.expire_session(),
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::Server {
                status: status.as_u16(),
                message: Self::server_message(response, status).await,
            },
        };

        tracing::warn!(code = err.code(), status = status.as_u16(), "request failed");
        Err(err)
    }

    /// Prefer the server-supplied envelope message for unclassified
    /// statuses; fall back to a generic message.
    async fn server_message(response: Response, status: StatusCode) -> String {
        let body = response.text().await.unwrap_or_default();
        if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            if !envelope.message.is_empty() {
                return envelope.message;
            }
        }

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            format!("request failed ({})", status.as_u16())
        }
    }

    /// The 401 path. Clears the persisted session and, only when something
    /// was actually cleared, fires the expiry signal. The gate makes the
    /// two-key clear a single latch, so any number of concurrently failing
    /// requests produce exactly one notification.
    fn expire_session(&self) -> ApiError {
        let _guard = self
            .expiry_gate
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if session::discard(&*self.repo) {
            tracing::debug!("session expired, notifying subscriber");
            self.observer.on_session_expired();
        }
        ApiError::SessionExpired
    }
}
