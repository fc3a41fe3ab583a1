// HTTP client wrapper for the Comptoir backend API
//
// Merges default headers (JSON content type, bearer credential when a token
// is held) under caller-supplied ones, and normalizes every failure into
// ApiError. A 401 from any call site clears the session and redirects to the
// login route before the error is returned.

use std::sync::Arc;

use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use comptoir_session::SessionStore;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {payload}")]
    Api {
        status: u16,
        /// Server-supplied error payload, e.g. field validation messages
        payload: serde_json::Value,
    },

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Absolute URLs pass through; anything else is joined onto the base URL.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<serde_json::Value, ()>(Method::DELETE, path, None, None)
            .await
            .map(|_| ())
    }

    /// Issue a request with optional extra headers. Caller-supplied headers
    /// win over the wrapper's defaults on conflict.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError> {
        // Captured before the call so a 401 resolving after a re-login does
        // not tear down the replacement session.
        let generation = self.session.generation();

        let mut req = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(extra) = headers {
            req = req.headers(extra);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        self.handle_response(response, generation).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        generation: u64,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text));
            if status == StatusCode::UNAUTHORIZED {
                tracing::warn!("request rejected with 401, tearing down session");
                self.session.logout_if_generation(generation);
            }
            return Err(ApiError::Api {
                status: status.as_u16(),
                payload,
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            // 204-style responses deserialize as JSON null
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
