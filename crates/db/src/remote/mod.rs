//! Client for the hosted backend's REST surface.
//!
//! The backend speaks three dialects under one base URL: table access under
//! `/rest/v1`, password auth under `/auth/v1`, and object storage under
//! `/storage/v1`. All of them take the project API key in an `apikey` header.

mod auth;
pub mod rows;
mod storage;
mod table;

pub use auth::{AuthClient, AuthUser, Session};
pub use storage::{object_name, StorageClient, PROJECT_IMAGES_BUCKET};
pub use table::RemoteTable;

use reqwest::RequestBuilder;
use serde::Deserialize;

use crate::error::StoreError;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL, e.g. `https://abc.supabase.co`. No trailing slash.
    pub url: String,
    /// Anonymous project key.
    pub api_key: String,
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Shared HTTP plumbing for the table, auth, and storage clients.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.url, path)
    }

    /// Start a request carrying the project key. `bearer` overrides the
    /// key in the `Authorization` header (a signed-in user's token).
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        bearer: Option<&str>,
    ) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("apikey", &self.config.api_key)
            .bearer_auth(bearer.unwrap_or(&self.config.api_key))
    }

    /// Map a non-2xx response to [`StoreError::Backend`], pulling the
    /// human-readable message out of the JSON body when there is one.
    pub(crate) async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(StoreError::Backend {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// The backend's dialects disagree on where the message lives.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description).or(b.error))
        .unwrap_or_else(|| body.to_string())
}
