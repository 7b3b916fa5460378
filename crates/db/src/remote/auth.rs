use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use super::RemoteClient;
use crate::error::StoreError;

/// The signed-in administrator as the auth service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens returned by a successful password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// Password auth against the hosted backend.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: RemoteClient,
}

impl AuthClient {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Exchange email and password for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=password", None)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let session: Session = RemoteClient::parse_response(response).await?;
        tracing::info!(user_id = %session.user.id, "Admin signed in");
        Ok(session)
    }

    /// The user owning `token`, or `None` when the token is expired, revoked
    /// or otherwise rejected.
    pub async fn current_user(&self, token: &str) -> Result<Option<AuthUser>, StoreError> {
        let response = self
            .client
            .request(Method::GET, "/auth/v1/user", Some(token))
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        Ok(Some(RemoteClient::parse_response(response).await?))
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/logout", Some(token))
            .send()
            .await?;

        RemoteClient::check_status(response).await
    }
}
