//! Reqwest-backed user service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::UserDocument;
use super::{ApiIdentity, body_preview, join_endpoint};
use crate::domain::ports::{UserService, UserServiceError};
use crate::domain::user::User;

/// User service adapter issuing requests against one base URL.
///
/// Route: `GET {base}/users`.
pub struct UserHttpApi {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl UserHttpApi {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(base_url, timeout, ApiIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: ApiIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            user_agent: identity.user_agent,
        })
    }
}

#[async_trait]
impl UserService for UserHttpApi {
    async fn list(&self) -> Result<Vec<User>, UserServiceError> {
        let url = join_endpoint(&self.base_url, &["users"])
            .map_err(UserServiceError::invalid_request)?;
        debug!(url = %url, "listing users");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "user listing failed");
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserServiceError> {
    let documents: Vec<UserDocument> = serde_json::from_slice(body).map_err(|error| {
        UserServiceError::decode(format!("invalid user listing JSON: {error}"))
    })?;
    documents
        .into_iter()
        .map(UserDocument::into_domain)
        .collect::<Result<Vec<_>, String>>()
        .map_err(UserServiceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserServiceError {
    if error.is_timeout() {
        UserServiceError::timeout(error.to_string())
    } else {
        UserServiceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserServiceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserServiceError::timeout(message)
        }
        _ if status.is_client_error() => UserServiceError::invalid_request(message),
        _ => UserServiceError::upstream(status.as_u16(), message),
    }
}
