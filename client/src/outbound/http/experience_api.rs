//! Reqwest-backed experience service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{ExperienceDocument, NewExperienceDocument};
use super::{ApiIdentity, body_preview, join_endpoint};
use crate::domain::experience::{Experience, ExperienceId};
use crate::domain::ports::{ExperienceService, ExperienceServiceError, NewExperience};

/// Experience service adapter issuing requests against one base URL.
///
/// Routes: `GET {base}/experiences`, `DELETE {base}/experiences/{id}`,
/// `POST {base}/experiences`.
pub struct ExperienceHttpApi {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl ExperienceHttpApi {
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

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ExperienceServiceError> {
        join_endpoint(&self.base_url, segments).map_err(ExperienceServiceError::invalid_request)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

#[async_trait]
impl ExperienceService for ExperienceHttpApi {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceServiceError> {
        let url = self.endpoint(&["experiences"])?;
        debug!(url = %url, "listing experiences");
        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "experience listing failed");
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_experiences(body.as_ref())
    }

    async fn delete(&self, id: &ExperienceId) -> Result<(), ExperienceServiceError> {
        let url = self.endpoint(&["experiences", id.as_ref()])?;
        debug!(url = %url, "deleting experience");
        let response = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        warn!(status = status.as_u16(), experience = %id, "experience delete failed");
        Err(map_status_error(status, body.as_ref()))
    }

    async fn create(&self, fields: &NewExperience) -> Result<Experience, ExperienceServiceError> {
        let url = self.endpoint(&["experiences"])?;
        debug!(url = %url, "creating experience");
        let response = self
            .request(reqwest::Method::POST, url)
            .json(&NewExperienceDocument::from(fields))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "experience create failed");
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_experience(body.as_ref())
    }
}

fn parse_experiences(body: &[u8]) -> Result<Vec<Experience>, ExperienceServiceError> {
    let documents: Vec<ExperienceDocument> = serde_json::from_slice(body).map_err(|error| {
        ExperienceServiceError::decode(format!("invalid experience listing JSON: {error}"))
    })?;
    documents
        .into_iter()
        .map(ExperienceDocument::into_domain)
        .collect::<Result<Vec<_>, String>>()
        .map_err(ExperienceServiceError::decode)
}

fn parse_experience(body: &[u8]) -> Result<Experience, ExperienceServiceError> {
    let document: ExperienceDocument = serde_json::from_slice(body).map_err(|error| {
        ExperienceServiceError::decode(format!("invalid experience JSON: {error}"))
    })?;
    document.into_domain().map_err(ExperienceServiceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> ExperienceServiceError {
    if error.is_timeout() {
        ExperienceServiceError::timeout(error.to_string())
    } else {
        ExperienceServiceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ExperienceServiceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    match status {
        StatusCode::NOT_FOUND => ExperienceServiceError::not_found(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ExperienceServiceError::timeout(message)
        }
        _ if status.is_client_error() => ExperienceServiceError::invalid_request(message),
        _ => ExperienceServiceError::upstream(status.as_u16(), message),
    }
}
