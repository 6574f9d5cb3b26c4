//! Driven port for the remote experience service.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::experience::{Experience, ExperienceId};
use crate::domain::user::UserId;

/// Fields posted to mint a new experience.
///
/// The directory never calls `create` itself; the external creation form
/// does, and the directory is then asked to refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    /// Owner the new record is attributed to.
    pub owner: UserId,
    /// Short human-readable title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
}

define_port_error! {
    /// Errors surfaced while calling the experience service.
    pub enum ExperienceServiceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "experience service transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "experience service timed out: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "experience service response decode failed: {message}",
        /// The addressed record does not exist upstream.
        NotFound { message: String } =>
            "experience not found upstream: {message}",
        /// The service rejected the request before executing it.
        InvalidRequest { message: String } =>
            "experience service rejected request: {message}",
        /// The service answered with an unexpected status.
        Upstream { status: u16, message: String } =>
            "experience service failed with status {status}: {message}",
    }
}

impl ExperienceServiceError {
    /// Return whether retrying this error is expected to help.
    ///
    /// The directory never retries on its own; callers deciding their own
    /// cadence can use this to tell transient failures from permanent ones.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Upstream { .. }
        )
    }
}

/// Port for listing, deleting, and creating experiences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceService: Send + Sync {
    /// List every experience visible to the caller, in upstream order.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceServiceError>;

    /// Delete the experience carrying `id`.
    async fn delete(&self, id: &ExperienceId) -> Result<(), ExperienceServiceError>;

    /// Create a new experience from the form payload and return the stored
    /// record.
    async fn create(&self, fields: &NewExperience) -> Result<Experience, ExperienceServiceError>;
}

/// Fixture implementation: an empty service that accepts every deletion and
/// echoes creations under a fixed id.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureExperienceService;

#[async_trait]
impl ExperienceService for FixtureExperienceService {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceServiceError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &ExperienceId) -> Result<(), ExperienceServiceError> {
        Ok(())
    }

    async fn create(&self, fields: &NewExperience) -> Result<Experience, ExperienceServiceError> {
        const FIXTURE_ID: &str = "fixture-experience";

        Experience::try_from_parts(
            FIXTURE_ID,
            fields.owner.as_ref(),
            fields.title.clone(),
            fields.description.clone(),
        )
        .map_err(|err| {
            ExperienceServiceError::decode(format!("fixture experience is invalid: {err}"))
        })
    }
}
