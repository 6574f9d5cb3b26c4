//! Driven port for the remote user directory.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::user::User;

define_port_error! {
    /// Errors surfaced while calling the user service.
    pub enum UserServiceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user service transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "user service timed out: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "user service response decode failed: {message}",
        /// The service rejected the request before executing it.
        InvalidRequest { message: String } =>
            "user service rejected request: {message}",
        /// The service answered with an unexpected status.
        Upstream { status: u16, message: String } =>
            "user service failed with status {status}: {message}",
    }
}

impl UserServiceError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Upstream { .. }
        )
    }
}

/// Port for listing the users experiences are joined against.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every known user, in upstream order.
    async fn list(&self) -> Result<Vec<User>, UserServiceError>;
}

/// Fixture implementation returning one deterministic user.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserService;

#[async_trait]
impl UserService for FixtureUserService {
    async fn list(&self) -> Result<Vec<User>, UserServiceError> {
        const FIXTURE_ID: &str = "fixture-user";
        const FIXTURE_NAME: &str = "Ada Lovelace";

        // The values are compile-time constants; surface invalid data as a
        // decode error so automated checks catch accidental regressions.
        User::try_from_strings(FIXTURE_ID, FIXTURE_NAME)
            .map(|user| vec![user])
            .map_err(|err| UserServiceError::decode(format!("fixture user is invalid: {err}")))
    }
}
