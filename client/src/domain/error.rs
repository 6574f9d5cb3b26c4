//! Directory-level error types.
//!
//! Both variants are recoverable: the directory keeps its last snapshot and
//! can always be asked to refresh again. Lookups and filters never fail;
//! absence is an empty result, not an error.

use thiserror::Error;

use crate::domain::experience::ExperienceId;
use crate::domain::ports::{ExperienceServiceError, UserServiceError};

/// Which refresh fetch failed first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshCause {
    /// The experience listing failed.
    #[error("experience service: {0}")]
    Experiences(ExperienceServiceError),
    /// The user listing failed.
    #[error("user service: {0}")]
    Users(UserServiceError),
}

/// Errors returned by the directory's mutating operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A refresh fetch failed; the previous snapshot, if any, is untouched.
    #[error("refresh failed: {cause}")]
    RefreshFailed { cause: RefreshCause },
    /// The remote delete failed; the snapshot still contains the record.
    #[error("delete of experience {id} failed: {cause}")]
    DeleteFailed {
        id: ExperienceId,
        cause: ExperienceServiceError,
    },
}
