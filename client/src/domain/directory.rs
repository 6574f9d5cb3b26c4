//! The experience directory service.
//!
//! Holds the latest [`Snapshot`] and implements the refresh, lookup, filter,
//! and delete operations over it. Callers drive the cadence: invoke
//! [`ExperienceDirectory::refresh`] on whatever schedule the environment
//! dictates (screen focus, pull-to-refresh, poll) and again after the
//! external creation form reports success.

use std::sync::Arc;

use crate::domain::error::{DirectoryError, RefreshCause};
use crate::domain::experience::{Experience, ExperienceId};
use crate::domain::ports::{ExperienceService, UserService};
use crate::domain::snapshot::Snapshot;
use crate::domain::user::{DisplayName, UserId};

/// Directory over the experience and user collections.
///
/// Starts empty; the first successful [`refresh`](Self::refresh) loads a
/// snapshot, and later failures — refresh or delete — keep the last good
/// snapshot in place rather than clearing the view. Errors are returned to
/// the caller of the failing operation, never stored.
pub struct ExperienceDirectory<E, U> {
    experience_service: Arc<E>,
    user_service: Arc<U>,
    snapshot: Option<Snapshot>,
}

impl<E, U> ExperienceDirectory<E, U> {
    /// Create an empty directory with the given service collaborators.
    pub fn new(experience_service: Arc<E>, user_service: Arc<U>) -> Self {
        Self {
            experience_service,
            user_service,
            snapshot: None,
        }
    }

    /// The snapshot loaded by the most recent successful refresh, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Whether at least one refresh has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl<E, U> ExperienceDirectory<E, U>
where
    E: ExperienceService,
    U: UserService,
{
    /// Fetch both collections concurrently and replace the snapshot once
    /// both succeed.
    ///
    /// The first-observed fetch failure is returned as
    /// [`DirectoryError::RefreshFailed`] and the previous snapshot is kept
    /// untouched; the two collections are never mixed across refreshes.
    pub async fn refresh(&mut self) -> Result<&Snapshot, DirectoryError> {
        let (experiences, users) = tokio::try_join!(
            async {
                self.experience_service
                    .list()
                    .await
                    .map_err(RefreshCause::Experiences)
            },
            async { self.user_service.list().await.map_err(RefreshCause::Users) },
        )
        .map_err(|cause| DirectoryError::RefreshFailed { cause })?;

        Ok(&*self.snapshot.insert(Snapshot::new(experiences, users)))
    }

    /// Resolve an owner id against the current snapshot.
    ///
    /// `None` is the "unknown owner" sentinel: the id names no user in the
    /// snapshot, or no refresh has succeeded yet. Never fails.
    pub fn resolve_owner_name(&self, owner: &UserId) -> Option<&DisplayName> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.owner_name(owner))
    }

    /// Return the experiences owned by the user named exactly `query`.
    ///
    /// Delegates to [`Snapshot::filter_by_owner_name`]; before the first
    /// successful refresh the result is empty. Never fails.
    pub fn filter_by_owner_name(&self, query: &str) -> Vec<Experience> {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.filter_by_owner_name(query))
            .unwrap_or_default()
    }

    /// Delete an experience remotely, then drop it from the snapshot.
    ///
    /// The local removal only happens after the remote delete confirms, so
    /// the visible list never shows a phantom deletion: on
    /// [`DirectoryError::DeleteFailed`] the snapshot still contains the
    /// record and no rollback is needed.
    pub async fn delete_experience(&mut self, id: &ExperienceId) -> Result<(), DirectoryError> {
        self.experience_service
            .delete(id)
            .await
            .map_err(|cause| DirectoryError::DeleteFailed {
                id: id.clone(),
                cause,
            })?;

        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.remove_experience(id);
        }
        Ok(())
    }
}
