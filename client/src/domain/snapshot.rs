//! Paired experience and user collections captured by one refresh.

use crate::domain::experience::{Experience, ExperienceId};
use crate::domain::user::{DisplayName, User, UserId};

/// The experiences and users fetched together by one successful refresh.
///
/// ## Invariants
/// - Both collections come from the same refresh; the directory never mixes
///   a fresh experience list with a stale user list.
/// - Sequence order is the upstream listing order; queries and deletion
///   preserve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    experiences: Vec<Experience>,
    users: Vec<User>,
}

impl Snapshot {
    /// Capture a snapshot from one pair of fetches.
    pub fn new(experiences: Vec<Experience>, users: Vec<User>) -> Self {
        Self { experiences, users }
    }

    /// Experiences in upstream listing order.
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Users in upstream listing order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Resolve an owner id to the owning user's display name.
    ///
    /// Returns `None` when no user in the snapshot carries the id. Ids are
    /// unique by upstream contract; should that contract ever be violated,
    /// the first match in snapshot order wins.
    pub fn owner_name(&self, owner: &UserId) -> Option<&DisplayName> {
        self.users
            .iter()
            .find(|user| user.id() == owner)
            .map(User::name)
    }

    /// Return the experiences owned by the user whose display name equals
    /// `query` exactly (case-sensitive), in snapshot order.
    ///
    /// A query naming no user yields an empty list, never the unfiltered
    /// one. The empty string can never name a user — display names are never
    /// blank — so it also yields an empty list.
    pub fn filter_by_owner_name(&self, query: &str) -> Vec<Experience> {
        let Some(user) = self.users.iter().find(|user| user.name().as_ref() == query) else {
            return Vec::new();
        };

        self.experiences
            .iter()
            .filter(|experience| experience.owner() == user.id())
            .cloned()
            .collect()
    }

    /// Remove the single experience carrying `id`, keeping the order of the
    /// rest. Removing an id absent from the snapshot is a no-op.
    pub(crate) fn remove_experience(&mut self, id: &ExperienceId) {
        if let Some(index) = self
            .experiences
            .iter()
            .position(|experience| experience.id() == id)
        {
            self.experiences.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(id: &str, owner: &str) -> Experience {
        Experience::from_parts(id, owner, "", None)
    }

    #[test]
    fn owner_name_prefers_the_first_duplicate_in_snapshot_order() {
        // Upstream guarantees unique ids; this pins the fallback behaviour
        // if that guarantee is ever broken.
        let snapshot = Snapshot::new(
            Vec::new(),
            vec![
                User::from_strings("u1", "First"),
                User::from_strings("u1", "Second"),
            ],
        );

        let owner = UserId::new("u1").expect("valid id");
        let name = snapshot.owner_name(&owner).expect("owner resolves");
        assert_eq!(name.as_ref(), "First");
    }

    #[test]
    fn filter_matches_only_the_first_user_with_a_shared_name() {
        let snapshot = Snapshot::new(
            vec![experience("e1", "u1"), experience("e2", "u2")],
            vec![
                User::from_strings("u1", "Ana"),
                User::from_strings("u2", "Ana"),
            ],
        );

        let filtered = snapshot.filter_by_owner_name("Ana");
        assert_eq!(filtered, vec![experience("e1", "u1")]);
    }

    #[test]
    fn removing_an_absent_id_is_a_noop() {
        let mut snapshot = Snapshot::new(vec![experience("e1", "u1")], Vec::new());
        let absent = ExperienceId::new("e9").expect("valid id");

        snapshot.remove_experience(&absent);
        assert_eq!(snapshot.experiences().len(), 1);
    }
}
