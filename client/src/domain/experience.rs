//! Experience data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user::{UserId, UserValidationError};

/// Validation errors returned by [`Experience::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceValidationError {
    EmptyId,
    PaddedId,
    Owner(UserValidationError),
}

impl fmt::Display for ExperienceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "experience id must not be empty"),
            Self::PaddedId => write!(f, "experience id must not carry surrounding whitespace"),
            Self::Owner(err) => write!(f, "experience owner id is invalid: {err}"),
        }
    }
}

impl std::error::Error for ExperienceValidationError {}

impl From<UserValidationError> for ExperienceValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Owner(value)
    }
}

/// Stable experience identifier owned by the experience service.
///
/// Opaque like [`UserId`]: non-empty, no surrounding whitespace, format left
/// to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExperienceId(String);

impl ExperienceId {
    /// Validate and construct an [`ExperienceId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ExperienceValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ExperienceValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(ExperienceValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ExperienceId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ExperienceId> for String {
    fn from(value: ExperienceId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ExperienceId {
    type Error = ExperienceValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A user-owned experience record.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `owner` references a [`crate::domain::User`] id. The reference is a
///   non-enforced foreign key: an experience may name an owner missing from
///   the snapshot it was fetched with, and no referential check is made
///   here.
///
/// `title` and `description` travel with the record but are not validated;
/// the experience service owns their rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExperienceData", into = "ExperienceData")]
pub struct Experience {
    id: ExperienceId,
    owner: UserId,
    title: String,
    description: Option<String>,
}

impl Experience {
    /// Build a new [`Experience`] from validated components.
    pub fn new(
        id: ExperienceId,
        owner: UserId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            owner,
            title: title.into(),
            description,
        }
    }

    /// Build a new [`Experience`] from string inputs, panicking if
    /// validation fails.
    ///
    /// Prefer [`Experience::new`] when components are already validated.
    pub fn from_parts(
        id: impl Into<String>,
        owner: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        match Self::try_from_parts(id, owner, title, description) {
            Ok(value) => value,
            Err(err) => panic!("experience string values must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor enforcing the identifier invariants.
    pub fn try_from_parts(
        id: impl Into<String>,
        owner: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ExperienceValidationError> {
        let id = ExperienceId::new(id)?;
        let owner = UserId::new(owner)?;
        Ok(Self::new(id, owner, title, description))
    }

    /// Stable experience identifier.
    pub fn id(&self) -> &ExperienceId {
        &self.id
    }

    /// Id of the owning user; may be absent from the current snapshot.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Short human-readable title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Optional longer description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExperienceData {
    id: String,
    owner: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<Experience> for ExperienceData {
    fn from(value: Experience) -> Self {
        let Experience {
            id,
            owner,
            title,
            description,
        } = value;
        Self {
            id: id.into(),
            owner: owner.into(),
            title,
            description,
        }
    }
}

impl TryFrom<ExperienceData> for Experience {
    type Error = ExperienceValidationError;

    fn try_from(value: ExperienceData) -> Result<Self, Self::Error> {
        Experience::try_from_parts(value.id, value.owner, value.title, value.description)
    }
}

#[cfg(test)]
mod tests;
