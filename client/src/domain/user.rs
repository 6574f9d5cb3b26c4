//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::try_from_strings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    PaddedId,
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::PaddedId => write!(f, "user id must not carry surrounding whitespace"),
            Self::EmptyName => write!(f, "user display name must not be blank"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier owned by the user-directory service.
///
/// The upstream service decides the id format; this module only requires the
/// value to be non-empty with no surrounding whitespace, and treats it as
/// opaque otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable display name for the user.
///
/// Never blank: this is what makes owner-name filtering with an empty query
/// structurally unable to match anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    ///
    /// Inner spaces are allowed; the value is kept exactly as given so that
    /// exact-match filtering sees what the upstream service stored.
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user, owned and versioned by the remote user directory.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `name` is never blank.
///
/// Ids are unique by upstream contract; this module does not re-check
/// uniqueness across a fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserData", into = "UserData")]
pub struct User {
    id: UserId,
    name: DisplayName,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, name: DisplayName) -> Self {
        Self { id, name }
    }

    /// Build a new [`User`] from string inputs, panicking if validation
    /// fails.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn from_strings(id: impl Into<String>, name: impl Into<String>) -> Self {
        match Self::try_from_strings(id, name) {
            Ok(value) => value,
            Err(err) => panic!("user string values must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor enforcing identifier and display name
    /// invariants.
    pub fn try_from_strings(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, DisplayName::new(name)?))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name shown on experience rows and matched by the filter.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserData {
    id: String,
    name: String,
}

impl From<User> for UserData {
    fn from(value: User) -> Self {
        let User { id, name } = value;
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl TryFrom<UserData> for User {
    type Error = UserValidationError;

    fn try_from(value: UserData) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.name)
    }
}
