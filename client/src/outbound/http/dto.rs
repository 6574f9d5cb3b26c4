//! DTOs for the remote services' Mongo-style JSON documents.
//!
//! The adapters decode into these transport DTOs first, then map into domain
//! records in one pass. The upstream keys records under `_id`; the domain
//! uses plain `id`.

use serde::{Deserialize, Serialize};

use crate::domain::ports::NewExperience;
use crate::domain::{Experience, User};

#[derive(Debug, Deserialize)]
pub(super) struct ExperienceDocument {
    #[serde(rename = "_id")]
    pub(super) id: String,
    pub(super) owner: String,
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) description: Option<String>,
}

impl ExperienceDocument {
    pub(super) fn into_domain(self) -> Result<Experience, String> {
        Experience::try_from_parts(
            self.id.as_str(),
            self.owner.as_str(),
            self.title,
            self.description,
        )
        .map_err(|err| format!("experience document {:?}: {err}", self.id))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDocument {
    #[serde(rename = "_id")]
    pub(super) id: String,
    #[serde(default)]
    pub(super) name: String,
}

impl UserDocument {
    pub(super) fn into_domain(self) -> Result<User, String> {
        User::try_from_strings(self.id.as_str(), self.name)
            .map_err(|err| format!("user document {:?}: {err}", self.id))
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewExperienceDocument<'a> {
    pub(super) owner: &'a str,
    pub(super) title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<&'a str>,
}

impl<'a> From<&'a NewExperience> for NewExperienceDocument<'a> {
    fn from(value: &'a NewExperience) -> Self {
        Self {
            owner: value.owner.as_ref(),
            title: value.title.as_str(),
            description: value.description.as_deref(),
        }
    }
}
