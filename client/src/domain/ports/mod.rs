//! Driven ports the directory consumes.
//!
//! The domain owns the listing, deletion, and creation contracts so the
//! directory stays adapter-agnostic. Production backs these ports with the
//! HTTP adapters in `outbound`; tests use the mocks or deterministic
//! fixtures exported here.

mod macros;
pub(crate) use macros::define_port_error;

mod experience_service;
mod user_service;

#[cfg(test)]
pub use experience_service::MockExperienceService;
pub use experience_service::{
    ExperienceService, ExperienceServiceError, FixtureExperienceService, NewExperience,
};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{FixtureUserService, UserService, UserServiceError};
