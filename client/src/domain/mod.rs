//! Domain entities, ports, and the experience directory service.
//!
//! Purpose: Define strongly typed domain entities used by the directory and
//! the outbound adapters. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - User / UserId / DisplayName — identity and display name of an owner.
//! - Experience / ExperienceId — a user-owned record.
//! - Snapshot — paired collections captured by one refresh.
//! - ExperienceDirectory — the refresh/lookup/filter/delete service.
//! - DirectoryError / RefreshCause — recoverable operation failures.

pub mod directory;
pub mod error;
pub mod experience;
pub mod ports;
pub mod snapshot;
pub mod user;

pub use self::directory::ExperienceDirectory;
pub use self::error::{DirectoryError, RefreshCause};
pub use self::experience::{Experience, ExperienceId, ExperienceValidationError};
pub use self::snapshot::Snapshot;
pub use self::user::{DisplayName, User, UserId, UserValidationError};

#[cfg(test)]
mod directory_tests;
