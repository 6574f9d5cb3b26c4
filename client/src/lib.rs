//! Client-side directory for user-owned experience records.
//!
//! Purpose: fetch experiences and users from their remote services, join the
//! two collections in memory by owner id, and expose owner-name lookup,
//! owner-name filtering, and confirmed deletion over the combined snapshot.
//!
//! The crate is presentation-agnostic. Callers decide when to refresh
//! (screen focus, pull-to-refresh, poll) and how to render whatever the
//! directory returns; the directory only guarantees that the two collections
//! it holds were fetched together and are replaced together.

pub mod domain;
pub mod outbound;

pub use domain::ExperienceDirectory;
