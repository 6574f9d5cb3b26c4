//! Outbound adapters implementing the domain ports over HTTP.
//!
//! Adapters are thin translators between domain types and the remote
//! services' wire formats. They contain no join or filter logic; that stays
//! in the domain.

pub mod http;
