//! Reqwest-backed adapters for the experience and user services.
//!
//! Each adapter owns transport details only: request construction, timeout
//! and HTTP error mapping, and JSON decoding into domain records.

mod dto;
mod experience_api;
mod user_api;

pub use experience_api::ExperienceHttpApi;
pub use user_api::UserHttpApi;

use url::Url;

const DEFAULT_USER_AGENT: &str = "experience-client/0.1";

/// Outbound identity settings shared by the HTTP adapters.
pub struct ApiIdentity {
    /// HTTP user-agent sent with every request.
    pub user_agent: String,
}

impl Default for ApiIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Append path segments to a base URL, tolerating a trailing slash on the
/// base.
fn join_endpoint(base: &Url, segments: &[&str]) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| "base URL must be hierarchical".to_owned())?
        .pop_if_empty()
        .extend(segments.iter().copied());
    Ok(url)
}

/// Compact single-line preview of a response body for error messages.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() <= PREVIEW_CHAR_LIMIT {
        return compact;
    }
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    format!("{preview}...")
}
