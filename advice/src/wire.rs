//! Interpretation of raw `/api/chat` responses.
//!
//! Both transports hand the status code and body text to
//! [`interpret_response`] so the success / server-error split is decided in
//! one place.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::Deserialize;

use crate::error::ApiError;
use crate::model::ChatReply;

/// Path of the advice endpoint, relative to the site origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Join a base URL and the advice endpoint path.
#[must_use]
pub fn chat_url(base_url: &str) -> String {
    format!("{}{CHAT_ENDPOINT}", base_url.trim_end_matches('/'))
}

/// Classify a completed HTTP exchange.
///
/// # Errors
///
/// Returns [`ApiError::Server`] for non-2xx statuses (carrying the body's
/// `error` field when present) and for 2xx bodies that are not a valid reply.
pub fn interpret_response(status: u16, body: &str) -> Result<ChatReply, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error);
        return Err(ApiError::server(status, message));
    }

    serde_json::from_str::<ChatReply>(body).map_err(|e| {
        log::warn!("malformed advice reply (status {status}): {e}");
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error);
        ApiError::server(status, message)
    })
}
