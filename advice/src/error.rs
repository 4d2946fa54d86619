//! Error types for the transport and persistence ports.

/// Generic text shown when a failed reply carries no usable `error` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Failure of one `/api/chat` exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered, but not with usable advice: a non-2xx status, or
    /// a 2xx body without a `text` field.
    #[error("Error: {message}")]
    Server { status: u16, message: String },

    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Build a server error, falling back to [`UNKNOWN_ERROR_MESSAGE`] when
    /// the body carried no message.
    #[must_use]
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());
        Self::Server { status, message }
    }

    /// Whether the failure happened before any response arrived.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Failure writing or reading durable history.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying storage is not reachable (no window, no `localStorage`, ...).
    #[error("history storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the encoded history failed.
    #[error("history write failed: {0}")]
    Write(String),

    /// File-backed storage I/O failed.
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// History could not be encoded.
    #[error("history encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
