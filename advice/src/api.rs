//! Transport port for the advice endpoint.

use crate::error::ApiError;
use crate::model::{ChatReply, ChatRequest};

/// Sends one advice request and reports how it ended.
///
/// Futures are not required to be `Send`: the browser transport runs on a
/// single-threaded executor.
#[async_trait::async_trait(?Send)]
pub trait AdviceApi {
    /// Perform one `POST /api/chat` exchange.
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}
