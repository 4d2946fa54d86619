//! `POST /api/chat` over the browser fetch API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every request fails as a network error, since the
//! endpoint is only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Any failure before a full response body arrives is an
//! [`ApiError::Network`]; status and body classification is left to
//! [`advice::wire::interpret_response`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use advice::wire::CHAT_ENDPOINT;
use advice::{AdviceApi, ApiError, ChatReply, ChatRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAdviceApi {
    endpoint: String,
}

impl HttpAdviceApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAdviceApi {
    fn default() -> Self {
        Self::new(CHAT_ENDPOINT)
    }
}

#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[async_trait::async_trait(?Send)]
impl AdviceApi for HttpAdviceApi {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            log::debug!("POST {} ({})", self.endpoint, request.category.as_str());
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            advice::wire::interpret_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("fetch is only available in the browser".to_owned()))
        }
    }
}
