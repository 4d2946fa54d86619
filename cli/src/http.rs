//! `reqwest` transport for the advice endpoint.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use advice::wire::{chat_url, interpret_response};
use advice::{AdviceApi, ApiError, ChatReply, ChatRequest};

pub struct ReqwestAdviceApi {
    http: reqwest::Client,
    url: String,
}

impl ReqwestAdviceApi {
    /// Build a client for `<base_url>/api/chat`.
    ///
    /// With no `timeout` a hung server keeps the request open indefinitely.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, url: chat_url(base_url) })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl AdviceApi for ReqwestAdviceApi {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        tracing::debug!(url = %self.url, category = request.category.as_str(), "sending advice request");
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        interpret_response(status, &body)
    }
}
