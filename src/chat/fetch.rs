//! Browser `fetch` transport for the chat endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ChatReply, ChatRequest, ChatTransport};
use crate::error::ChatError;

#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ChatError::Status(response.status()));
        }
        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}
