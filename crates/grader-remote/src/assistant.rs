//! Tutoring assistant client.
//!
//! The service is stateless: every call carries the whole conversation, and
//! the reply is a single assistant message.

use std::time::Duration;

use grader_core::entities::ChatMessage;
use grader_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;
use crate::http::{build_client, check_response, endpoint};

const ASSISTANT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the `/chatbot` endpoint.
pub struct AssistantClient {
    http: reqwest::Client,
    url: String,
}

impl AssistantClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        Ok(Self {
            http: build_client(ASSISTANT_TIMEOUT)?,
            url: endpoint(base_url, "chatbot"),
        })
    }

    /// Full URL requests are sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the conversation and return the assistant's reply.
    ///
    /// A response without a `message` field yields an empty reply.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails, the service returns a
    /// non-success status, or the body is not JSON.
    pub async fn reply(&self, messages: &[ChatMessage]) -> Result<String, RemoteError> {
        tracing::debug!(url = %self.url, turns = messages.len(), "requesting assistant reply");
        let resp = self
            .http
            .post(&self.url)
            .json(&ChatRequest { messages })
            .send()
            .await?;
        read_reply(resp).await
    }

    /// Send the conversation and append the reply to it as an assistant turn.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reply`]; the history is left unchanged on error.
    pub async fn exchange(&self, history: &mut Vec<ChatMessage>) -> Result<String, RemoteError> {
        let reply = self.reply(history).await?;
        history.push(ChatMessage::new(Role::Assistant, reply.clone()));
        Ok(reply)
    }
}

async fn read_reply(resp: reqwest::Response) -> Result<String, RemoteError> {
    let resp = check_response(resp).await?;
    let body: ChatResponse = resp.json().await?;
    Ok(body.message.unwrap_or_default())
}
