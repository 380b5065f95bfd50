//! Study-buddy chat: history, the remote endpoint contract and local fallback.
//!
//! Sending is split in two so the browser binding can release its state borrow
//! while the request is in flight: `begin` appends the learner's message and
//! builds the request, `finish` appends the assistant's answer (remote reply or
//! fallback). Two overlapping sends may interleave their appends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

pub mod fallback;
#[cfg(target_arch = "wasm32")]
mod fetch;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(rename = "message")]
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub subject: String,
    pub user_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[async_trait(?Send)]
pub trait ChatTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Never reaches a server; every message is answered by the fallback responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl ChatTransport for OfflineTransport {
    async fn post_chat(&self, _request: &ChatRequest) -> Result<ChatReply, ChatError> {
        Err(ChatError::Transport("chat endpoint disabled".into()))
    }
}

/// Persisted chat blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatArchive {
    pub history: Vec<ChatMessage>,
    pub subject: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    session_id: String,
    history: Vec<ChatMessage>,
    subject: Option<String>,
}

impl ChatSession {
    pub fn new(session_id: String, archive: ChatArchive) -> Self {
        let subject = Some(archive.subject).filter(|s| !s.trim().is_empty());
        Self { session_id, history: archive.history, subject }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.subject = Some(subject.trim().to_string()).filter(|s| !s.is_empty());
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Append the learner's message and build the endpoint request.
    /// Blank input is ignored.
    pub fn begin(&mut self, text: &str, user_level: u32, now: DateTime<Utc>) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.history.push(ChatMessage { role: Role::User, text: text.to_string(), timestamp: now });
        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
            subject: self.subject.clone().unwrap_or_default(),
            user_level,
        })
    }

    /// Append the assistant's answer; transport failures are answered locally.
    pub fn finish<R: Rng>(
        &mut self,
        request: &ChatRequest,
        outcome: Result<ChatReply, ChatError>,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> ChatMessage {
        let text = match outcome {
            Ok(reply) => reply.response,
            Err(e) => {
                log::warn!("Error getting AI response: {e}");
                fallback::fallback_response(&request.message, self.subject(), rng)
            }
        };
        let message = ChatMessage { role: Role::Assistant, text, timestamp: now };
        self.history.push(message.clone());
        message
    }

    pub fn archive(&self, now: DateTime<Utc>) -> ChatArchive {
        ChatArchive {
            history: self.history.clone(),
            subject: self.subject.clone().unwrap_or_default(),
            timestamp: Some(now),
        }
    }
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque client-side session token: `session_<unix-millis>_<9 base-36 chars>`.
pub fn new_session_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("session_{}_{}", now.timestamp_millis(), suffix)
}

/// Text for the quick-prompt buttons; unknown kinds are sent as typed.
pub fn quick_prompt(kind: &str) -> String {
    match kind {
        "Explain this concept" => "Can you explain this concept in simple terms?",
        "Give me examples" => "Can you provide some examples to help me understand better?",
        "Help me practice" => "Can you give me some practice problems to work on?",
        "Summarize this topic" => "Can you summarize the key points of this topic?",
        other => other,
    }
    .to_string()
}
