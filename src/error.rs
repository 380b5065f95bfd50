//! Error types shared across the hub.
//!
//! Nothing here is fatal: validation errors become user-facing notices, chat
//! errors are swallowed by the fallback responder and storage errors are logged.

use thiserror::Error;

/// Rejected quiz transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no quiz is in progress")]
    NotInProgress,
    #[error("Please select an answer!")]
    NoAnswerSelected,
    #[error("option {index} is out of range for a question with {options} options")]
    OptionOutOfRange { index: usize, options: usize },
}

impl QuizError {
    /// True for errors the learner caused and should be told about.
    pub fn is_validation(&self) -> bool {
        matches!(self, QuizError::NoAnswerSelected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please fill in all required fields!")]
    Incomplete,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("could not encode stored value: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures talking to the remote chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("chat endpoint answered with HTTP {0}")]
    Status(u16),
    #[error("malformed chat reply: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum HubError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid configuration: {0}")]
    Config(serde_json::Error),
}
