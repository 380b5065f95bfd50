//! Transient user-facing notifications queued by the hub and drained by the UI.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
    LevelUp,
    Perfect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn level_up(level: u32) -> Self {
        Self::new(NoticeKind::LevelUp, format!("🎉 Level Up! You're now Level {level}!"))
    }
}
