//! Runtime configuration handed in from JavaScript (optional JSON).

use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// Local-storage keys for every persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub profile: String,
    pub registered: String,
    pub chat: String,
    pub session_id: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            profile: "astralsHub_profile".to_string(),
            registered: "astralsHub_registered".to_string(),
            chat: "aiStudyBuddy_chat".to_string(),
            session_id: "aiStudyBuddy_sessionId".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Chat endpoint; empty disables the network and always answers locally.
    pub chat_endpoint: String,
    pub storage: StorageKeys,
    pub daily_bonus_xp: u32,
    pub registration_bonus_xp: u32,
    pub subject_selection_xp: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: "/api/chat".to_string(),
            storage: StorageKeys::default(),
            daily_bonus_xp: 5,
            registration_bonus_xp: 150,
            subject_selection_xp: 10,
        }
    }
}

impl HubConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, HubError> {
        serde_json::from_str(json).map_err(HubError::Config)
    }

    pub fn chat_enabled(&self) -> bool {
        !self.chat_endpoint.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = HubConfig::from_json(r#"{"daily_bonus_xp": 7, "storage": {"chat": "c"}}"#).unwrap();
        assert_eq!(cfg.daily_bonus_xp, 7);
        assert_eq!(cfg.storage.chat, "c");
        assert_eq!(cfg.storage.profile, "astralsHub_profile");
        assert_eq!(cfg.chat_endpoint, "/api/chat");
        assert!(cfg.chat_enabled());
    }

    #[test]
    fn empty_endpoint_disables_chat() {
        let cfg = HubConfig::from_json(r#"{"chat_endpoint": ""}"#).unwrap();
        assert!(!cfg.chat_enabled());
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(matches!(HubConfig::from_json("{"), Err(HubError::Config(_))));
    }
}
