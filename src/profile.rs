//! Learner profile and registration.
//!
//! The profile is persisted as one JSON blob. Field names keep the camelCase keys
//! the front-end has always written, and every field is defaulted so older blobs
//! merge shallowly onto a fresh profile (missing keys fall back, unknown keys are
//! ignored).

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::RegistrationError;
use crate::gamification::level_for_total_xp;

pub const MIN_GRADE: u8 = 6;
pub const MAX_GRADE: u8 = 12;
pub const DEFAULT_NAME: &str = "Space Explorer";

/// One finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub subject: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub level: u32,
    /// Progress inside the current level; rebased on level-up.
    pub xp: u32,
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    pub badges: BTreeSet<String>,
    pub streak: u32,
    #[serde(deserialize_with = "lenient_date")]
    pub last_login: Option<NaiveDate>,
    pub quiz_scores: Vec<QuizRecord>,
    pub perfect_scores: u32,
    pub favorite_subjects: BTreeSet<String>,
    #[serde(rename = "class")]
    pub grade: u8,

    // Registration details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: 1,
            xp: 0,
            total_xp: 0,
            badges: BTreeSet::new(),
            streak: 0,
            last_login: None,
            quiz_scores: Vec::new(),
            perfect_scores: 0,
            favorite_subjects: BTreeSet::new(),
            grade: MIN_GRADE,
            age: None,
            gender: None,
            school_name: None,
            village_name: None,
            district_name: None,
            study_time: None,
            parent_contact: None,
            learning_goals: None,
            registration_date: None,
        }
    }
}

impl Profile {
    /// Re-establish invariants after loading a stored blob.
    pub fn normalize(&mut self) {
        self.level = level_for_total_xp(self.total_xp);
        self.grade = self.grade.clamp(MIN_GRADE, MAX_GRADE);
        if self.name.trim().is_empty() {
            self.name = DEFAULT_NAME.to_string();
        }
    }

    /// Merge a stored blob onto a fresh profile one top-level key at a time.
    /// A key whose value no longer decodes is dropped (and logged); the rest of
    /// the learner's progress survives.
    pub fn from_stored(stored: Value) -> Profile {
        let Value::Object(stored) = stored else {
            log::warn!("stored profile is not a JSON object; starting fresh");
            return Profile::default();
        };
        let mut merged = match serde_json::to_value(Profile::default()) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, value) in stored {
            let previous = merged.insert(key.clone(), value);
            if let Err(e) = serde_json::from_value::<Profile>(Value::Object(merged.clone())) {
                log::warn!("dropping unreadable profile field '{key}': {e}");
                match previous {
                    Some(old) => merged.insert(key, old),
                    None => merged.remove(&key),
                };
            }
        }
        let mut profile: Profile = serde_json::from_value(Value::Object(merged)).unwrap_or_default();
        profile.normalize();
        profile
    }

    /// Copy a validated registration onto the profile. XP and quiz history are kept.
    pub fn apply_registration(&mut self, form: &RegistrationForm, now: DateTime<Utc>) -> Result<(), RegistrationError> {
        form.validate()?;
        let grade = form.grade.ok_or(RegistrationError::Incomplete)?;
        self.name = form.name.trim().to_string();
        self.age = form.age;
        self.grade = grade;
        self.gender = Some(form.gender.trim().to_string());
        self.school_name = Some(form.school_name.trim().to_string());
        self.village_name = Some(form.village_name.trim().to_string());
        self.district_name = Some(form.district_name.trim().to_string());
        self.study_time = Some(form.study_time.trim().to_string());
        self.parent_contact = non_blank(&form.parent_contact);
        self.learning_goals = non_blank(&form.learning_goals);
        self.favorite_subjects = form
            .favorite_subjects
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self.registration_date = Some(now);
        Ok(())
    }
}

/// Accepts ISO dates as well as the `Date.toDateString()` form ("Mon Oct 19 2026")
/// older front-ends wrote.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%a %b %d %Y"))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Raw registration form input as posted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub age: Option<u32>,
    #[serde(rename = "class")]
    pub grade: Option<u8>,
    pub gender: String,
    pub school_name: String,
    pub village_name: String,
    pub district_name: String,
    pub study_time: String,
    pub parent_contact: String,
    pub learning_goals: String,
    pub favorite_subjects: Vec<String>,
}

impl RegistrationForm {
    /// All required fields present, grade in 6..=12, at least one favourite subject.
    /// Any gap yields the same generic error.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let required = [
            &self.name,
            &self.gender,
            &self.school_name,
            &self.village_name,
            &self.district_name,
            &self.study_time,
        ];
        let grade_ok = self
            .grade
            .is_some_and(|g| (MIN_GRADE..=MAX_GRADE).contains(&g));
        let age_ok = self.age.is_some_and(|a| a > 0);
        let has_subject = self.favorite_subjects.iter().any(|s| !s.trim().is_empty());
        if required.iter().any(|f| f.trim().is_empty()) || !grade_ok || !age_ok || !has_subject {
            return Err(RegistrationError::Incomplete);
        }
        Ok(())
    }
}
