//! Sample rankings shown on the leaderboard tabs.
//!
//! There is no multi-user backend; every period shows the same five explorers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Weekly,
    Monthly,
    AllTime,
}

impl Period {
    pub fn parse(name: &str) -> Option<Period> {
        match name {
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            "allTime" | "all_time" => Some(Period::AllTime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub level: u32,
    pub score: u32,
    /// Icon name for the avatar.
    pub avatar: &'static str,
}

const SAMPLE: [(&str, u32, u32); 5] = [
    ("Cosmic Master", 15, 2500),
    ("Star Explorer", 12, 2100),
    ("Galaxy Scholar", 10, 1800),
    ("Space Cadet", 8, 1500),
    ("Astro Student", 6, 1200),
];

const PODIUM: [&str; 3] = ["crown", "medal", "award"];

pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, &(name, level, score))| LeaderboardEntry {
            rank: i as u32 + 1,
            name,
            level,
            score,
            avatar: PODIUM.get(i).copied().unwrap_or("user-astronaut"),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    weekly: Vec<LeaderboardEntry>,
    monthly: Vec<LeaderboardEntry>,
    all_time: Vec<LeaderboardEntry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            weekly: sample_leaderboard(),
            monthly: sample_leaderboard(),
            all_time: sample_leaderboard(),
        }
    }
}

impl Leaderboard {
    pub fn entries(&self, period: Period) -> &[LeaderboardEntry] {
        match period {
            Period::Weekly => &self.weekly,
            Period::Monthly => &self.monthly,
            Period::AllTime => &self.all_time,
        }
    }
}
