//! XP, levels, daily streaks and the derived progress views.
//!
//! Everything here is a pure function over `Profile`; persistence and
//! notifications are the hub's job.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::profile::{Profile, QuizRecord};
use crate::subject::Subject;

pub const XP_PER_LEVEL: u32 = 100;

/// `level == floor(total_xp / 100) + 1`
pub fn level_for_total_xp(total_xp: u32) -> u32 {
    total_xp / XP_PER_LEVEL + 1
}

/// Add `amount` to both XP counters and recompute the level.
/// Returns the new level when the award crossed a level boundary.
pub fn award_xp(profile: &mut Profile, amount: u32, reason: &str) -> Option<u32> {
    profile.xp = profile.xp.saturating_add(amount);
    profile.total_xp = profile.total_xp.saturating_add(amount);
    let level = level_for_total_xp(profile.total_xp);
    let previous = profile.level;
    profile.level = level;
    log::info!("Awarded {amount} XP: {reason}");
    if level > previous {
        profile.xp = profile.total_xp % XP_PER_LEVEL;
        log::info!("level up: {previous} -> {level}");
        Some(level)
    } else {
        None
    }
}

/// Outcome of the first login check of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCheck {
    pub streak: u32,
    pub bonus_xp: u32,
    pub level_up: Option<u32>,
}

/// Continue or restart the login streak and pay the daily bonus, once per day.
/// A second call on the same day returns `None` and changes nothing.
pub fn check_daily_streak(profile: &mut Profile, today: NaiveDate, bonus_xp: u32) -> Option<DailyCheck> {
    if profile.last_login == Some(today) {
        return None;
    }
    let consecutive = profile
        .last_login
        .is_some_and(|last| today.pred_opt() == Some(last));
    profile.streak = if consecutive { profile.streak + 1 } else { 1 };
    profile.last_login = Some(today);
    let level_up = award_xp(profile, bonus_xp, "Daily login bonus");
    Some(DailyCheck { streak: profile.streak, bonus_xp, level_up })
}

/// Rounded mean quiz percentage for `subject` (case-insensitive), 0 without history.
pub fn subject_mastery(records: &[QuizRecord], subject: &str) -> u32 {
    let (sum, n) = records
        .iter()
        .filter(|r| r.subject.eq_ignore_ascii_case(subject))
        .fold((0u64, 0u64), |(sum, n), r| (sum + r.percentage as u64, n + 1));
    if n == 0 {
        return 0;
    }
    ((2 * sum + n) / (2 * n)) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasteryEntry {
    pub subject: &'static str,
    pub percentage: u32,
}

pub fn mastery_overview(profile: &Profile) -> Vec<MasteryEntry> {
    Subject::ALL
        .iter()
        .map(|s| MasteryEntry {
            subject: s.name(),
            percentage: subject_mastery(&profile.quiz_scores, s.name()),
        })
        .collect()
}

// --- Achievement timeline ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub date: String,
    pub completed: bool,
}

pub fn achievement_timeline(profile: &Profile) -> Vec<Achievement> {
    let mut out = Vec::new();
    if profile.registration_date.is_some() {
        out.push(Achievement {
            id: "first_login",
            title: "First Login",
            description: "Started your cosmic journey".into(),
            date: "Today".into(),
            completed: true,
        });
    }
    match profile.quiz_scores.first() {
        Some(first) => out.push(Achievement {
            id: "first_quiz",
            title: "First Quiz",
            description: "Completed your first quiz".into(),
            date: first.date.format("%Y-%m-%d").to_string(),
            completed: true,
        }),
        None => out.push(Achievement {
            id: "first_quiz",
            title: "First Quiz",
            description: "Complete your first quiz".into(),
            date: "Coming soon".into(),
            completed: false,
        }),
    }
    if profile.level > 1 {
        out.push(Achievement {
            id: "level_up",
            title: "Level Up!",
            description: format!("Reached Level {}", profile.level),
            date: "Recently".into(),
            completed: true,
        });
    }
    if profile.perfect_scores > 0 {
        out.push(Achievement {
            id: "perfect_score",
            title: "Perfect Score",
            description: format!("Achieved {} perfect score(s)", profile.perfect_scores),
            date: "Recently".into(),
            completed: true,
        });
    }
    out
}

/// Record every completed achievement as a badge; returns the newly granted ids.
pub fn grant_badges(profile: &mut Profile) -> Vec<&'static str> {
    let earned: Vec<&'static str> = achievement_timeline(profile)
        .into_iter()
        .filter(|a| a.completed)
        .map(|a| a.id)
        .collect();
    earned
        .into_iter()
        .filter(|id| profile.badges.insert((*id).to_string()))
        .collect()
}

// --- Streak calendar --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub today: bool,
    pub active: bool,
}

/// One cell per day of `today`'s month; the first `streak` days are shown active.
pub fn streak_calendar(today: NaiveDate, streak: u32) -> Vec<CalendarDay> {
    (1..=days_in_month(today))
        .map(|day| CalendarDay {
            day,
            today: day == today.day(),
            active: day <= streak,
        })
        .collect()
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
