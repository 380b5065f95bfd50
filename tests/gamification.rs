// Profile, XP and streak behaviour through the hub. Native-friendly.

use astrals_hub::config::HubConfig;
use astrals_hub::gamification::{XP_PER_LEVEL, award_xp, subject_mastery};
use astrals_hub::notice::NoticeKind;
use astrals_hub::storage::KeyValueStore;
use astrals_hub::{
    AstralsHub, MemoryStore, OfflineTransport, Profile, QuizRecord, RegistrationError, RegistrationForm,
};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type TestHub = AstralsHub<MemoryStore, OfflineTransport>;

fn hub_with(store: MemoryStore) -> TestHub {
    AstralsHub::load_with_rng(HubConfig::default(), store, OfflineTransport, StdRng::seed_from_u64(3))
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form() -> RegistrationForm {
    RegistrationForm {
        name: "Ravi".into(),
        age: Some(13),
        grade: Some(8),
        gender: "male".into(),
        school_name: "ZP School".into(),
        village_name: "Kherdi".into(),
        district_name: "Pune".into(),
        study_time: "evening".into(),
        favorite_subjects: vec!["Mathematics".into()],
        ..Default::default()
    }
}

#[test]
fn level_always_tracks_total_xp() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut profile = Profile::default();
    for _ in 0..500 {
        let amount = rng.gen_range(0..=160);
        let before = profile.level;
        let crossed = award_xp(&mut profile, amount, "random");
        assert_eq!(profile.level, profile.total_xp / XP_PER_LEVEL + 1);
        assert_eq!(profile.xp, profile.total_xp % XP_PER_LEVEL);
        assert_eq!(crossed.is_some(), profile.level > before);
    }
}

#[test]
fn daily_bonus_is_paid_once_per_day() {
    let mut hub = hub_with(MemoryStore::new());
    let first = hub.check_daily_streak(day(2026, 5, 1)).unwrap();
    assert_eq!((first.streak, first.bonus_xp), (1, 5));
    assert!(hub.check_daily_streak(day(2026, 5, 1)).is_none());
    assert_eq!(hub.profile().total_xp, 5);
    assert_eq!(hub.profile().streak, 1);

    assert_eq!(hub.check_daily_streak(day(2026, 5, 2)).unwrap().streak, 2);
    assert_eq!(hub.check_daily_streak(day(2026, 5, 4)).unwrap().streak, 1);
    assert_eq!(hub.profile().total_xp, 15);
}

#[test]
fn streak_crosses_month_boundaries() {
    let mut hub = hub_with(MemoryStore::new());
    hub.check_daily_streak(day(2026, 2, 28));
    assert_eq!(hub.check_daily_streak(day(2026, 3, 1)).unwrap().streak, 2);
    let calendar = hub.streak_calendar(day(2026, 3, 1));
    assert_eq!(calendar.len(), 31);
    assert_eq!(calendar.iter().filter(|d| d.active).count(), 2);
}

#[test]
fn mastery_is_rounded_mean_per_subject() {
    let record = |subject: &str, percentage| QuizRecord {
        subject: subject.into(),
        score: 0,
        total: 0,
        percentage,
        date: Utc::now(),
    };
    let records = [record("Mathematics", 100), record("Science", 20), record("mathematics", 67)];
    assert_eq!(subject_mastery(&records, "Mathematics"), 84);
    assert_eq!(subject_mastery(&records, "Science"), 20);
    assert_eq!(subject_mastery(&records, "English"), 0);

    let hub = hub_with(MemoryStore::new());
    let overview = hub.mastery_overview();
    assert_eq!(overview.len(), 4);
    assert_eq!(overview[3].subject, "Social Studies");
    assert!(overview.iter().all(|m| m.percentage == 0));
}

#[test]
fn incomplete_registration_changes_nothing() {
    let mut hub = hub_with(MemoryStore::new());
    let mut partial = form();
    partial.school_name = "   ".into();
    assert_eq!(hub.register(&partial), Err(RegistrationError::Incomplete));
    assert!(!hub.is_registered());
    assert_eq!(hub.profile(), &Profile::default());

    let notices = hub.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "Please fill in all required fields!");
}

#[test]
fn registration_pays_bonus_and_persists_flag() {
    let mut hub = hub_with(MemoryStore::new());
    hub.register(&form()).unwrap();
    assert!(hub.is_registered());

    let profile = hub.profile();
    assert_eq!(profile.name, "Ravi");
    assert_eq!(profile.grade, 8);
    assert_eq!(profile.total_xp, 150);
    assert_eq!(profile.level, 2);
    assert!(profile.badges.contains("first_login"));
    assert!(profile.badges.contains("level_up"));

    let notices: Vec<_> = hub.drain_notices().into_iter().map(|n| n.message).collect();
    assert_eq!(
        notices,
        [
            "Welcome to Astrals Hub, Ravi! 🚀 Your cosmic learning journey begins now!",
            "🎉 Level Up! You're now Level 2!",
        ]
    );

    let store = hub.store().clone();
    assert_eq!(store.get("astralsHub_registered").unwrap().as_deref(), Some("true"));
    let reloaded = hub_with(store);
    assert!(reloaded.is_registered());
    assert_eq!(reloaded.profile().school_name.as_deref(), Some("ZP School"));
}

#[test]
fn stored_profile_merges_onto_defaults() {
    let mut store = MemoryStore::new();
    store
        .set("astralsHub_profile", r#"{"name":"Meena","totalXP":250,"level":1,"class":11,"unknownKey":true}"#)
        .unwrap();
    let hub = hub_with(store);
    let profile = hub.profile();
    assert_eq!(profile.name, "Meena");
    assert_eq!(profile.level, 3);
    assert_eq!(profile.grade, 11);
    assert_eq!(profile.streak, 0);
    assert!(profile.quiz_scores.is_empty());
}

#[test]
fn malformed_profile_blob_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set("astralsHub_profile", "{not json").unwrap();
    let hub = hub_with(store);
    assert_eq!(hub.profile(), &Profile::default());
}

#[test]
fn selecting_a_subject_pays_ten_xp() {
    let mut hub = hub_with(MemoryStore::new());
    hub.select_subject("Science");
    assert_eq!(hub.current_subject(), Some("Science"));
    assert_eq!(hub.profile().total_xp, 10);
    let notices = hub.drain_notices();
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].message, "Great choice! You earned 10 XP for selecting Science!");
}

#[test]
fn config_overrides_bonus_amounts() {
    let config = HubConfig::from_json(r#"{"daily_bonus_xp": 20}"#).unwrap();
    let mut hub = AstralsHub::load(config, MemoryStore::new(), OfflineTransport);
    hub.check_daily_streak(day(2026, 1, 1));
    assert_eq!(hub.profile().total_xp, 20);
}

#[test]
fn front_end_date_string_keeps_saved_progress() {
    let mut store = MemoryStore::new();
    store
        .set(
            "astralsHub_profile",
            r#"{"name":"Meena","totalXP":450,"streak":6,"lastLogin":"Mon Oct 19 2026","class":9}"#,
        )
        .unwrap();
    let mut hub = hub_with(store);
    let profile = hub.profile();
    assert_eq!(profile.total_xp, 450);
    assert_eq!(profile.level, 5);
    assert_eq!(profile.streak, 6);
    assert_eq!(profile.last_login, Some(day(2026, 10, 19)));

    // Next day continues the streak instead of restarting it.
    assert_eq!(hub.check_daily_streak(day(2026, 10, 20)).unwrap().streak, 7);
}

#[test]
fn one_bad_profile_field_does_not_reset_the_rest() {
    let mut store = MemoryStore::new();
    store
        .set("astralsHub_profile", r#"{"name":"Meena","totalXP":450,"streak":"6"}"#)
        .unwrap();
    let hub = hub_with(store);
    assert_eq!(hub.profile().name, "Meena");
    assert_eq!(hub.profile().total_xp, 450);
    assert_eq!(hub.profile().streak, 0);
}

#[test]
fn blank_subject_selection_is_ignored() {
    let mut hub = hub_with(MemoryStore::new());
    hub.select_subject("   ");
    assert_eq!(hub.current_subject(), None);
    assert_eq!(hub.profile().total_xp, 0);
    assert!(hub.drain_notices().is_empty());
}
