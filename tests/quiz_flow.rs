// Quiz flows driven through the hub, native-only.

use astrals_hub::notice::NoticeKind;
use astrals_hub::quiz::{StepReport, completion_bonus, percentage, questions_for};
use astrals_hub::{AstralsHub, HubConfig, MemoryStore, OfflineTransport, QuizError, QuizState};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn hub() -> AstralsHub<MemoryStore, OfflineTransport> {
    AstralsHub::load_with_rng(HubConfig::default(), MemoryStore::new(), OfflineTransport, StdRng::seed_from_u64(42))
}

fn answer(hub: &mut AstralsHub<MemoryStore, OfflineTransport>, index: usize) -> StepReport {
    hub.select_answer(index).unwrap();
    hub.submit_answer().unwrap()
}

fn messages(hub: &mut AstralsHub<MemoryStore, OfflineTransport>) -> Vec<String> {
    hub.drain_notices().into_iter().map(|n| n.message).collect()
}

#[test]
fn mixed_quiz_scores_two_of_three() {
    let mut hub = hub();
    assert!(matches!(hub.start_quiz("Mathematics"), QuizState::InProgress(_)));

    let first = answer(&mut hub, 0);
    assert_eq!(first.answer.as_ref().unwrap().xp_awarded, 10);
    let second = answer(&mut hub, 0);
    assert_eq!(second.answer.as_ref().unwrap().streak, 2);
    let third = answer(&mut hub, 1);
    let graded = third.answer.unwrap();
    assert!(!graded.correct);
    assert_eq!(graded.correct_index, 0);
    assert_eq!(graded.streak, 0);

    let summary = third.finished.expect("quiz should be complete");
    assert_eq!((summary.score, summary.total, summary.percentage), (2, 3, 67));
    assert_eq!(summary.bonus_xp, 10);
    assert_eq!(summary.xp_earned, 35);
    assert!(!summary.perfect);
    assert_eq!(summary.mastery, 67);

    let profile = hub.profile();
    assert_eq!(profile.total_xp, 35);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.perfect_scores, 0);
    assert_eq!(profile.quiz_scores.len(), 1);
    assert_eq!(profile.quiz_scores[0].total, 3);
    assert_eq!(profile.quiz_scores[0].percentage, 67);
    assert!(matches!(hub.quiz_state(), QuizState::Complete(_)));

    assert_eq!(
        messages(&mut hub),
        ["Correct! +10 XP", "Correct! +15 XP", "Incorrect answer", "Good effort! +10 bonus XP!"]
    );
}

#[test]
fn perfect_quiz_pays_fifty_and_counts() {
    let mut hub = hub();
    hub.start_quiz("Mathematics");
    for _ in 0..3 {
        answer(&mut hub, 0);
    }
    let profile = hub.profile();
    assert_eq!(profile.total_xp, 10 + 15 + 12 + 50);
    assert_eq!(profile.perfect_scores, 1);
    assert!(profile.badges.contains("perfect_score"));
    assert!(profile.badges.contains("first_quiz"));

    let notices = hub.drain_notices();
    let last = notices.last().unwrap();
    assert_eq!(last.kind, NoticeKind::Perfect);
    assert_eq!(last.message, "Perfect Score! +50 bonus XP!");
}

#[test]
fn submit_without_selection_is_rejected_in_place() {
    let mut hub = hub();
    hub.start_quiz("Science");
    assert_eq!(hub.submit_answer(), Err(QuizError::NoAnswerSelected));
    let notices = hub.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "Please select an answer!");

    let QuizState::InProgress(session) = hub.quiz_state() else {
        panic!("quiz should still be in progress");
    };
    assert_eq!(session.current_index(), 0);
    assert_eq!(hub.profile().total_xp, 0);
}

#[test]
fn answering_while_idle_is_silent() {
    let mut hub = hub();
    assert_eq!(hub.select_answer(0), Err(QuizError::NotInProgress));
    assert_eq!(hub.skip_question(), Err(QuizError::NotInProgress));
    assert!(hub.drain_notices().is_empty());
}

#[test]
fn level_up_during_quiz_is_announced() {
    let mut hub = hub();
    hub.award_xp(95, "test");
    hub.start_quiz("Mathematics");
    let report = answer(&mut hub, 0);
    assert_eq!(report.level_ups, [2]);
    assert_eq!(hub.profile().level, 2);
    assert_eq!(hub.profile().xp, 5);
    assert!(messages(&mut hub).contains(&"🎉 Level Up! You're now Level 2!".to_string()));
}

#[test]
fn skipping_everything_scores_zero_without_bonus() {
    let mut hub = hub();
    hub.start_quiz("English");
    let total = questions_for("English", 6).len();
    let mut last = None;
    for _ in 0..total {
        last = hub.skip_question().unwrap().finished;
    }
    let summary = last.unwrap();
    assert_eq!(summary.percentage, 0);
    assert_eq!(summary.bonus_xp, 0);
    assert_eq!(hub.profile().quiz_scores.len(), 1);
    assert_eq!(hub.profile().total_xp, 0);
}

#[test]
fn unknown_subject_completes_immediately() {
    let mut hub = hub();
    let QuizState::Complete(summary) = hub.start_quiz("Astronomy") else {
        panic!("empty quiz should complete at once");
    };
    assert_eq!((summary.score, summary.total, summary.percentage, summary.bonus_xp), (0, 0, 0, 0));
    assert_eq!(hub.profile().quiz_scores.len(), 1);
}

#[test]
fn restart_abandons_current_quiz() {
    let mut hub = hub();
    hub.start_quiz("Mathematics");
    answer(&mut hub, 0);
    hub.start_quiz("Science");
    let QuizState::InProgress(session) = hub.quiz_state() else {
        panic!("restart should begin a new quiz");
    };
    assert_eq!(session.subject(), "Science");
    assert_eq!((session.current_index(), session.score()), (0, 0));
    // XP already paid for the abandoned quiz stays.
    assert_eq!(hub.profile().total_xp, 10);
    assert!(hub.profile().quiz_scores.is_empty());
}

#[test]
fn dismiss_returns_to_idle() {
    let mut hub = hub();
    hub.start_quiz("Astronomy");
    hub.dismiss_quiz();
    assert_eq!(hub.quiz_state(), &QuizState::Idle);
}

#[test]
fn results_survive_reload() {
    let mut hub = hub();
    hub.start_quiz("Mathematics");
    for _ in 0..3 {
        answer(&mut hub, 0);
    }
    let store = hub.store().clone();
    let reloaded = AstralsHub::load(HubConfig::default(), store, OfflineTransport);
    assert_eq!(reloaded.profile().total_xp, 87);
    assert_eq!(reloaded.profile().quiz_scores.len(), 1);
    assert_eq!(reloaded.mastery("mathematics"), 100);
}

#[test]
fn grade_outside_bank_falls_back_to_grade_six() {
    assert_eq!(questions_for("Mathematics", 5), questions_for("Mathematics", 6));
    assert_eq!(questions_for("social_studies", 13), questions_for("Social Studies", 6));
    assert_ne!(questions_for("Mathematics", 7), questions_for("Mathematics", 6));
    assert!(questions_for("Astronomy", 6).is_empty());
}

#[test]
fn three_of_four_earns_the_lowest_tier() {
    let pct = percentage(3, 4);
    assert_eq!(pct, 75);
    assert_eq!(completion_bonus(pct), 10);
    assert_eq!(completion_bonus(percentage(4, 5)), 25);
}
