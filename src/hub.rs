//! Owned application state.
//!
//! `AstralsHub` holds the profile, quiz engine, chat session and leaderboard
//! together with the storage backend and chat transport. `load` is the only
//! read boundary; every mutation writes the affected blob straight back.
//! Storage failures are logged and otherwise ignored.

use chrono::{Local, NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chat::{ChatArchive, ChatMessage, ChatReply, ChatRequest, ChatSession, ChatTransport, new_session_id};
use crate::config::HubConfig;
use crate::error::{ChatError, QuizError, RegistrationError, StorageError};
use crate::gamification::{
    self, Achievement, CalendarDay, DailyCheck, MasteryEntry, achievement_timeline, grant_badges,
    mastery_overview, streak_calendar, subject_mastery,
};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, Period};
use crate::notice::{Notice, NoticeKind};
use crate::profile::{Profile, RegistrationForm};
use crate::quiz::{QuizEngine, QuizState, QuizView, StepReport};
use crate::storage::{KeyValueStore, load_json, save_json};

pub struct AstralsHub<S, T> {
    config: HubConfig,
    store: S,
    transport: T,
    profile: Profile,
    registered: bool,
    quiz: QuizEngine,
    chat: ChatSession,
    leaderboard: Leaderboard,
    rng: StdRng,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore, T: ChatTransport> AstralsHub<S, T> {
    pub fn load(config: HubConfig, store: S, transport: T) -> Self {
        Self::load_with_rng(config, store, transport, StdRng::from_entropy())
    }

    /// Restore state from `store`, creating defaults (and a session id) on first run.
    pub fn load_with_rng(config: HubConfig, mut store: S, transport: T, mut rng: StdRng) -> Self {
        let keys = config.storage.clone();

        let profile = load_json(&store, &keys.profile)
            .map(Profile::from_stored)
            .unwrap_or_default();
        let registered = matches!(store.get(&keys.registered), Ok(Some(flag)) if flag == "true");
        let archive: ChatArchive = load_json(&store, &keys.chat).unwrap_or_default();

        let session_id = match store.get(&keys.session_id) {
            Ok(Some(id)) if !id.trim().is_empty() => id,
            _ => {
                let id = new_session_id(Utc::now(), &mut rng);
                if let Err(e) = store.set(&keys.session_id, &id) {
                    log::warn!("could not cache session id: {e}");
                }
                id
            }
        };
        log::info!(
            "loaded profile '{}' (level {}, {} XP, registered: {registered})",
            profile.name,
            profile.level,
            profile.total_xp
        );

        Self {
            config,
            store,
            transport,
            profile,
            registered,
            quiz: QuizEngine::new(),
            chat: ChatSession::new(session_id, archive),
            leaderboard: Leaderboard::default(),
            rng,
            notices: Vec::new(),
        }
    }

    // --- Accessors -----------------------------------------------------------

    pub fn config(&self) -> &HubConfig {
        &self.config
    }
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn is_registered(&self) -> bool {
        self.registered
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn transport(&self) -> &T {
        &self.transport
    }
    pub fn quiz_state(&self) -> &QuizState {
        self.quiz.state()
    }
    pub fn quiz_view(&self) -> QuizView<'_> {
        self.quiz.view()
    }
    pub fn chat_history(&self) -> &[ChatMessage] {
        self.chat.history()
    }
    pub fn current_subject(&self) -> Option<&str> {
        self.chat.subject()
    }
    pub fn session_id(&self) -> &str {
        self.chat.session_id()
    }

    /// Hand queued notices to the presentation layer.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- Persistence -----------------------------------------------------------

    /// Write every blob now.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let keys = &self.config.storage;
        save_json(&mut self.store, &keys.profile, &self.profile)?;
        save_json(&mut self.store, &keys.chat, &self.chat.archive(Utc::now()))?;
        if self.registered {
            self.store.set(&keys.registered, "true")?;
        }
        Ok(())
    }

    fn persist_profile(&mut self) {
        if let Err(e) = save_json(&mut self.store, &self.config.storage.profile, &self.profile) {
            log::warn!("saving profile failed: {e}");
        }
    }

    fn persist_chat(&mut self) {
        let archive = self.chat.archive(Utc::now());
        if let Err(e) = save_json(&mut self.store, &self.config.storage.chat, &archive) {
            log::warn!("saving chat history failed: {e}");
        }
    }

    // --- Gamification ------------------------------------------------------------

    /// Award XP, announce a level-up and persist.
    pub fn award_xp(&mut self, amount: u32, reason: &str) {
        if let Some(level) = gamification::award_xp(&mut self.profile, amount, reason) {
            self.notices.push(Notice::level_up(level));
        }
        self.persist_profile();
    }

    /// Daily login bookkeeping for `today`; a no-op after the first call of the day.
    pub fn check_daily_streak(&mut self, today: NaiveDate) -> Option<DailyCheck> {
        let check = gamification::check_daily_streak(&mut self.profile, today, self.config.daily_bonus_xp)?;
        if let Some(level) = check.level_up {
            self.notices.push(Notice::level_up(level));
        }
        log::info!("daily login: streak {}", check.streak);
        self.persist_profile();
        Some(check)
    }

    /// `check_daily_streak` against the browser's local calendar day.
    pub fn daily_check_in(&mut self) -> Option<DailyCheck> {
        self.check_daily_streak(Local::now().date_naive())
    }

    pub fn mastery(&self, subject: &str) -> u32 {
        subject_mastery(&self.profile.quiz_scores, subject)
    }

    pub fn mastery_overview(&self) -> Vec<MasteryEntry> {
        mastery_overview(&self.profile)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        achievement_timeline(&self.profile)
    }

    pub fn streak_calendar(&self, today: NaiveDate) -> Vec<CalendarDay> {
        streak_calendar(today, self.profile.streak)
    }

    pub fn leaderboard(&self, period: Period) -> &[LeaderboardEntry] {
        self.leaderboard.entries(period)
    }

    // --- Registration ----------------------------------------------------------

    /// Validate and store the registration form, then pay the welcome bonus.
    pub fn register(&mut self, form: &RegistrationForm) -> Result<(), RegistrationError> {
        if let Err(e) = self.profile.apply_registration(form, Utc::now()) {
            self.notices.push(Notice::new(NoticeKind::Error, e.to_string()));
            return Err(e);
        }
        self.registered = true;
        if let Err(e) = self.store.set(&self.config.storage.registered, "true") {
            log::warn!("saving registration flag failed: {e}");
        }
        log::info!("registered {} (class {})", self.profile.name, self.profile.grade);

        self.notices.push(Notice::new(
            NoticeKind::Success,
            format!(
                "Welcome to Astrals Hub, {}! 🚀 Your cosmic learning journey begins now!",
                self.profile.name
            ),
        ));
        self.award_xp(self.config.registration_bonus_xp, "Complete Registration Bonus");
        grant_badges(&mut self.profile);
        self.persist_profile();
        Ok(())
    }

    // --- Subjects & quiz ---------------------------------------------------------

    /// Blank input is ignored.
    pub fn select_subject(&mut self, subject: &str) {
        let subject = subject.trim();
        if subject.is_empty() {
            return;
        }
        self.chat.set_subject(subject);
        let xp = self.config.subject_selection_xp;
        self.award_xp(xp, &format!("Selected {subject} subject"));
        self.notices.push(Notice::new(
            NoticeKind::Success,
            format!("Great choice! You earned {xp} XP for selecting {subject}!"),
        ));
        self.persist_chat();
    }

    pub fn start_quiz(&mut self, subject: &str) -> &QuizState {
        let report = self.quiz.start(subject, &mut self.profile, Utc::now());
        self.absorb(&report);
        self.quiz.state()
    }

    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        self.quiz.select_answer(index).inspect_err(|e| self.reject(e))
    }

    pub fn submit_answer(&mut self) -> Result<StepReport, QuizError> {
        let report = self
            .quiz
            .submit_answer(&mut self.profile, Utc::now())
            .inspect_err(|e| self.reject(e))?;
        if let Some(answer) = &report.answer {
            self.notices.push(if answer.correct {
                Notice::new(NoticeKind::Success, format!("Correct! +{} XP", answer.xp_awarded))
            } else {
                Notice::new(NoticeKind::Error, "Incorrect answer")
            });
        }
        self.absorb(&report);
        Ok(report)
    }

    pub fn skip_question(&mut self) -> Result<StepReport, QuizError> {
        let report = self
            .quiz
            .skip_question(&mut self.profile, Utc::now())
            .inspect_err(|e| self.reject(e))?;
        self.absorb(&report);
        Ok(report)
    }

    pub fn dismiss_quiz(&mut self) {
        self.quiz.dismiss();
    }

    fn reject(&mut self, e: &QuizError) {
        if e.is_validation() {
            self.notices.push(Notice::new(NoticeKind::Error, e.to_string()));
        } else {
            log::debug!("ignored quiz action: {e}");
        }
    }

    fn absorb(&mut self, report: &StepReport) {
        for &level in &report.level_ups {
            self.notices.push(Notice::level_up(level));
        }
        if let Some(summary) = &report.finished {
            let notice = match summary.bonus_xp {
                0 => None,
                50 => Some(Notice::new(NoticeKind::Perfect, "Perfect Score! +50 bonus XP!")),
                25 => Some(Notice::new(NoticeKind::Success, "Great job! +25 bonus XP!")),
                xp => Some(Notice::new(NoticeKind::Success, format!("Good effort! +{xp} bonus XP!"))),
            };
            self.notices.extend(notice);
        }
        if report.answer.is_some() || report.finished.is_some() || !report.level_ups.is_empty() {
            self.persist_profile();
        }
    }

    // --- Chat ------------------------------------------------------------------

    /// First half of a send: records the learner's message. `None` for blank input.
    pub fn begin_chat(&mut self, text: &str) -> Option<ChatRequest> {
        self.chat.begin(text, self.profile.level, Utc::now())
    }

    /// Second half of a send: records the answer (or a fallback) and persists.
    pub fn finish_chat(&mut self, request: &ChatRequest, outcome: Result<ChatReply, ChatError>) -> ChatMessage {
        let message = self.chat.finish(request, outcome, &mut self.rng, Utc::now());
        self.persist_chat();
        message
    }

    /// Ask the study buddy. Network problems are answered locally, never surfaced.
    pub async fn send_message(&mut self, text: &str) -> Option<ChatMessage> {
        let request = self.begin_chat(text)?;
        let outcome = if self.config.chat_enabled() {
            self.transport.post_chat(&request).await
        } else {
            Err(ChatError::Transport("chat endpoint disabled".into()))
        };
        Some(self.finish_chat(&request, outcome))
    }

    pub fn clear_chat(&mut self) {
        self.chat.clear();
        self.persist_chat();
    }
}
