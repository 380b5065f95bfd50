//! Quiz engine: a static question bank plus an explicit quiz state machine.
//!
//! `Idle -> InProgress -> Complete -> Idle`. Transitions that make no sense in the
//! current state (answering while idle, submitting without a selection) are
//! rejected with a `QuizError` and leave the state untouched.
//!
//! Completing a quiz folds its summary into the profile: tiered bonus XP, the
//! perfect-score counter, a `QuizRecord` and any newly earned badges. The
//! summary stays visible in `Complete` until the next `start` or `dismiss`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::QuizError;
use crate::gamification::{award_xp, grant_badges, subject_mastery};
use crate::profile::{MIN_GRADE, Profile, QuizRecord};
use crate::subject::Subject;

// Question banks live in one file per subject:
mod bank_english;
mod bank_mathematics;
mod bank_science;
mod bank_social_studies;

// --- Question bank ----------------------------------------------------------

/// Immutable multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub xp: u32,
    pub explanation: &'static str,
}

impl Question {
    pub const fn new(
        prompt: &'static str,
        options: [&'static str; 4],
        correct: usize,
        xp: u32,
        explanation: &'static str,
    ) -> Self {
        Self { prompt, options, correct, xp, explanation }
    }
}

/// Questions authored for one grade.
pub type GradeSet = (u8, &'static [Question]);

pub fn question_bank(subject: Subject) -> &'static [GradeSet] {
    match subject {
        Subject::Mathematics => bank_mathematics::MATHEMATICS,
        Subject::Science => bank_science::SCIENCE,
        Subject::English => bank_english::ENGLISH,
        Subject::SocialStudies => bank_social_studies::SOCIAL_STUDIES,
    }
}

/// Question set for `(subject, grade)`, falling back to grade 6 when the grade has
/// nothing authored, and to an empty set for an unknown subject.
pub fn questions_for(subject: &str, grade: u8) -> &'static [Question] {
    let Some(subject) = Subject::parse(subject) else {
        return &[];
    };
    let bank = question_bank(subject);
    let lookup = |g: u8| bank.iter().find(|(grade, _)| *grade == g).map(|(_, qs)| *qs);
    lookup(grade).or_else(|| lookup(MIN_GRADE)).unwrap_or(&[])
}

/// Bonus XP for a finished quiz. 100% -> 50, >=80% -> 25, >=60% -> 10.
pub fn completion_bonus(percentage: u32) -> u32 {
    if percentage >= 100 {
        50
    } else if percentage >= 80 {
        25
    } else if percentage >= 60 {
        10
    } else {
        0
    }
}

/// `round(100 * score / total)`, 0 for an empty quiz.
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (200 * score + total) / (2 * total)
}

// --- Session state ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    subject: String,
    questions: &'static [Question],
    index: usize,
    score: u32,
    streak: u32,
    selected: Option<usize>,
    xp_earned: u32,
}

impl QuizSession {
    fn new(subject: &str, questions: &'static [Question]) -> Self {
        Self {
            subject: subject.to_string(),
            questions,
            index: 0,
            score: 0,
            streak: 0,
            selected: None,
            xp_earned: 0,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }
    pub fn current_index(&self) -> usize {
        self.index
    }
    pub fn current_question(&self) -> Option<&'static Question> {
        self.questions.get(self.index)
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn streak(&self) -> u32 {
        self.streak
    }
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn advance(&mut self) {
        self.index += 1;
        self.selected = None;
    }

    fn is_done(&self) -> bool {
        self.index >= self.questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub subject: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub bonus_xp: u32,
    /// XP from correct answers plus the bonus.
    pub xp_earned: u32,
    pub perfect: bool,
    /// Subject mastery after this quiz was recorded.
    pub mastery: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    Idle,
    InProgress(QuizSession),
    Complete(QuizSummary),
}

/// Result of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: &'static str,
    pub xp_awarded: u32,
    pub streak: u32,
}

/// What a transition did: the graded answer (if any), levels crossed while
/// paying XP, and the summary when the quiz just completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StepReport {
    pub answer: Option<AnswerResult>,
    pub level_ups: Vec<u32>,
    pub finished: Option<QuizSummary>,
}

#[derive(Debug, Default)]
pub struct QuizEngine {
    state: QuizState,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            QuizState::InProgress(s) => Some(s),
            _ => None,
        }
    }

    /// Load the question set for `subject` at the learner's grade and begin.
    /// Restarting abandons any quiz in progress. An empty set completes at once.
    pub fn start(&mut self, subject: &str, profile: &mut Profile, now: DateTime<Utc>) -> StepReport {
        if let QuizState::InProgress(old) = &self.state {
            log::info!("abandoning {} quiz at question {}", old.subject, old.index + 1);
        }
        let questions = questions_for(subject, profile.grade);
        log::info!("starting {subject} quiz (grade {}, {} questions)", profile.grade, questions.len());
        let session = QuizSession::new(subject, questions);
        if session.is_done() {
            let (summary, level_ups) = finish(session, profile, now);
            self.state = QuizState::Complete(summary.clone());
            return StepReport { answer: None, level_ups, finished: Some(summary) };
        }
        self.state = QuizState::InProgress(session);
        StepReport::default()
    }

    /// Record a tentative choice; repeated calls overwrite it.
    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        let QuizState::InProgress(session) = &mut self.state else {
            return Err(QuizError::NotInProgress);
        };
        let options = session.current_question().map_or(0, |q| q.options.len());
        if index >= options {
            return Err(QuizError::OptionOutOfRange { index, options });
        }
        session.selected = Some(index);
        Ok(())
    }

    /// Grade the selection, pay XP for a correct answer and move on.
    pub fn submit_answer(&mut self, profile: &mut Profile, now: DateTime<Utc>) -> Result<StepReport, QuizError> {
        let QuizState::InProgress(session) = &mut self.state else {
            return Err(QuizError::NotInProgress);
        };
        let selected = session.selected.ok_or(QuizError::NoAnswerSelected)?;
        let question = session.current_question().ok_or(QuizError::NotInProgress)?;

        let mut level_ups = Vec::new();
        let correct = selected == question.correct;
        let xp_awarded = if correct {
            session.score += 1;
            session.streak += 1;
            session.xp_earned += question.xp;
            let reason = format!("Correct answer in {}", session.subject);
            level_ups.extend(award_xp(profile, question.xp, &reason));
            question.xp
        } else {
            session.streak = 0;
            0
        };
        let answer = AnswerResult {
            correct,
            correct_index: question.correct,
            explanation: question.explanation,
            xp_awarded,
            streak: session.streak,
        };
        session.advance();

        let mut report = self.complete_if_done(profile, now);
        report.answer = Some(answer);
        level_ups.append(&mut report.level_ups);
        report.level_ups = level_ups;
        Ok(report)
    }

    /// Move past the current question without scoring it.
    pub fn skip_question(&mut self, profile: &mut Profile, now: DateTime<Utc>) -> Result<StepReport, QuizError> {
        let QuizState::InProgress(session) = &mut self.state else {
            return Err(QuizError::NotInProgress);
        };
        session.advance();
        Ok(self.complete_if_done(profile, now))
    }

    /// Leave the results screen.
    pub fn dismiss(&mut self) {
        if matches!(self.state, QuizState::Complete(_)) {
            self.state = QuizState::Idle;
        }
    }

    fn complete_if_done(&mut self, profile: &mut Profile, now: DateTime<Utc>) -> StepReport {
        let done = matches!(&self.state, QuizState::InProgress(s) if s.is_done());
        if !done {
            return StepReport::default();
        }
        let QuizState::InProgress(session) = std::mem::take(&mut self.state) else {
            return StepReport::default();
        };
        let (summary, level_ups) = finish(session, profile, now);
        self.state = QuizState::Complete(summary.clone());
        StepReport { answer: None, level_ups, finished: Some(summary) }
    }

    pub fn view(&self) -> QuizView<'_> {
        match &self.state {
            QuizState::Idle => QuizView::Idle,
            QuizState::InProgress(s) => match s.current_question() {
                Some(q) => QuizView::InProgress {
                    subject: &s.subject,
                    number: s.index + 1,
                    total: s.questions.len(),
                    prompt: q.prompt,
                    options: q.options,
                    score: s.score,
                    streak: s.streak,
                    selected: s.selected,
                },
                None => QuizView::Idle,
            },
            QuizState::Complete(summary) => QuizView::Complete { summary },
        }
    }
}

fn finish(session: QuizSession, profile: &mut Profile, now: DateTime<Utc>) -> (QuizSummary, Vec<u32>) {
    let total = session.questions.len() as u32;
    let pct = percentage(session.score, total);
    let bonus_xp = completion_bonus(pct);
    let perfect = pct == 100;
    let mut level_ups = Vec::new();

    if perfect {
        profile.perfect_scores += 1;
    }
    if bonus_xp > 0 {
        level_ups.extend(award_xp(profile, bonus_xp, "Quiz completion bonus"));
    }
    profile.quiz_scores.push(QuizRecord {
        subject: session.subject.clone(),
        score: session.score,
        total,
        percentage: pct,
        date: now,
    });
    let badges = grant_badges(profile);
    if !badges.is_empty() {
        log::info!("new badges: {badges:?}");
    }
    log::info!("{} quiz complete: {}/{} ({pct}%)", session.subject, session.score, total);

    let summary = QuizSummary {
        mastery: subject_mastery(&profile.quiz_scores, &session.subject),
        subject: session.subject,
        score: session.score,
        total,
        percentage: pct,
        bonus_xp,
        xp_earned: session.xp_earned + bonus_xp,
        perfect,
    };
    (summary, level_ups)
}

/// Render-ready snapshot of the quiz.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizView<'a> {
    Idle,
    InProgress {
        subject: &'a str,
        number: usize,
        total: usize,
        prompt: &'static str,
        options: [&'static str; 4],
        score: u32,
        streak: u32,
        selected: Option<usize>,
    },
    Complete {
        summary: &'a QuizSummary,
    },
}
