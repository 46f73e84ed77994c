//! Round controller: the quiz state machine.
//!
//! A round walks `AwaitingStart -> AwaitingAnswer -> Reviewing`, then either
//! back to `AwaitingAnswer` for the next question or on to `RoundOver` once
//! `max_questions` have been answered. Operations called in the wrong phase
//! are rejected with [`QuizError::InvalidPhase`] and change nothing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::VerbBank;
use crate::error::QuizError;
use crate::evaluation::{evaluate, max_score, round_over_message, EvaluationTier};
use crate::model::{AnswerResult, StepMark, Verb};
use crate::statistics::{progress_marks, RoundStats};

/// Questions per round unless configured otherwise.
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Where the controller is in the interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingStart,
    AwaitingAnswer,
    Reviewing,
    RoundOver,
}

impl Phase {
    /// Label of the primary action control in this phase.
    pub fn action_label(&self) -> &'static str {
        match self {
            Phase::AwaitingStart | Phase::RoundOver => "Start",
            Phase::AwaitingAnswer => "Check",
            Phase::Reviewing => "Next",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingStart => write!(f, "waiting to start"),
            Phase::AwaitingAnswer => write!(f, "awaiting an answer"),
            Phase::Reviewing => write!(f, "reviewing"),
            Phase::RoundOver => write!(f, "round over"),
        }
    }
}

/// Notified as a round progresses.
pub trait RoundObserver {
    fn on_question(&self, number: usize, verb: &Verb);
    fn on_answer(&self, result: &AnswerResult, score: u32);
    fn on_round_over(&self, summary: &RoundSummary);
}

/// No-op observer.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    fn on_question(&self, _: usize, _: &Verb) {}
    fn on_answer(&self, _: &AnswerResult, _: u32) {}
    fn on_round_over(&self, _: &RoundSummary) {}
}

/// Final outcome of a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Unique round identifier.
    pub round_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub score: u32,
    pub max_score: u32,
    pub tier: EvaluationTier,
    /// Full round-over text for display.
    pub message: String,
    pub stats: RoundStats,
    pub history: Vec<AnswerResult>,
}

/// What [`RoundController::advance`] moved to.
#[derive(Debug, Clone)]
pub enum Advance {
    /// A new verb was drawn.
    NextQuestion { number: usize, verb: Verb },
    /// The last question was reviewed; the round is evaluated.
    RoundOver(Box<RoundSummary>),
}

/// Display text for a past question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReview {
    pub index: usize,
    /// `present : preterit, participle`.
    pub answer: String,
    /// Both fields were answered correctly.
    pub correct: bool,
    pub text: String,
}

/// Snapshot of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub phase: Phase,
    pub action_label: &'static str,
    /// Present form of the verb being asked or reviewed.
    pub present: Option<String>,
    pub score: u32,
    pub questions_asked: usize,
    pub max_questions: usize,
    pub marks: Vec<StepMark>,
}

/// Owns the session state and drives the quiz.
pub struct RoundController {
    bank: VerbBank,
    max_questions: usize,
    phase: Phase,
    score: u32,
    questions_asked: usize,
    current: Option<Verb>,
    history: Vec<AnswerResult>,
    round_id: Uuid,
    started_at: DateTime<Utc>,
    observer: Box<dyn RoundObserver>,
}

impl RoundController {
    /// Create a controller; `max_questions` must be between 1 and the bank size.
    pub fn new(bank: VerbBank, max_questions: usize) -> Result<Self, QuizError> {
        if max_questions == 0 {
            return Err(QuizError::InvalidConfig(
                "a round needs at least one question".into(),
            ));
        }
        if max_questions > bank.len() {
            return Err(QuizError::InvalidConfig(format!(
                "{max_questions} questions per round but only {} verbs available",
                bank.len()
            )));
        }

        Ok(Self {
            bank,
            max_questions,
            phase: Phase::AwaitingStart,
            score: 0,
            questions_asked: 0,
            current: None,
            history: Vec::new(),
            round_id: Uuid::nil(),
            started_at: Utc::now(),
            observer: Box::new(NoopObserver),
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn RoundObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Begin a fresh round and draw its first verb.
    pub fn start_round(&mut self) -> Result<&Verb, QuizError> {
        self.ensure_phase("start a round", &[Phase::AwaitingStart, Phase::RoundOver])?;

        self.score = 0;
        self.questions_asked = 0;
        self.history.clear();
        self.current = None;
        self.round_id = Uuid::new_v4();
        self.started_at = Utc::now();
        self.bank.reset_pool();

        tracing::info!(round = %self.round_id, questions = self.max_questions, "round started");

        self.draw_next()
    }

    /// Check the player's answers against the current verb.
    ///
    /// Returns `Ok(None)` without touching any state if either answer is
    /// blank: the player has not finished typing.
    pub fn submit_answer(
        &mut self,
        preterit: &str,
        participle: &str,
    ) -> Result<Option<AnswerResult>, QuizError> {
        const OPERATION: &str = "submit an answer";
        self.ensure_phase(OPERATION, &[Phase::AwaitingAnswer])?;

        if preterit.trim().is_empty() || participle.trim().is_empty() {
            tracing::debug!("incomplete answer ignored");
            return Ok(None);
        }

        let Some(verb) = self.current.as_ref() else {
            return Err(QuizError::InvalidPhase {
                operation: OPERATION,
                phase: self.phase,
            });
        };

        let result = AnswerResult::check(verb, preterit, participle);
        self.score += result.points();
        self.history.push(result.clone());
        self.phase = Phase::Reviewing;

        tracing::debug!(
            verb = %result.verb.present,
            points = result.points(),
            score = self.score,
            "answer checked"
        );
        self.observer.on_answer(&result, self.score);

        Ok(Some(result))
    }

    /// Leave review: draw the next verb, or finish the round.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        self.ensure_phase("advance", &[Phase::Reviewing])?;

        if self.questions_asked < self.max_questions {
            let verb = self.draw_next()?.clone();
            return Ok(Advance::NextQuestion {
                number: self.questions_asked,
                verb,
            });
        }

        let summary = self.summarize();
        self.current = None;
        self.phase = Phase::RoundOver;

        tracing::info!(
            round = %summary.round_id,
            score = summary.score,
            tier = %summary.tier,
            "round over"
        );
        self.observer.on_round_over(&summary);

        Ok(Advance::RoundOver(Box::new(summary)))
    }

    /// A previously answered question, by zero-based index.
    pub fn history_step(&self, index: usize) -> Result<&AnswerResult, QuizError> {
        self.history.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.history.len(),
        })
    }

    /// Display text for a previously answered question.
    pub fn review_step(&self, index: usize) -> Result<StepReview, QuizError> {
        let result = self.history_step(index)?;
        let answer = result.verb.to_string();
        let correct = result.is_correct();
        let text = if correct {
            format!("{answer}. You got that right!")
        } else {
            format!("Remember, it's {answer}")
        };
        Ok(StepReview {
            index,
            answer,
            correct,
            text,
        })
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            phase: self.phase,
            action_label: self.phase.action_label(),
            present: self.current.as_ref().map(|v| v.present.clone()),
            score: self.score,
            questions_asked: self.questions_asked,
            max_questions: self.max_questions,
            marks: progress_marks(&self.history),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_asked(&self) -> usize {
        self.questions_asked
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// The verb being asked or reviewed, if any.
    pub fn current_verb(&self) -> Option<&Verb> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[AnswerResult] {
        &self.history
    }

    fn ensure_phase(&self, operation: &'static str, allowed: &[Phase]) -> Result<(), QuizError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            tracing::warn!(phase = %self.phase, "rejected: cannot {operation}");
            Err(QuizError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn draw_next(&mut self) -> Result<&Verb, QuizError> {
        let verb = self.bank.draw_random()?.clone();
        self.questions_asked += 1;
        self.phase = Phase::AwaitingAnswer;
        self.observer.on_question(self.questions_asked, &verb);
        Ok(&*self.current.insert(verb))
    }

    fn summarize(&self) -> RoundSummary {
        let tier = evaluate(self.score, self.max_questions);
        RoundSummary {
            round_id: self.round_id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            score: self.score,
            max_score: max_score(self.max_questions),
            tier,
            message: round_over_message(self.score, tier),
            stats: RoundStats::from_history(&self.history),
            history: self.history.clone(),
        }
    }
}

impl fmt::Debug for RoundController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundController")
            .field("bank", &self.bank)
            .field("max_questions", &self.max_questions)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("questions_asked", &self.questions_asked)
            .field("current", &self.current)
            .field("history", &self.history.len())
            .finish()
    }
}
