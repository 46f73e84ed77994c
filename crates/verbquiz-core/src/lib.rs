//! verbquiz-core — Verb bank, round controller, and scoring.
//!
//! This crate owns the quiz state machine and everything it needs: the verb
//! data model, draw-without-replacement sampling, answer checking, and the
//! post-round evaluation. Rendering is left to the caller.

pub mod bank;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod parser;
pub mod round;
pub mod statistics;

pub use bank::VerbBank;
pub use config::QuizConfig;
pub use error::{LoadError, QuizError};
pub use evaluation::{evaluate, EvaluationTier};
pub use model::{AnswerResult, StepMark, VariantSet, Verb, VerbId};
pub use round::{Advance, Phase, RoundController, RoundObserver, RoundSummary, RoundView};
