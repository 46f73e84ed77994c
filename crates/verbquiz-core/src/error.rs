//! Quiz error types.
//!
//! Every failure the core can surface is a variant of [`QuizError`]. Callers
//! use [`QuizError::is_fatal`] to decide between aborting and ignoring the
//! rejected operation.

use thiserror::Error;

use crate::round::Phase;

/// Errors raised while turning verb data into a [`VerbBank`](crate::VerbBank).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source contained no verbs at all.
    #[error("verb list is empty")]
    Empty,

    /// The source was not a JSON array of string arrays.
    #[error("invalid verb list JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// One entry did not hold exactly three usable fields.
    #[error("malformed verb entry #{index}: {reason}")]
    Malformed { index: usize, reason: String },
}

/// Errors that can occur while driving a round.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The verb data could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A draw was attempted with nothing left in the pool.
    #[error("verb pool exhausted")]
    PoolExhausted,

    /// A history step outside the recorded range was requested.
    #[error("history step {index} out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An operation was invoked in a phase that does not accept it.
    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// The controller was configured with an unusable round length.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QuizError {
    /// Returns `true` if this error should abort the session.
    ///
    /// Rejected transitions and bad history lookups leave the controller
    /// untouched, so callers can simply ignore them.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            QuizError::IndexOutOfRange { .. } | QuizError::InvalidPhase { .. }
        )
    }
}
