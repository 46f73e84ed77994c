//! Per-round statistics derived from the answer history.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerResult, StepMark};

/// Aggregate counts for one round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Questions answered.
    pub answered: usize,
    /// Correct preterit answers.
    pub preterit_correct: usize,
    /// Correct participle answers.
    pub participle_correct: usize,
    /// Questions with both fields right.
    pub fully_correct: usize,
    /// Questions with exactly one field right.
    pub half_correct: usize,
    /// Questions with neither field right.
    pub incorrect: usize,
    /// Share of correct fields over all fields answered, in `[0, 1]`.
    pub accuracy: f64,
}

impl RoundStats {
    pub fn from_history(history: &[AnswerResult]) -> Self {
        let mut stats = RoundStats {
            answered: history.len(),
            ..Default::default()
        };

        for result in history {
            stats.preterit_correct += usize::from(result.preterit_correct);
            stats.participle_correct += usize::from(result.participle_correct);
            match result.mark() {
                StepMark::Correct => stats.fully_correct += 1,
                StepMark::HalfCorrect => stats.half_correct += 1,
                StepMark::Incorrect => stats.incorrect += 1,
            }
        }

        if stats.answered > 0 {
            let fields = (stats.answered * 2) as f64;
            stats.accuracy = (stats.preterit_correct + stats.participle_correct) as f64 / fields;
        }

        stats
    }
}

/// Progress-strip marks, one per answered question.
pub fn progress_marks(history: &[AnswerResult]) -> Vec<StepMark> {
    history.iter().map(AnswerResult::mark).collect()
}
