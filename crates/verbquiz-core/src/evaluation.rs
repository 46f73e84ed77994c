//! End-of-round evaluation.
//!
//! Maps a final score onto one of six fixed tiers. The bands sit at 100%,
//! 80%, 60%, 40% and 20% of the maximum score; every band but the top one is
//! strictly greater-than.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points available per question (preterit + participle).
pub const POINTS_PER_QUESTION: u32 = 2;

/// Qualitative band for a finished round, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationTier {
    Perfect,
    Great,
    Good,
    Poor,
    Bad,
    Disaster,
}

impl EvaluationTier {
    /// All tiers, best first.
    pub const ALL: [EvaluationTier; 6] = [
        EvaluationTier::Perfect,
        EvaluationTier::Great,
        EvaluationTier::Good,
        EvaluationTier::Poor,
        EvaluationTier::Bad,
        EvaluationTier::Disaster,
    ];

    /// Feedback line shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            EvaluationTier::Perfect => "Perfect score! Well done indeed.",
            EvaluationTier::Great => "That was pretty good!",
            EvaluationTier::Good => "You can do better than this.",
            EvaluationTier::Poor => "Well, that was pretty bad.",
            EvaluationTier::Bad => "Pretty awful.",
            EvaluationTier::Disaster => "Quite the disaster, really.",
        }
    }
}

impl fmt::Display for EvaluationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluationTier::Perfect => "perfect",
            EvaluationTier::Great => "great",
            EvaluationTier::Good => "good",
            EvaluationTier::Poor => "poor",
            EvaluationTier::Bad => "bad",
            EvaluationTier::Disaster => "disaster",
        };
        write!(f, "{name}")
    }
}

/// Maximum score of a round with `max_questions` questions.
pub fn max_score(max_questions: usize) -> u32 {
    max_questions as u32 * POINTS_PER_QUESTION
}

/// Classify a final score.
///
/// Percent thresholds are compared in integers: `score > max * p / 100`
/// becomes `score * 100 > max * p`.
pub fn evaluate(score: u32, max_questions: usize) -> EvaluationTier {
    let max = u64::from(max_score(max_questions));
    let score = u64::from(score);
    let above = |percent: u64| score * 100 > max * percent;

    if score >= max {
        EvaluationTier::Perfect
    } else if above(80) {
        EvaluationTier::Great
    } else if above(60) {
        EvaluationTier::Good
    } else if above(40) {
        EvaluationTier::Poor
    } else if above(20) {
        EvaluationTier::Bad
    } else {
        EvaluationTier::Disaster
    }
}

/// Round-over text, e.g. `Your score is 17. That was pretty good! ...`.
pub fn round_over_message(score: u32, tier: EvaluationTier) -> String {
    format!(
        "Your score is {score}. {} Press Start to play again.",
        tier.message()
    )
}
