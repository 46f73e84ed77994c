//! Core data model types for verbquiz.
//!
//! These are the fundamental types the rest of the crate uses to represent
//! verbs, their accepted spellings, and answered questions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between alternative spellings in the source data.
pub const VARIANT_SEPARATOR: char = '/';

/// Opaque identifier of a verb inside a [`VerbBank`](crate::VerbBank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbId(pub usize);

/// Normalize text for comparison: trimmed and lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The accepted spellings of one verb form (e.g. "dreamed" / "dreamt").
///
/// Spellings keep their source casing and order for display; matching is
/// done on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSet {
    forms: Vec<String>,
}

impl VariantSet {
    /// Split a `/`-separated source string into a variant set.
    ///
    /// Returns `None` if no non-empty alternative remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let forms: Vec<String> = raw
            .split(VARIANT_SEPARATOR)
            .map(str::trim)
            .filter(|form| !form.is_empty())
            .map(str::to_string)
            .collect();
        if forms.is_empty() {
            None
        } else {
            Some(Self { forms })
        }
    }

    /// Whether the user's input matches one of the accepted spellings.
    pub fn accepts(&self, input: &str) -> bool {
        let input = normalize(input);
        self.forms.iter().any(|f| normalize(f) == input)
    }

    /// The spellings, in source order.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Display text of the accepted answer, e.g. `dreamed/dreamt`.
    pub fn canonical(&self) -> String {
        self.forms.join("/")
    }
}

impl fmt::Display for VariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// An irregular verb: present form plus accepted preterit and participle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    /// Present-tense form shown to the player.
    pub present: String,
    /// Accepted preterit spellings.
    pub preterit: VariantSet,
    /// Accepted past-participle spellings.
    pub participle: VariantSet,
}

impl Verb {
    /// Build a verb from its three raw source fields.
    pub fn parse(present: &str, preterit: &str, participle: &str) -> Result<Self, String> {
        let present = present.trim();
        if present.is_empty() {
            return Err("present form is empty".into());
        }
        let preterit =
            VariantSet::parse(preterit).ok_or_else(|| format!("no preterit given for '{present}'"))?;
        let participle = VariantSet::parse(participle)
            .ok_or_else(|| format!("no participle given for '{present}'"))?;
        Ok(Self {
            present: present.to_string(),
            preterit,
            participle,
        })
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}, {}", self.present, self.preterit, self.participle)
    }
}

/// How a single question went, as shown on the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepMark {
    Correct,
    HalfCorrect,
    Incorrect,
}

impl fmt::Display for StepMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMark::Correct => write!(f, "correct"),
            StepMark::HalfCorrect => write!(f, "half-correct"),
            StepMark::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// The checked answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// The verb that was asked.
    pub verb: Verb,
    /// What the player typed for the preterit.
    pub user_preterit: String,
    /// What the player typed for the participle.
    pub user_participle: String,
    pub preterit_correct: bool,
    pub participle_correct: bool,
}

impl AnswerResult {
    /// Check both answers against the verb's variant sets.
    pub fn check(verb: &Verb, preterit: &str, participle: &str) -> Self {
        Self {
            verb: verb.clone(),
            user_preterit: preterit.trim().to_string(),
            user_participle: participle.trim().to_string(),
            preterit_correct: verb.preterit.accepts(preterit),
            participle_correct: verb.participle.accepts(participle),
        }
    }

    /// Points earned: one per correct field.
    pub fn points(&self) -> u32 {
        u32::from(self.preterit_correct) + u32::from(self.participle_correct)
    }

    /// Both fields right.
    pub fn is_correct(&self) -> bool {
        self.preterit_correct && self.participle_correct
    }

    pub fn mark(&self) -> StepMark {
        match self.points() {
            2 => StepMark::Correct,
            1 => StepMark::HalfCorrect,
            _ => StepMark::Incorrect,
        }
    }
}
