//! The verb bank: immutable verb storage plus a per-round draw pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LoadError, QuizError};
use crate::model::{Verb, VerbId};

/// One raw source entry: `[present, preterit(s), participle(s)]`.
pub type VerbEntry = Vec<String>;

/// Holds every candidate verb and the pool of ones not yet drawn this round.
pub struct VerbBank {
    verbs: Vec<Verb>,
    pool: Vec<VerbId>,
    rng: StdRng,
}

impl std::fmt::Debug for VerbBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbBank")
            .field("verbs", &self.verbs.len())
            .field("remaining", &self.pool.len())
            .finish()
    }
}

impl VerbBank {
    /// Build a bank from raw source entries.
    ///
    /// Every entry must hold exactly three non-empty fields. The pool starts
    /// out full.
    pub fn load(entries: Vec<VerbEntry>) -> Result<Self, LoadError> {
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }

        let verbs = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry.as_slice() {
                [present, preterit, participle] => Verb::parse(present, preterit, participle)
                    .map_err(|reason| LoadError::Malformed { index, reason }),
                fields => Err(LoadError::Malformed {
                    index,
                    reason: format!("expected 3 fields, found {}", fields.len()),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("loaded {} verbs", verbs.len());

        let mut bank = Self {
            verbs,
            pool: Vec::new(),
            rng: StdRng::from_entropy(),
        };
        bank.reset_pool();
        Ok(bank)
    }

    /// Use a fixed seed so the draw order is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Put every verb back into the pool.
    pub fn reset_pool(&mut self) {
        self.pool = (0..self.verbs.len()).map(VerbId).collect();
    }

    /// Remove and return a uniformly random verb from the pool.
    pub fn draw_random(&mut self) -> Result<&Verb, QuizError> {
        if self.pool.is_empty() {
            return Err(QuizError::PoolExhausted);
        }
        let slot = self.rng.gen_range(0..self.pool.len());
        let id = self.pool.swap_remove(slot);
        let verb = &self.verbs[id.0];
        tracing::debug!(verb = %verb.present, remaining = self.pool.len(), "drew verb");
        Ok(verb)
    }

    /// All verbs, in source order.
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Number of verbs still available this round.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(present: &str, preterit: &str, participle: &str) -> VerbEntry {
        vec![present.into(), preterit.into(), participle.into()]
    }

    fn sample_bank() -> VerbBank {
        VerbBank::load(vec![
            entry("go", "went", "gone"),
            entry("see", "saw", "seen"),
            entry("eat", "ate", "eaten"),
            entry("dream", "dreamed/dreamt", "dreamed/dreamt"),
        ])
        .unwrap()
        .with_seed(7)
    }

    #[test]
    fn load_rejects_empty_source() {
        assert!(matches!(VerbBank::load(vec![]), Err(LoadError::Empty)));
    }

    #[test]
    fn load_rejects_missing_field() {
        let err = VerbBank::load(vec![
            entry("go", "went", "gone"),
            vec!["see".into(), "saw".into()],
        ])
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { index: 1, .. }));
    }

    #[test]
    fn load_rejects_blank_field() {
        let err = VerbBank::load(vec![entry("go", "went", " ")]).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { index: 0, .. }));
    }

    #[test]
    fn draws_never_repeat_until_reset() {
        let mut bank = sample_bank();
        let mut seen = HashSet::new();
        for _ in 0..bank.len() {
            let verb = bank.draw_random().unwrap();
            assert!(seen.insert(verb.present.clone()), "verb drawn twice");
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(bank.remaining(), 0);
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut bank = sample_bank();
        for _ in 0..4 {
            bank.draw_random().unwrap();
        }
        assert!(matches!(bank.draw_random(), Err(QuizError::PoolExhausted)));
    }

    #[test]
    fn reset_refills_pool() {
        let mut bank = sample_bank();
        bank.draw_random().unwrap();
        bank.draw_random().unwrap();
        assert_eq!(bank.remaining(), 2);
        bank.reset_pool();
        assert_eq!(bank.remaining(), 4);
    }

    #[test]
    fn seeded_banks_draw_in_the_same_order() {
        let mut a = sample_bank();
        let mut b = sample_bank();
        for _ in 0..4 {
            assert_eq!(
                a.draw_random().unwrap().present,
                b.draw_random().unwrap().present
            );
        }
    }
}
