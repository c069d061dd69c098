//! Local tally of validation outcomes.

use serde::{Deserialize, Serialize};

use crate::validation::Outcome;

/// Persisted tally. `used` counts already-used (duplicate) codes.
///
/// Fields only grow, except through [`Counters::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default)]
    pub valid: u64,
    #[serde(default)]
    pub invalid: u64,
    #[serde(default)]
    pub used: u64,
}

impl Counters {
    /// Increment the field matching `outcome` by one.
    pub fn record(&mut self, outcome: Outcome) {
        let field = match outcome {
            Outcome::Valid => &mut self.valid,
            Outcome::Duplicate => &mut self.used,
            Outcome::Invalid => &mut self.invalid,
        };
        *field = field.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> u64 {
        self.valid
            .saturating_add(self.invalid)
            .saturating_add(self.used)
    }
}
