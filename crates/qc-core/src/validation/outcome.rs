use serde::{Deserialize, Serialize};

use super::model::{ValidationResult, ValidationStatus};
use crate::feedback::Polarity;

/// Three-way classification of a validation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Duplicate,
    Invalid,
}

impl Outcome {
    /// Classify a response.
    ///
    /// Precedence is fixed: a valid status only counts when `success` is also
    /// true, `already_used` wins regardless of `success`, everything else is
    /// invalid.
    pub fn classify(result: &ValidationResult) -> Self {
        if result.status == ValidationStatus::Valid && result.success {
            return Self::Valid;
        }
        if result.status == ValidationStatus::AlreadyUsed {
            return Self::Duplicate;
        }
        Self::Invalid
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Self::Valid => Polarity::Positive,
            Self::Duplicate | Self::Invalid => Polarity::Negative,
        }
    }
}
