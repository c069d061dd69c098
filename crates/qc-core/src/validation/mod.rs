//! Validation results and the three-way outcome rule.

mod model;
mod outcome;

pub use model::{ValidationResult, ValidationStatus};
pub use outcome::Outcome;

/// Message shown for an invalid code when the server sent none.
pub const DEFAULT_INVALID_MESSAGE: &str = "Código QR no válido";
