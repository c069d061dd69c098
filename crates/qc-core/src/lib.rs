//! # qc-core
//!
//! Core domain models and business logic for qrcheck.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the validation outcome rules, the tally counters, the scan state machine and the
//! port traits implemented by the infrastructure and platform crates.

pub mod app_dirs;
pub mod config;
pub mod counters;
pub mod feedback;
pub mod ports;
pub mod scan;
pub mod settings;
pub mod stats;
pub mod validation;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use counters::Counters;
pub use feedback::{Polarity, ToneSpec};
pub use scan::{ScanAction, ScanConfig, ScanEvent, ScanSession, ScanState, ScanStateMachine};
pub use settings::model::Settings;
pub use stats::ServerStats;
pub use validation::{Outcome, ValidationResult, ValidationStatus};
pub use view::ResultCard;
