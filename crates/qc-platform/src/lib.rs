//! # qc-platform
//!
//! Adapters that touch the host: the scanner device, audible feedback and the
//! per-user data directory.

pub mod app_dirs;
pub mod feedback;
pub mod scanner;

pub use app_dirs::DirsAppDirsAdapter;
pub use feedback::{feedback_for, FeedbackMode};
pub use scanner::{FeedResult, KeyboardWedgeScanner, LineDeviceScanner};
