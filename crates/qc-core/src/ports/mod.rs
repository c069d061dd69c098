//! Port interfaces for the application layer
//!
//! Ports define the contract between the workflow (use cases) and the
//! infrastructure / platform implementations, so the scan workflow never
//! depends on a particular device, HTTP stack or storage format.

pub mod app_dirs;
pub mod counters;
pub mod errors;
pub mod feedback;
pub mod scanner;
pub mod settings;
pub mod validation;
pub mod workflow_event;

pub use app_dirs::AppDirsPort;
pub use counters::CounterStorePort;
pub use errors::{AppDirsError, CameraError, NetworkError, StopError};
pub use feedback::FeedbackPort;
pub use scanner::ScannerPort;
pub use settings::SettingsPort;
pub use validation::{ServerStatsPort, ValidationPort};
pub use workflow_event::{WorkflowEvent, WorkflowEventPort};
