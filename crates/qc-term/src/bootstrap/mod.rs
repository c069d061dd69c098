pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, LaunchOptions};
pub use wiring::{resolve_paths, wire_workflow, Wired, WiringError};
