//! # Workflow Dependencies
//!
//! Dependency grouping for [`crate::ScanWorkflow`] construction.
//!
//! **Note**: This is NOT a Builder pattern. No build steps, no default values,
//! no hidden logic; just parameter grouping.

use std::sync::Arc;
use qc_core::ports::*;

/// Workflow dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct WorkflowDeps {
    // Scanning
    pub scanner: Arc<dyn ScannerPort>,

    // Remote service
    pub validator: Arc<dyn ValidationPort>,
    pub server_stats: Arc<dyn ServerStatsPort>,

    // Persistence
    pub settings: Arc<dyn SettingsPort>,
    pub counters: Arc<dyn CounterStorePort>,

    // Output
    pub feedback: Arc<dyn FeedbackPort>,
    pub events: Arc<dyn WorkflowEventPort>,
}
