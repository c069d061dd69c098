use serde::{Deserialize, Serialize};

use crate::counters::Counters;
use crate::scan::ScanState;
use crate::stats::ServerStats;

/// Output of the workflow, consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    StateChanged { state: ScanState },
    CountersChanged { counters: Counters },
    EndpointChanged { api_url: String },
    ServerStats { stats: ServerStats },
    /// A message the user must see (camera errors, save failures).
    Notice { message: String },
}

#[async_trait::async_trait]
pub trait WorkflowEventPort: Send + Sync {
    async fn emit(&self, event: WorkflowEvent);
}
