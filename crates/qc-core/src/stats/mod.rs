use serde::{Deserialize, Serialize};

/// Event totals as reported by the validation service.
///
/// Read-only: never merged into the local [`crate::Counters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStats {
    pub scanned: u64,
    pub pending: u64,
    pub total: u64,
    pub timestamp: Option<String>,
}
