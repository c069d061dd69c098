use async_trait::async_trait;

use crate::ports::errors::NetworkError;
use crate::stats::ServerStats;
use crate::validation::ValidationResult;

#[async_trait]
pub trait ValidationPort: Send + Sync {
    /// Ask `endpoint` whether `payload` is admissible.
    ///
    /// A JSON answer that does not match the expected shape is still `Ok`
    /// (it classifies as invalid); only transport failures and non-JSON
    /// bodies are errors.
    async fn validate(&self, payload: &str, endpoint: &str)
        -> Result<ValidationResult, NetworkError>;
}

#[async_trait]
pub trait ServerStatsPort: Send + Sync {
    async fn fetch_stats(&self, endpoint: &str) -> Result<ServerStats, NetworkError>;
}
