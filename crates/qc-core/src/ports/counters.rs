use async_trait::async_trait;

use crate::counters::Counters;

/// Whole-value persistence for the tally.
///
/// Read-modify-write: callers load once, keep the value in memory and save the
/// whole value after every mutation. Assumes a single writer process.
#[async_trait]
pub trait CounterStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Counters>;
    async fn save(&self, counters: &Counters) -> anyhow::Result<()>;
}
