//! Use case for mutating and persisting the local tally

use std::sync::Arc;

use anyhow::Result;
use qc_core::ports::CounterStorePort;
use qc_core::{Counters, Outcome};
use tracing::{info, info_span, Instrument};

/// Applies a mutation to the in-memory tally, then writes the whole value back.
///
/// The in-memory value is authoritative for the running session: a failed
/// write is reported but the mutation is kept.
pub struct UpdateCounters {
    store: Arc<dyn CounterStorePort>,
}

impl UpdateCounters {
    pub fn new(store: Arc<dyn CounterStorePort>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Counters> {
        self.store.load().await
    }

    pub async fn record(&self, counters: &mut Counters, outcome: Outcome) -> Result<()> {
        let span = info_span!("usecase.update_counters.record", ?outcome);

        async {
            counters.record(outcome);
            self.store.save(counters).await?;
            info!(
                valid = counters.valid,
                invalid = counters.invalid,
                used = counters.used,
                "Outcome recorded"
            );
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Zero all three fields at once and persist immediately.
    pub async fn reset(&self, counters: &mut Counters) -> Result<()> {
        let span = info_span!("usecase.update_counters.reset");

        async {
            let previous = *counters;
            counters.reset();
            self.store.save(counters).await?;
            info!(previous_total = previous.total(), "Counters reset");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
