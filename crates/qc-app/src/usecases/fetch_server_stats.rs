//! Use case for querying the service's own totals
//!
//! Read-only. The result is displayed next to the local tally and never
//! written into it.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use qc_core::ports::ServerStatsPort;
use qc_core::{ServerStats, Settings};
use tracing::{info, info_span, Instrument};

pub struct FetchServerStats {
    stats: Arc<dyn ServerStatsPort>,
}

impl FetchServerStats {
    pub fn new(stats: Arc<dyn ServerStatsPort>) -> Self {
        Self { stats }
    }

    pub async fn execute(&self, settings: &Settings) -> Result<ServerStats> {
        let span = info_span!("usecase.fetch_server_stats.execute");

        async {
            let endpoint = settings
                .endpoint()
                .ok_or_else(|| anyhow!("endpoint not configured"))?;

            let stats = self.stats.fetch_stats(endpoint).await?;
            info!(
                scanned = stats.scanned,
                pending = stats.pending,
                total = stats.total,
                "Server stats fetched"
            );
            Ok(stats)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use qc_core::ports::NetworkError;

    mock! {
        pub Stats {}

        #[async_trait]
        impl ServerStatsPort for Stats {
            async fn fetch_stats(&self, endpoint: &str) -> Result<ServerStats, NetworkError>;
        }
    }

    #[tokio::test]
    async fn unconfigured_endpoint_is_an_error_without_request() {
        let mut stats = MockStats::new();
        stats.expect_fetch_stats().never();

        let err = FetchServerStats::new(Arc::new(stats))
            .execute(&Settings::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not configured"));
    }

    #[tokio::test]
    async fn returns_remote_totals() {
        let mut stats = MockStats::new();
        stats.expect_fetch_stats().times(1).returning(|_| {
            Ok(ServerStats {
                scanned: 12,
                pending: 30,
                total: 42,
                timestamp: None,
            })
        });

        let result = FetchServerStats::new(Arc::new(stats))
            .execute(&Settings::with_api_url("https://x"))
            .await
            .unwrap();

        assert_eq!(result.total, 42);
    }
}
