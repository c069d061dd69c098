use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use qc_core::ports::{NetworkError, ServerStatsPort, ValidationPort};
use qc_core::{ServerStats, ValidationResult};
use reqwest::{Client, Url};
use tracing::{debug, info_span, Instrument};

use super::wire::{StatsResponse, ValidateResponse};

const ACTION_VALIDATE: &str = "validate";
const ACTION_STATS: &str = "stats";

/// Client for the validation service.
///
/// One GET per call, query parameters only, no retries. The service performs
/// the "mark as used" side effect itself; repeating a read-shaped request at
/// the transport layer cannot be mistaken for a second write.
#[derive(Clone)]
pub struct HttpValidationClient {
    client: Client,
}

impl HttpValidationClient {
    /// Build a client. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build http client failed")?;
        Ok(Self { client })
    }

    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, NetworkError> {
        let url = Url::parse(endpoint)
            .map_err(|e| NetworkError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), body_len = body.len(), "service responded");

        serde_json::from_str(&body).map_err(|e| NetworkError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ValidationPort for HttpValidationClient {
    async fn validate(
        &self,
        payload: &str,
        endpoint: &str,
    ) -> Result<ValidationResult, NetworkError> {
        let span = info_span!("infra.http.validate", payload_len = payload.len());

        async {
            let value = self
                .get_json(endpoint, &[("action", ACTION_VALIDATE), ("qr", payload)])
                .await?;
            Ok(ValidateResponse::from_value(value).into_result())
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ServerStatsPort for HttpValidationClient {
    async fn fetch_stats(&self, endpoint: &str) -> Result<ServerStats, NetworkError> {
        let span = info_span!("infra.http.fetch_stats");

        async {
            let value = self.get_json(endpoint, &[("action", ACTION_STATS)]).await?;
            let response: StatsResponse = serde_json::from_value(value)
                .map_err(|e| NetworkError::Parse(e.to_string()))?;
            response
                .into_stats()
                .ok_or_else(|| NetworkError::Parse("stats missing or unsuccessful".to_string()))
        }
        .instrument(span)
        .await
    }
}
