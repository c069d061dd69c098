//! Use case for validating one decoded payload against the configured endpoint

use std::sync::Arc;

use qc_core::ports::ValidationPort;
use qc_core::scan::{ScanEvent, ValidationFailure};
use qc_core::{Outcome, Settings, ValidationResult};
use tracing::{info, info_span, warn, Instrument};

/// What came back from one validation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReport {
    Answered(ValidationResult),
    Failed(ValidationFailure),
}

impl ValidationReport {
    pub fn into_event(self) -> ScanEvent {
        match self {
            Self::Answered(result) => ScanEvent::ValidationCompleted { result },
            Self::Failed(failure) => ScanEvent::ValidationFailed { failure },
        }
    }
}

/// Issues exactly one request per call.
///
/// ## Behavior
/// - Unconfigured endpoint: returns `NotConfigured` without touching the network
/// - Transport / parse failure: returns `Connection` with the error text
/// - No retries
pub struct ValidateTicket {
    validator: Arc<dyn ValidationPort>,
}

impl ValidateTicket {
    pub fn new(validator: Arc<dyn ValidationPort>) -> Self {
        Self { validator }
    }

    pub async fn execute(&self, payload: &str, settings: &Settings) -> ValidationReport {
        let span = info_span!("usecase.validate_ticket.execute", payload_len = payload.len());

        async {
            let Some(endpoint) = settings.endpoint() else {
                warn!("Validation skipped: endpoint not configured");
                return ValidationReport::Failed(ValidationFailure::NotConfigured);
            };

            match self.validator.validate(payload, endpoint).await {
                Ok(result) => {
                    info!(
                        status = result.status.as_str(),
                        success = result.success,
                        outcome = ?Outcome::classify(&result),
                        "Validation answered"
                    );
                    ValidationReport::Answered(result)
                }
                Err(err) => {
                    warn!(error = %err, "Validation request failed");
                    ValidationReport::Failed(ValidationFailure::Connection {
                        detail: err.to_string(),
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
