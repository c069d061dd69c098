//! Response bodies of the validation service.
//!
//! Every field is optional: the service contract is trusted but not
//! schema-checked, and a body of the wrong shape must still classify.

use serde::Deserialize;
use serde_json::Value;
use qc_core::{ServerStats, ValidationResult, ValidationStatus};

#[derive(Debug, Default)]
pub(crate) struct ValidateResponse {
    pub success: Option<bool>,
    pub status: Option<String>,
    pub guest_name: Option<String>,
    pub message: Option<String>,
    pub scanned_at: Option<String>,
}

impl ValidateResponse {
    /// Decode field by field. A field of the wrong type reads as absent
    /// without affecting the others; a non-object body reads as empty.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::warn!(body = %value, "unexpected validation response shape");
            return Self::default();
        }

        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            success: value.get("success").and_then(Value::as_bool),
            status: text("status"),
            guest_name: text("guestName"),
            message: text("message"),
            scanned_at: text("scannedAt"),
        }
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            success: self.success.unwrap_or(false),
            status: ValidationStatus::from_wire(self.status.as_deref().unwrap_or("")),
            guest_name: self.guest_name,
            message: self.message,
            scanned_at: self.scanned_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: Option<StatsBody>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsBody {
    #[serde(default)]
    pub scanned: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub total: u64,
}

impl StatsResponse {
    pub fn into_stats(self) -> Option<ServerStats> {
        if !self.success {
            return None;
        }
        let body = self.stats?;
        Some(ServerStats {
            scanned: body.scanned,
            pending: body.pending,
            total: body.total,
            timestamp: self.timestamp,
        })
    }
}
