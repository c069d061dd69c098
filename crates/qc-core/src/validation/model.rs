use serde::{Deserialize, Serialize};

/// Status reported by the validation service.
///
/// Unknown values are kept verbatim so they can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    AlreadyUsed,
    Other(String),
}

impl ValidationStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "valid" => Self::Valid,
            "already_used" => Self::AlreadyUsed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Valid => "valid",
            Self::AlreadyUsed => "already_used",
            Self::Other(raw) => raw,
        }
    }
}

/// Parsed answer of one validation request. Transient: consumed to update the
/// counters and render the result card, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    pub status: ValidationStatus,
    pub guest_name: Option<String>,
    pub message: Option<String>,
    pub scanned_at: Option<String>,
}

impl ValidationResult {
    /// A response that could not be understood. Classifies as invalid.
    pub fn unrecognized() -> Self {
        Self {
            success: false,
            status: ValidationStatus::Other(String::new()),
            guest_name: None,
            message: None,
            scanned_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_status_maps_known_values() {
        assert_eq!(ValidationStatus::from_wire("valid"), ValidationStatus::Valid);
        assert_eq!(
            ValidationStatus::from_wire("already_used"),
            ValidationStatus::AlreadyUsed
        );
        assert_eq!(
            ValidationStatus::from_wire("VALID"),
            ValidationStatus::Other("VALID".to_string())
        );
    }

    #[test]
    fn other_status_keeps_raw_text() {
        let status = ValidationStatus::from_wire("expired");
        assert_eq!(status.as_str(), "expired");
    }
}
