use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// User-editable settings persisted across sessions.
///
/// `api_url` is the base URL of the validation service. The empty string is the
/// "unconfigured" sentinel; it is never normalized away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub api_url: String,
}

impl Settings {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            api_url: api_url.into(),
        }
    }

    /// Whether an endpoint has been saved.
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty()
    }

    /// The endpoint to call, or `None` while unconfigured.
    pub fn endpoint(&self) -> Option<&str> {
        self.is_configured().then_some(self.api_url.as_str())
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_unconfigured() {
        let settings = Settings::default();
        assert!(!settings.is_configured());
        assert_eq!(settings.endpoint(), None);

        let blank = Settings::with_api_url("   ");
        assert!(!blank.is_configured());
    }

    #[test]
    fn endpoint_is_returned_verbatim() {
        let settings = Settings::with_api_url("https://x");
        assert_eq!(settings.endpoint(), Some("https://x"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(settings.api_url, "");
    }
}
