//! # Launch configuration DTO
//!
//! Pure data: TOML → DTO mapping only. No validation, no default-value
//! policy beyond "missing means empty". Interpretation of empty values
//! (e.g. an empty `data_dir` meaning "use the platform directory") is the
//! bootstrap layer's job.

use std::path::PathBuf;

/// Launch-time configuration (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scanner device path. Empty or `-` selects the terminal keyboard wedge.
    pub scanner_device: String,

    /// Window in which repeated identical decodes are suppressed
    pub duplicate_window_ms: u64,

    /// HTTP request timeout; 0 means none
    pub request_timeout_secs: u64,

    /// Feedback mode name as written in the file
    pub feedback_mode: String,

    /// Data directory override (path info only, no existence check)
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing sections or keys map to empty values; negative numbers read as 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            scanner_device: section("scanner", "device")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            duplicate_window_ms: section("scanner", "duplicate_window_ms")
                .and_then(|v| v.as_integer())
                .and_then(|n| u64::try_from(n).ok())
                .unwrap_or(0),
            request_timeout_secs: section("network", "request_timeout_secs")
                .and_then(|v| v.as_integer())
                .and_then(|n| u64::try_from(n).ok())
                .unwrap_or(0),
            feedback_mode: section("feedback", "mode")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            scanner_device: String::new(),
            duplicate_window_ms: 0,
            request_timeout_secs: 0,
            feedback_mode: String::new(),
            data_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [scanner]
            device = "/dev/ttyACM1"
            duplicate_window_ms = 1500

            [network]
            request_timeout_secs = 20

            [feedback]
            mode = "off"

            [storage]
            data_dir = "/var/lib/qrcheck"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.scanner_device, "/dev/ttyACM1");
        assert_eq!(config.duplicate_window_ms, 1500);
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.feedback_mode, "off");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/qrcheck"));
    }

    #[test]
    fn negative_durations_read_as_zero() {
        let value: toml::Value = toml::from_str(
            r#"
            [scanner]
            duplicate_window_ms = -1

            [network]
            request_timeout_secs = -30
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.duplicate_window_ms, 0);
        assert_eq!(config.request_timeout_secs, 0);
    }

    #[test]
    fn missing_sections_are_empty_facts() {
        let value: toml::Value = toml::from_str("").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }
}
