//! Use case for updating the persisted settings

use std::sync::Arc;

use anyhow::Result;
use qc_core::ports::SettingsPort;
use qc_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};
use tracing::{info, info_span, warn, Instrument};

/// Use case for saving settings.
///
/// ## Behavior
/// - Loads current settings for comparison; an unreadable store is
///   compared against defaults so a damaged file can be overwritten
/// - Rejects settings written for another schema version
/// - Logs changed fields with old/new values
/// - Persists settings through the settings port
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Persist `settings` and return what was stored.
    pub async fn execute(&self, settings: Settings) -> Result<Settings> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                ));
            }

            let old_settings = match self.settings.load().await {
                Ok(old) => old,
                Err(err) => {
                    warn!(error = %err, "Failed to load current settings, overwriting");
                    Settings::default()
                }
            };
            let changes = SettingsDiff::diff(&old_settings, &settings);

            self.settings.save(&settings).await?;

            info!(
                changed_fields = %changes.to_log_string(),
                "Settings updated successfully"
            );
            Ok(settings)
        }
        .instrument(span)
        .await
    }

    /// Save a new endpoint URL, trimmed of surrounding whitespace.
    pub async fn set_endpoint(&self, api_url: &str) -> Result<Settings> {
        self.execute(Settings::with_api_url(api_url.trim())).await
    }
}

struct SettingsDiff {
    api_url: Option<(String, String)>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &Settings) -> Self {
        Self {
            api_url: (old.api_url != new.api_url)
                .then(|| (old.api_url.clone(), new.api_url.clone())),
        }
    }

    fn to_log_string(&self) -> String {
        match &self.api_url {
            Some((old, new)) => format!("api_url: {:?} → {:?}", old, new),
            None => "(no changes)".to_string(),
        }
    }
}
