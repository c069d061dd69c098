//! Use case for loading the persisted settings

use std::sync::Arc;

use anyhow::Result;
use qc_core::ports::SettingsPort;
use qc_core::Settings;
use tracing::{info, info_span, Instrument};

/// Loads the current settings from the settings port.
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            info!(configured = result.is_configured(), "Settings retrieved");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
