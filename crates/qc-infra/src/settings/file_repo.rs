use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use qc_core::{
    ports::SettingsPort,
    settings::model::{Settings, CURRENT_SCHEMA_VERSION},
};
use tracing::debug;

use crate::fs::JsonFile;

/// Settings persisted as a JSON document.
pub struct FileSettingsRepository {
    file: JsonFile,
}

impl FileSettingsRepository {
    /// Creates a FileSettingsRepository configured to use the given file path as the settings file.
    ///
    /// # Examples
    ///
    /// ```
    /// use qc_infra::FileSettingsRepository;
    /// let _repo = FileSettingsRepository::new("config/settings.json");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Loads settings from the repository path.
    ///
    /// If the settings file does not exist, returns `Settings::default()` (unconfigured).
    /// A file written by a newer schema is refused rather than silently truncated.
    async fn load(&self) -> Result<Settings> {
        let Some(settings) = self.file.read::<Settings>().await? else {
            debug!(path = %self.file.path().display(), "no settings file, using defaults");
            return Ok(Settings::default());
        };

        if settings.schema_version > CURRENT_SCHEMA_VERSION {
            bail!(
                "settings schema {} is newer than supported {}",
                settings.schema_version,
                CURRENT_SCHEMA_VERSION
            );
        }

        Ok(settings)
    }

    /// Persist settings as pretty-printed JSON, atomically.
    async fn save(&self, settings: &Settings) -> Result<()> {
        self.file.write(settings).await
    }
}
