use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use qc_core::{ports::CounterStorePort, Counters};

use crate::fs::JsonFile;

/// Tally persisted as `{"valid":..,"invalid":..,"used":..}`.
///
/// No locking: a second process writing the same file races with this one.
pub struct FileCounterStore {
    file: JsonFile,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl CounterStorePort for FileCounterStore {
    async fn load(&self) -> Result<Counters> {
        Ok(self.file.read::<Counters>().await?.unwrap_or_default())
    }

    async fn save(&self, counters: &Counters) -> Result<()> {
        self.file.write(counters).await
    }
}
