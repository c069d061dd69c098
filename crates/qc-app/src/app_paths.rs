use std::path::PathBuf;

use qc_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings_path: PathBuf,
    pub counters_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            settings_path: dirs.app_data_root.join("settings.json"),
            counters_path: dirs.app_data_root.join("counters.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
