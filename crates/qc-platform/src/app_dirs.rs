//! Per-user data root for the scanner station.

use qc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "qrcheck";
const PROFILE_ENV: &str = "QC_PROFILE";

/// Resolves `<data_local_dir>/qrcheck`. Setting `QC_PROFILE` gives each
/// entrance point on a shared machine its own counters and endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirsAppDirsAdapter;

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let profile = std::env::var(PROFILE_ENV).ok();

        Ok(AppDirs {
            app_data_root: base.join(station_dir_name(profile.as_deref())),
        })
    }
}

fn station_dir_name(profile: Option<&str>) -> String {
    match profile.map(str::trim) {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}
