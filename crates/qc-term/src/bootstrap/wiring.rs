//! # Dependency injection
//!
//! The only place that depends on qc-infra, qc-platform and qc-app together.
//! Assembles concrete adapters behind the port traits and turns the loaded
//! [`AppConfig`] facts into choices. No workflow decisions are made here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use qc_app::app_paths::AppPaths;
use qc_app::{ScanWorkflow, WorkflowDeps};
use qc_core::app_dirs::AppDirs;
use qc_core::config::AppConfig;
use qc_core::ports::{AppDirsError, AppDirsPort, ScannerPort, WorkflowEventPort};
use qc_infra::{FileCounterStore, FileSettingsRepository, HttpValidationClient};
use qc_platform::feedback::{feedback_for, FeedbackMode, UnknownFeedbackMode};
use qc_platform::{DirsAppDirsAdapter, KeyboardWedgeScanner, LineDeviceScanner};
use tracing::info;

/// Device name selecting the keyboard wedge.
pub const WEDGE_DEVICE: &str = "-";

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data directory resolution failed: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Feedback(#[from] UnknownFeedbackMode),
}

/// The assembled workflow plus the handles the terminal loop needs directly.
pub struct Wired {
    pub workflow: ScanWorkflow,
    /// Present when scans arrive through the terminal itself.
    pub wedge: Option<Arc<KeyboardWedgeScanner>>,
}

/// Where settings, counters and logs live.
///
/// An empty `data_dir` means the per-user platform directory.
pub fn resolve_paths(config: &AppConfig) -> WiringResult<AppPaths> {
    let app_dirs = if config.data_dir.as_os_str().is_empty() {
        DirsAppDirsAdapter.get_app_dirs()?
    } else {
        AppDirs {
            app_data_root: config.data_dir.clone(),
        }
    };
    Ok(AppPaths::from_app_dirs(&app_dirs))
}

fn request_timeout(config: &AppConfig) -> Option<Duration> {
    (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs))
}

fn is_wedge(device: &str) -> bool {
    let device = device.trim();
    device.is_empty() || device == WEDGE_DEVICE
}

pub fn wire_workflow(
    config: &AppConfig,
    paths: &AppPaths,
    events: Arc<dyn WorkflowEventPort>,
) -> WiringResult<Wired> {
    let duplicate_window = Duration::from_millis(config.duplicate_window_ms);

    let (scanner, wedge) = if is_wedge(&config.scanner_device) {
        let wedge = Arc::new(KeyboardWedgeScanner::new(duplicate_window));
        let scanner: Arc<dyn ScannerPort> = wedge.clone();
        (scanner, Some(wedge))
    } else {
        let device = PathBuf::from(config.scanner_device.trim());
        let scanner: Arc<dyn ScannerPort> =
            Arc::new(LineDeviceScanner::new(device, duplicate_window));
        (scanner, None)
    };

    let http = Arc::new(
        HttpValidationClient::new(request_timeout(config))
            .map_err(|e| WiringError::HttpClient(format!("{e:#}")))?,
    );
    let feedback_mode: FeedbackMode = config.feedback_mode.parse()?;

    let device = match wedge {
        Some(_) => WEDGE_DEVICE,
        None => config.scanner_device.as_str(),
    };
    info!(
        settings = %paths.settings_path.display(),
        device,
        feedback = ?feedback_mode,
        "workflow wired"
    );

    let deps = WorkflowDeps {
        scanner,
        validator: http.clone(),
        server_stats: http,
        settings: Arc::new(FileSettingsRepository::new(&paths.settings_path)),
        counters: Arc::new(FileCounterStore::new(&paths.counters_path)),
        feedback: feedback_for(feedback_mode),
        events,
    };

    Ok(Wired {
        workflow: ScanWorkflow::new(deps),
        wedge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_core::ports::WorkflowEvent;
    use std::path::Path;

    struct Discard;

    #[async_trait::async_trait]
    impl WorkflowEventPort for Discard {
        async fn emit(&self, _event: WorkflowEvent) {}
    }

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            data_dir: dir.to_path_buf(),
            ..AppConfig::empty()
        }
    }

    #[test]
    fn explicit_data_dir_is_used_as_root() {
        let paths = resolve_paths(&config_in(Path::new("/srv/gate"))).unwrap();
        assert_eq!(paths.settings_path, PathBuf::from("/srv/gate/settings.json"));
        assert_eq!(paths.logs_dir, PathBuf::from("/srv/gate/logs"));
    }

    #[test]
    fn zero_timeout_means_none() {
        assert_eq!(request_timeout(&AppConfig::empty()), None);
        let config = AppConfig {
            request_timeout_secs: 8,
            ..AppConfig::empty()
        };
        assert_eq!(request_timeout(&config), Some(Duration::from_secs(8)));
    }

    #[test]
    fn wedge_is_the_default_device() {
        assert!(is_wedge(""));
        assert!(is_wedge(" - "));
        assert!(!is_wedge("/dev/ttyACM0"));
    }

    #[tokio::test]
    async fn wires_wedge_scanner_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let paths = resolve_paths(&config).unwrap();

        let wired = wire_workflow(&config, &paths, Arc::new(Discard)).unwrap();
        assert!(wired.wedge.is_some());
    }

    #[tokio::test]
    async fn device_path_disables_wedge() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            scanner_device: "/dev/ttyACM0".into(),
            ..config_in(dir.path())
        };
        let paths = resolve_paths(&config).unwrap();

        let wired = wire_workflow(&config, &paths, Arc::new(Discard)).unwrap();
        assert!(wired.wedge.is_none());
    }

    #[test]
    fn unknown_feedback_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            feedback_mode: "loud".into(),
            ..config_in(dir.path())
        };
        let paths = resolve_paths(&config).unwrap();

        let err = wire_workflow(&config, &paths, Arc::new(Discard))
            .err()
            .unwrap();
        assert!(matches!(err, WiringError::Feedback(_)));
    }
}
