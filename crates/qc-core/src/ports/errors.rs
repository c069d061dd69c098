use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Failure to open the scanning device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("permission to use the scanner was denied")]
    PermissionDenied,

    #[error("scanner unavailable: {0}")]
    Unavailable(String),
}

/// Failure to release the scanning device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopError {
    #[error("failed to release scanner: {0}")]
    Release(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response is not valid JSON: {0}")]
    Parse(String),
}
