use async_trait::async_trait;

use crate::ports::errors::{CameraError, StopError};
use crate::scan::{ScanConfig, ScanSession};

/// A source of decoded QR payloads.
///
/// Per-frame "nothing decoded" is the normal state and is never reported.
/// A code held in front of the device is emitted once, not once per frame.
#[async_trait]
pub trait ScannerPort: Send + Sync {
    /// Open the device and begin decoding.
    async fn start(&self, config: &ScanConfig) -> Result<ScanSession, CameraError>;

    /// Release the device. No-op when nothing is active.
    async fn stop(&self) -> Result<(), StopError>;
}
