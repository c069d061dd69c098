use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use qc_core::ports::{CameraError, ScannerPort, StopError};
use qc_core::{ScanConfig, ScanSession};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use super::dedup::{payload_from_line, DuplicateFilter};
use super::SESSION_BUFFER;

/// Reads payload lines from a character device such as `/dev/ttyACM0` or
/// `/dev/hidraw0`.
///
/// A regular file is read once to its end, which closes the session. Other
/// devices are followed: an empty read is retried every frame interval.
pub struct LineDeviceScanner {
    device: PathBuf,
    duplicate_window: Duration,
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl LineDeviceScanner {
    pub fn new(device: impl Into<PathBuf>, duplicate_window: Duration) -> Self {
        Self {
            device: device.into(),
            duplicate_window,
            reader: Mutex::new(None),
        }
    }

    pub fn device(&self) -> &Path {
        &self.device
    }
}

fn open_error(device: &Path, err: std::io::Error) -> CameraError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => CameraError::PermissionDenied,
        _ => CameraError::Unavailable(format!("{}: {err}", device.display())),
    }
}

#[async_trait]
impl ScannerPort for LineDeviceScanner {
    async fn start(&self, config: &ScanConfig) -> Result<ScanSession, CameraError> {
        let mut reader = self.reader.lock().await;
        if let Some(stale) = reader.take() {
            stale.abort();
        }

        let file = File::open(&self.device)
            .await
            .map_err(|e| open_error(&self.device, e))?;
        let follow = match file.metadata().await {
            Ok(metadata) => !metadata.is_file(),
            Err(err) => return Err(open_error(&self.device, err)),
        };

        let (tx, session) = ScanSession::channel(SESSION_BUFFER);
        let span = info_span!("platform.scanner.read", device = %self.device.display());
        let task = read_lines(
            file,
            tx,
            DuplicateFilter::new(self.duplicate_window),
            follow.then(|| config.frame_interval()),
        );
        *reader = Some(tokio::spawn(task.instrument(span)));

        info!(device = %self.device.display(), follow, "scanner device opened");
        Ok(session)
    }

    async fn stop(&self) -> Result<(), StopError> {
        if let Some(task) = self.reader.lock().await.take() {
            task.abort();
            debug!(device = %self.device.display(), "scanner device released");
        }
        Ok(())
    }
}

/// Forward admitted lines until the source ends, the session is dropped, or a
/// read fails. `poll` of `None` treats end-of-file as the end of the source.
async fn read_lines<R>(
    source: R,
    tx: mpsc::Sender<String>,
    mut filter: DuplicateFilter,
    poll: Option<Duration>,
) where
    R: AsyncRead + Unpin,
{
    let mut source = BufReader::new(source);
    let mut raw = Vec::new();

    loop {
        raw.clear();
        match source.read_until(b'\n', &mut raw).await {
            Ok(0) => match poll {
                Some(interval) if !tx.is_closed() => {
                    tokio::time::sleep(interval).await;
                    continue;
                }
                _ => {
                    debug!("scanner source reached end");
                    return;
                }
            },
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "scanner read failed");
                return;
            }
        }

        let line = String::from_utf8_lossy(&raw);
        let Some(payload) = payload_from_line(&line) else {
            continue;
        };
        if !filter.admit(payload, Instant::now()) {
            debug!(payload_len = payload.len(), "repeated decode suppressed");
            continue;
        }
        if tx.send(payload.to_string()).await.is_err() {
            return;
        }
    }
}
