use std::time::{Duration, Instant};

use async_trait::async_trait;
use qc_core::ports::{CameraError, ScannerPort, StopError};
use qc_core::{ScanConfig, ScanSession};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use super::dedup::{payload_from_line, DuplicateFilter};
use super::SESSION_BUFFER;

struct ActiveFeed {
    tx: mpsc::Sender<String>,
    filter: DuplicateFilter,
}

/// A scanner that types into the terminal.
///
/// The terminal input loop owns stdin and hands lines that are not commands
/// to [`KeyboardWedgeScanner::feed`]. Feeding only succeeds while a session
/// is active.
pub struct KeyboardWedgeScanner {
    duplicate_window: Duration,
    active: Mutex<Option<ActiveFeed>>,
}

/// Result of offering a line to the wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedResult {
    Accepted,
    /// Blank, or a repeat inside the duplicate window.
    Dropped,
    /// No session is listening.
    Inactive,
}

impl KeyboardWedgeScanner {
    pub fn new(duplicate_window: Duration) -> Self {
        Self {
            duplicate_window,
            active: Mutex::new(None),
        }
    }

    /// Offer one input line to the active session.
    ///
    /// Never waits for the session to drain: the caller is usually the same
    /// task that consumes the session, so a full buffer drops the line.
    pub async fn feed(&self, line: &str) -> FeedResult {
        let mut active = self.active.lock().await;
        let Some(feed) = active.as_mut() else {
            return FeedResult::Inactive;
        };

        let Some(payload) = payload_from_line(line) else {
            return FeedResult::Dropped;
        };
        if !feed.filter.admit(payload, Instant::now()) {
            debug!(payload_len = payload.len(), "repeated decode suppressed");
            return FeedResult::Dropped;
        }

        match feed.tx.try_send(payload.to_string()) {
            Ok(()) => FeedResult::Accepted,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("scan session buffer full, input dropped");
                FeedResult::Dropped
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                *active = None;
                FeedResult::Inactive
            }
        }
    }

    pub async fn is_active(&self) -> bool {
        self.active.lock().await.is_some()
    }
}

#[async_trait]
impl ScannerPort for KeyboardWedgeScanner {
    async fn start(&self, _config: &ScanConfig) -> Result<ScanSession, CameraError> {
        let (tx, session) = ScanSession::channel(SESSION_BUFFER);
        *self.active.lock().await = Some(ActiveFeed {
            tx,
            filter: DuplicateFilter::new(self.duplicate_window),
        });
        info!("keyboard wedge listening");
        Ok(session)
    }

    async fn stop(&self) -> Result<(), StopError> {
        if self.active.lock().await.take().is_some() {
            debug!("keyboard wedge released");
        }
        Ok(())
    }
}
