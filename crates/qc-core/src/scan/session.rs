use tokio::sync::mpsc;

/// One capture-and-decode activation.
///
/// Yields decoded payloads lazily. The sequence has no natural end while the
/// adapter keeps the device open; once it ends (adapter stopped, device gone,
/// or [`ScanSession::close`]) it stays ended. A new session must be started
/// to scan again.
#[derive(Debug)]
pub struct ScanSession {
    decoded: mpsc::Receiver<String>,
    closed: bool,
}

impl ScanSession {
    pub fn new(decoded: mpsc::Receiver<String>) -> Self {
        Self {
            decoded,
            closed: false,
        }
    }

    /// Create a session together with the sender the adapter feeds.
    pub fn channel(buffer: usize) -> (mpsc::Sender<String>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }

    /// Wait for the next decoded payload; `None` once the session has ended.
    pub async fn next_decoded(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let next = self.decoded.recv().await;
        if next.is_none() {
            self.closed = true;
        }
        next
    }

    /// End the session. Pending payloads are discarded.
    pub fn close(&mut self) {
        self.decoded.close();
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
