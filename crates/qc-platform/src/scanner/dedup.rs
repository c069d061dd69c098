use std::time::{Duration, Instant};

/// Drops a payload seen again within `window` of its last emission.
///
/// A code held in front of a reader is reported on every read; the workflow
/// wants it once. Only the most recent payload is remembered, so alternating
/// between two codes lets both through.
#[derive(Debug)]
pub struct DuplicateFilter {
    window: Duration,
    last: Option<(String, Instant)>,
}

impl DuplicateFilter {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Whether `payload` read at `now` should be emitted.
    pub fn admit(&mut self, payload: &str, now: Instant) -> bool {
        if let Some((last, at)) = &self.last {
            if last == payload && now.saturating_duration_since(*at) < self.window {
                return false;
            }
        }
        self.last = Some((payload.to_string(), now));
        true
    }
}

/// Normalize a raw device line into a payload; blank lines carry nothing.
pub fn payload_from_line(line: &str) -> Option<&str> {
    let trimmed = line.trim_matches(|c: char| c == '\r' || c == '\n' || c == '\0');
    let trimmed = trimmed.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
