//! Feedback emitters.

mod bell;
#[cfg(feature = "audio")]
mod tone;

use std::str::FromStr;
use std::sync::Arc;

use qc_core::ports::FeedbackPort;
use qc_core::Polarity;

pub use bell::TerminalBellFeedback;
#[cfg(feature = "audio")]
pub use tone::ToneFeedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    #[default]
    Bell,
    Audio,
    Off,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown feedback mode `{0}` (expected bell, audio or off)")]
pub struct UnknownFeedbackMode(String);

impl FromStr for FeedbackMode {
    type Err = UnknownFeedbackMode;

    /// Empty selects the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "bell" => Ok(Self::Bell),
            "audio" | "tone" => Ok(Self::Audio),
            "off" | "none" => Ok(Self::Off),
            other => Err(UnknownFeedbackMode(other.to_string())),
        }
    }
}

/// Silent emitter.
pub struct NoopFeedback;

impl FeedbackPort for NoopFeedback {
    fn play(&self, _polarity: Polarity) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Build the emitter for `mode`.
///
/// Without the `audio` feature an `Audio` request falls back to the bell.
pub fn feedback_for(mode: FeedbackMode) -> Arc<dyn FeedbackPort> {
    match mode {
        FeedbackMode::Off => Arc::new(NoopFeedback),
        FeedbackMode::Bell => Arc::new(TerminalBellFeedback::stdout()),
        #[cfg(feature = "audio")]
        FeedbackMode::Audio => Arc::new(ToneFeedback::new()),
        #[cfg(not(feature = "audio"))]
        FeedbackMode::Audio => {
            log::warn!("built without the `audio` feature, using the terminal bell");
            Arc::new(TerminalBellFeedback::stdout())
        }
    }
}
