use std::io::Write;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use qc_core::ports::FeedbackPort;
use qc_core::Polarity;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell: once for a positive outcome, twice for a negative one.
///
/// Terminals do not expose pitch, so the two tones are told apart by count.
pub struct TerminalBellFeedback {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalBellFeedback {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn rings(polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => 1,
            Polarity::Negative => 2,
        }
    }
}

impl FeedbackPort for TerminalBellFeedback {
    fn play(&self, polarity: Polarity) -> anyhow::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("bell writer lock poisoned"))?;
        out.write_all(&BEL.repeat(Self::rings(polarity)))
            .and_then(|_| out.flush())
            .context("ring terminal bell")?;
        log::trace!("bell rung for {polarity:?}");
        Ok(())
    }
}
