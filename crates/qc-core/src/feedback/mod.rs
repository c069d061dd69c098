//! Audible feedback tones.
//!
//! The tone shapes live here so every emitter (terminal bell, audio device)
//! agrees on what "positive" and "negative" sound like.

use std::f32::consts::TAU;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome polarity used to pick a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

/// A sine tone with exponential amplitude decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl ToneSpec {
    pub const POSITIVE: ToneSpec = ToneSpec {
        frequency_hz: 800.0,
        duration: Duration::from_millis(300),
        start_gain: 0.3,
        end_gain: 0.01,
    };

    pub const NEGATIVE: ToneSpec = ToneSpec {
        frequency_hz: 200.0,
        duration: Duration::from_millis(500),
        start_gain: 0.3,
        end_gain: 0.01,
    };

    pub fn for_polarity(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Positive => Self::POSITIVE,
            Polarity::Negative => Self::NEGATIVE,
        }
    }

    /// Gain at `elapsed` seconds into the tone.
    pub fn gain_at(&self, elapsed: f32) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        let progress = (elapsed / total).clamp(0.0, 1.0);
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }

    /// Render mono samples at `sample_rate`.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate as f32;
        let count = (self.duration.as_secs_f32() * rate).round() as usize;

        (0..count)
            .map(|i| {
                let t = i as f32 / rate;
                (TAU * self.frequency_hz * t).sin() * self.gain_at(t)
            })
            .collect()
    }
}
