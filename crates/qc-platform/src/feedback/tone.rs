//! Audio output using cpal.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};
use qc_core::ports::FeedbackPort;
use qc_core::{Polarity, ToneSpec};

/// Extra time the stream stays open after the last sample so the device
/// buffer drains.
const DRAIN: Duration = Duration::from_millis(50);

/// Plays the feedback tones on the default output device.
///
/// Each tone gets its own short-lived thread and stream; `play` returns as
/// soon as the thread is spawned. Device errors surface in the log only.
#[derive(Default)]
pub struct ToneFeedback;

impl ToneFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackPort for ToneFeedback {
    fn play(&self, polarity: Polarity) -> anyhow::Result<()> {
        let tone = ToneSpec::for_polarity(polarity);
        std::thread::Builder::new()
            .name("qc-tone".into())
            .spawn(move || {
                if let Err(err) = play_blocking(tone) {
                    log::warn!("feedback tone failed: {err:#}");
                }
            })
            .context("spawn tone thread")?;
        Ok(())
    }
}

fn play_blocking(tone: ToneSpec) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no default audio output device"))?;
    let supported = device
        .default_output_config()
        .context("failed to get default output config")?;

    let sample_format = supported.sample_format();
    let config = supported.config();
    let samples = tone.render(config.sample_rate.0);

    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, samples)?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config, samples)?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config, samples)?,
        other => bail!("unsupported sample format: {other:?}"),
    };

    stream.play().context("failed to start stream")?;
    std::thread::sleep(tone.duration + DRAIN);
    Ok(())
}

/// Mono samples duplicated to every channel, silence once they run out.
fn build_stream<T>(device: &Device, config: &StreamConfig, samples: Vec<f32>) -> Result<Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = usize::from(config.channels);
    let mut cursor = 0usize;

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let sample = samples.get(cursor).copied().unwrap_or(0.0);
                    cursor += 1;
                    for out in frame.iter_mut() {
                        *out = T::from_sample(sample.clamp(-1.0, 1.0));
                    }
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )
        .context("failed to build stream")
}
