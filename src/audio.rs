//! Microphone capture
//!
//! Records the default input device for a fixed window and encodes the
//! samples as 16-bit PCM WAV. Blocking; run it off the UI thread.

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};

use crate::error::{DocdeskError, Result};

/// Record `window` of audio from the default microphone as WAV bytes.
pub fn record_wav(window: Duration) -> Result<Vec<u8>> {
    let host = cpal::default_host();
    let device = host.default_input_device().ok_or(DocdeskError::NoInputDevice)?;
    let supported = device
        .default_input_config()
        .map_err(|e| DocdeskError::Audio(e.to_string()))?;

    let channels = supported.channels();
    let sample_rate = supported.sample_rate().0;
    tracing::info!(
        "Recording {:?} from {} ({} ch @ {} Hz)",
        window,
        device.name().unwrap_or_else(|_| "unknown device".into()),
        channels,
        sample_rate
    );

    let samples = Arc::new(Mutex::new(Vec::<i16>::new()));
    let config = supported.config();
    let stream = match supported.sample_format() {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&samples))?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&samples))?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&samples))?,
        SampleFormat::I32 => build_stream::<i32>(&device, &config, Arc::clone(&samples))?,
        other => {
            return Err(DocdeskError::Audio(format!("unsupported sample format {:?}", other)));
        }
    };

    stream.play().map_err(|e| DocdeskError::Audio(e.to_string()))?;
    std::thread::sleep(window);
    drop(stream);

    let samples = samples
        .lock()
        .map_err(|_| DocdeskError::Audio("sample buffer poisoned".into()))?;
    tracing::info!("Captured {} samples", samples.len());
    encode_wav(&samples, channels, sample_rate)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    samples: Arc<Mutex<Vec<i16>>>,
) -> Result<cpal::Stream>
where
    T: SizedSample,
    i16: FromSample<T>,
{
    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                if let Ok(mut buf) = samples.lock() {
                    buf.extend(data.iter().map(|s| s.to_sample::<i16>()));
                }
            },
            |e| tracing::error!("Input stream error: {}", e),
            None,
        )
        .map_err(|e| DocdeskError::Audio(e.to_string()))
}

/// Encode interleaved samples as a WAV file. An empty buffer is an
/// error; the backend would only get a header.
pub fn encode_wav(samples: &[i16], channels: u16, sample_rate: u32) -> Result<Vec<u8>> {
    if samples.is_empty() {
        return Err(DocdeskError::EmptyRecording);
    }

    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &s in samples {
            writer.write_sample(s)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}
