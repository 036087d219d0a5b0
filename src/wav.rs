//! WAV and packed-Q23 file I/O for the command line front end.

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use blockdsp::Q23;

/// Read a mono WAV file as float samples, returning them with the sample
/// rate. Integer formats are rescaled to `[-1.0, 1.0)`.
pub fn read_mono(path: &Path) -> Result<(Vec<f32>, u32)> {
    let mut reader = WavReader::open(path)
        .map_err(|e| anyhow!("Failed to open WAV file '{}': {}", path.display(), e))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(anyhow!(
            "'{}' has {} channels, expected mono",
            path.display(),
            spec.channels
        ));
    }

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()?
        }
    };

    Ok((samples, spec.sample_rate))
}

/// Write float samples as a 32-bit float WAV file.
///
/// `channels` is 1 for mono data or 2 for interleaved stereo.
pub fn write_float(path: &Path, samples: &[f32], sample_rate: u32, channels: u16) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| anyhow!("Failed to create WAV file '{}': {}", path.display(), e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| anyhow!("Failed to write WAV sample: {}", e))?;
    }

    writer
        .finalize()
        .map_err(|e| anyhow!("Failed to finalize '{}': {}", path.display(), e))?;

    Ok(())
}

/// Write Q23 samples as packed little-endian 32-bit words, 24 significant
/// bits per word, no framing.
pub fn write_q23(path: &Path, samples: &[Q23]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .map_err(|e| anyhow!("Failed to create '{}': {}", path.display(), e))?;

    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    file.write_all(&bytes)?;
    file.sync_all()?;

    Ok(())
}
