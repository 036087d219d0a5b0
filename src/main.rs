use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use blockdsp::{default_kernel, GainState, Kernel, Q23};

mod wav;

/// Run the block DSP kernels over WAV files: Q23 conversion, zero-cross
/// gain ramping and channel interleaving
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Force the scalar reference strategy instead of the SIMD fast path
    #[arg(long, global = true)]
    scalar: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a mono WAV file to packed Q23 words
    Quantize {
        /// Input mono WAV file
        input: PathBuf,

        /// Output packed Q23 file (little-endian 32-bit words)
        output: PathBuf,
    },
    /// Apply a zero-cross gain ramp to a mono WAV file
    Ramp {
        /// Input mono WAV file
        input: PathBuf,

        /// Output mono WAV file (32-bit float)
        output: PathBuf,

        /// Target gain to ramp toward
        #[arg(long)]
        target: f32,

        /// Gain at the start of the file
        #[arg(long, default_value_t = 1.0)]
        start: f32,

        /// Samples per processing block
        #[arg(long, default_value_t = 64)]
        block_size: usize,
    },
    /// Interleave two mono WAV files into one packed stream
    Interleave {
        /// Left / channel 1 mono WAV file
        left: PathBuf,

        /// Right / channel 2 mono WAV file
        right: PathBuf,

        /// Output file: stereo float WAV, or packed Q23 words with --q23
        output: PathBuf,

        /// Fixed gain applied to both channels (no ramping)
        #[arg(long, default_value_t = 1.0)]
        gain: f32,

        /// Quantize the interleaved stream to packed Q23 words
        #[arg(long)]
        q23: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let kernel: &dyn Kernel = if args.scalar {
        &blockdsp::kernel::SCALAR
    } else {
        default_kernel()
    };
    debug!("strategy: {}", if args.scalar { "scalar" } else { "default" });

    match args.command {
        Commands::Quantize { input, output } => {
            let (samples, sample_rate) = wav::read_mono(&input)?;
            info!("{}: {} samples at {} Hz", input.display(), samples.len(), sample_rate);

            let mut packed: Vec<Q23> = vec![0; samples.len()];
            kernel.float_to_q23(&samples, &mut packed);

            wav::write_q23(&output, &packed)?;
        }
        Commands::Ramp {
            input,
            output,
            target,
            start,
            block_size,
        } => {
            if block_size == 0 {
                return Err(anyhow!("block size must be at least 1"));
            }

            let (samples, sample_rate) = wav::read_mono(&input)?;
            info!("{}: {} samples at {} Hz", input.display(), samples.len(), sample_rate);

            // One gain state for the whole file, carried across every block
            // boundary exactly as a live signal path would carry it.
            let mut gain = GainState::new(start);
            let mut out = vec![0.0f32; samples.len()];

            for (src, dst) in samples
                .chunks(block_size)
                .zip(out.chunks_mut(block_size))
            {
                kernel.scale_zc_ramp(src, &mut gain, target, dst);
            }

            info!("final gain {} (target {})", gain.value(), target);
            wav::write_float(&output, &out, sample_rate, 1)?;
        }
        Commands::Interleave {
            left,
            right,
            output,
            gain,
            q23,
        } => {
            let (l, rate_l) = wav::read_mono(&left)?;
            let (r, rate_r) = wav::read_mono(&right)?;

            if rate_l != rate_r {
                return Err(anyhow!(
                    "sample rate mismatch: {} Hz vs {} Hz",
                    rate_l,
                    rate_r
                ));
            }
            if l.len() != r.len() {
                return Err(anyhow!(
                    "length mismatch: {} samples vs {} samples",
                    l.len(),
                    r.len()
                ));
            }

            if q23 {
                let mut packed: Vec<Q23> = vec![0; l.len() * 2];
                kernel.scale_zip_to_q23(&l, &r, gain, &mut packed);
                wav::write_q23(&output, &packed)?;
            } else {
                let mut interleaved = vec![0.0f32; l.len() * 2];
                if gain == 1.0 {
                    kernel.zip(&l, &r, &mut interleaved);
                } else {
                    kernel.scale_zip(&l, &r, gain, &mut interleaved);
                }
                wav::write_float(&output, &interleaved, rate_l, 2)?;
            }
        }
    }

    Ok(())
}
