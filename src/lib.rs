//! Real-time block DSP kernels for an embedded FM synthesizer's output path.
//!
//! Three tightly coupled numeric routines that run inside the audio
//! processing callback, once per fixed-size sample block:
//!
//! - [`q23`]: saturating float to Q23 fixed-point conversion;
//! - [`ramp`]: click-free gain ramping, stepping only at zero crossings,
//!   with caller-owned per-signal-path [`GainState`];
//! - [`zip`]: stateless scale-and-interleave of two channel blocks, with
//!   a quantizing variant.
//!
//! Each operation exists as a scalar reference and a SIMD fast path behind
//! the [`Kernel`] trait ([`kernel`]). All of them are pure functions over
//! caller-owned buffers: no allocation, no locking, no I/O, bounded time
//! proportional to the block size, any block size including zero.

#![warn(missing_docs)]

pub mod kernel;
pub mod q23;
pub mod ramp;
pub mod zip;

pub use kernel::{default_kernel, Kernel, ScalarKernel, SimdKernel};
pub use q23::{Q23, Q23_MAX, Q23_MIN};
pub use ramp::{GainState, RAMP_EPSILON, RAMP_STEP};
