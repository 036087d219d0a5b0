//! Strategy selection for the block kernels
//!
//! One call surface over two interchangeable implementations: the scalar
//! reference and the SIMD fast path. Both always compile, so the same test
//! suite runs and compares them; the build default is picked by the `simd`
//! cargo feature and callers can still choose explicitly (the CLI's
//! `--scalar` flag does).

use crate::q23::Q23;
use crate::ramp::GainState;
use crate::{q23, ramp, zip};

/// The block-kernel call surface.
///
/// All operations are synchronous, non-allocating and run in time
/// proportional to the block size; buffer length mismatches are caller
/// contract violations and panic.
pub trait Kernel: Sync {
    /// Convert a block of floats to Q23 (see [`q23::float_to_q23`]).
    fn float_to_q23(&self, src: &[f32], dst: &mut [Q23]);

    /// Scale a block while ramping the gain at zero crossings
    /// (see [`ramp::scale_zc_ramp`]).
    fn scale_zc_ramp(&self, src: &[f32], gain: &mut GainState, target: f32, dst: &mut [f32]);

    /// Interleave two blocks (see [`zip::zip`]).
    fn zip(&self, src1: &[f32], src2: &[f32], dst: &mut [f32]);

    /// Scale two blocks by a fixed scalar and interleave
    /// (see [`zip::scale_zip`]).
    fn scale_zip(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [f32]);

    /// Scale, interleave and quantize to Q23
    /// (see [`zip::scale_zip_to_q23`]).
    fn scale_zip_to_q23(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [Q23]);
}

/// The scalar reference implementation.
pub struct ScalarKernel;

/// The SIMD fast path. Bit-identical to [`ScalarKernel`] for the quantizer
/// and zip operations on finite input; the ramp's crossing detector is an
/// approximation (see [`ramp::scale_zc_ramp_simd`]).
pub struct SimdKernel;

impl Kernel for ScalarKernel {
    fn float_to_q23(&self, src: &[f32], dst: &mut [Q23]) {
        q23::float_to_q23(src, dst);
    }

    fn scale_zc_ramp(&self, src: &[f32], gain: &mut GainState, target: f32, dst: &mut [f32]) {
        ramp::scale_zc_ramp(src, gain, target, dst);
    }

    fn zip(&self, src1: &[f32], src2: &[f32], dst: &mut [f32]) {
        zip::zip(src1, src2, dst);
    }

    fn scale_zip(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [f32]) {
        zip::scale_zip(src1, src2, scale, dst);
    }

    fn scale_zip_to_q23(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [Q23]) {
        zip::scale_zip_to_q23(src1, src2, scale, dst);
    }
}

impl Kernel for SimdKernel {
    fn float_to_q23(&self, src: &[f32], dst: &mut [Q23]) {
        q23::float_to_q23_simd(src, dst);
    }

    fn scale_zc_ramp(&self, src: &[f32], gain: &mut GainState, target: f32, dst: &mut [f32]) {
        ramp::scale_zc_ramp_simd(src, gain, target, dst);
    }

    fn zip(&self, src1: &[f32], src2: &[f32], dst: &mut [f32]) {
        zip::zip_simd(src1, src2, dst);
    }

    fn scale_zip(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [f32]) {
        zip::scale_zip_simd(src1, src2, scale, dst);
    }

    fn scale_zip_to_q23(&self, src1: &[f32], src2: &[f32], scale: f32, dst: &mut [Q23]) {
        zip::scale_zip_to_q23_simd(src1, src2, scale, dst);
    }
}

/// The scalar strategy instance.
pub static SCALAR: ScalarKernel = ScalarKernel;

/// The SIMD strategy instance.
pub static SIMD: SimdKernel = SimdKernel;

/// The build-selected default strategy: SIMD when the `simd` feature is
/// enabled (the default), the scalar reference otherwise.
pub fn default_kernel() -> &'static dyn Kernel {
    if cfg!(feature = "simd") {
        &SIMD
    } else {
        &SCALAR
    }
}
