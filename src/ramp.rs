//! Zero-cross ramped gain scaling
//!
//! Moves a signal path's gain from its current value toward a target in
//! small steps, permitting a step only where the output touches or crosses
//! zero, so mutes, volume changes and voice steals stay click-free.
//!
//! The scalar implementation is the semantic reference. The SIMD
//! implementation uses an approximate crossing detector; see
//! [`scale_zc_ramp_simd`] for where it diverges.

use wide::{f32x4, CmpGe, CmpLe};

/// Gain step applied at each detected zero crossing.
pub const RAMP_STEP: f32 = 1.0 / 254.0;

/// Snap tolerance: once the remaining distance to the target is below this,
/// the gain snaps exactly to the target.
pub const RAMP_EPSILON: f32 = 1.0 / 127.0;

/// Per-signal-path gain state.
///
/// One instance exists per gain-controlled signal path (voice, output bus).
/// The caller owns it across calls; only the ramp functions mutate it, and
/// the `&mut` borrow enforces the one-writer-per-path rule. A step from
/// just outside [`RAMP_EPSILON`] can land past the target before the snap
/// test pulls it exact; this step-then-snap rule is intentional, inherited
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainState {
    scale: f32,
}

impl GainState {
    /// Creates a gain state starting at `scale`.
    pub const fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// The current scale.
    pub fn value(&self) -> f32 {
        self.scale
    }
}

impl Default for GainState {
    /// Unity gain.
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Two consecutive samples touch or cross zero.
#[inline]
fn zero_cross(a: f32, b: f32) -> bool {
    (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0)
}

#[inline]
fn step_toward(scale: f32, target: f32) -> f32 {
    let stepped = if target > scale {
        scale + RAMP_STEP
    } else {
        scale - RAMP_STEP
    };
    if (target - stepped).abs() < RAMP_EPSILON {
        target
    } else {
        stepped
    }
}

/// Scale a block while ramping the gain toward `target`, scalar strategy.
///
/// Each output sample is `src[i]` times the scale in effect at that sample.
/// After each output sample past the first, if the scale has not reached
/// `target` and the last two output samples touch or cross zero, the scale
/// steps by [`RAMP_STEP`] toward `target` (snapping exactly once within
/// [`RAMP_EPSILON`]). The updated scale is written back to `gain`.
///
/// Crossing opportunities only arise at internal positions: a crossing
/// spanning two calls is never seen, so per-block state hand-off costs at
/// most one step opportunity per boundary. An empty block leaves `gain`
/// unchanged.
pub fn scale_zc_ramp(src: &[f32], gain: &mut GainState, target: f32, dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len());

    let mut scale = gain.scale;

    for i in 0..src.len() {
        dst[i] = src[i] * scale;

        if i >= 1 && scale != target && zero_cross(dst[i - 1], dst[i]) {
            scale = step_toward(scale, target);
        }
    }

    gain.scale = scale;
}

/// Scale a block while ramping the gain toward `target`, SIMD strategy.
///
/// Processes four samples per iteration and is an approximation of
/// [`scale_zc_ramp`], not a bit-exact replacement:
///
/// - at most one step is taken per group of four samples, however many
///   crossings the group contains;
/// - the detector compares the group's four output samples against the raw
///   input samples one position ahead, so it reads the leading edge before
///   scaling;
/// - no crossing test runs after the last full group; the 1..=3 sample tail
///   falls back to the reference rule.
///
/// The ramp therefore converges slightly slower than the reference on some
/// material. Output samples still equal `src[i]` times the scale in effect,
/// and all [`GainState`] invariants hold.
pub fn scale_zc_ramp_simd(src: &[f32], gain: &mut GainState, target: f32, dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len());

    let mut scale = gain.scale;
    let len = src.len();
    let full = len - len % 4;
    let zero = f32x4::ZERO;

    let mut n = 0;
    while n < full {
        let out = f32x4::from([src[n], src[n + 1], src[n + 2], src[n + 3]]) * f32x4::splat(scale);
        dst[n..n + 4].copy_from_slice(&out.to_array());
        n += 4;

        if scale != target && n + 4 <= full {
            let lead = f32x4::from([src[n - 3], src[n - 2], src[n - 1], src[n]]);
            let cross = (out.cmp_ge(zero) & lead.cmp_le(zero))
                | (out.cmp_le(zero) & lead.cmp_ge(zero));
            if cross.any() {
                scale = step_toward(scale, target);
            }
        }
    }

    for i in full..len {
        dst[i] = src[i] * scale;

        if i >= 1 && scale != target && zero_cross(dst[i - 1], dst[i]) {
            scale = step_toward(scale, target);
        }
    }

    gain.scale = scale;
}
