//! Float to Q23 fixed-point conversion
//!
//! Q23 is the packed sample format of the output path: a signed value in
//! the low 24 bits of a 32-bit word, encoding a real value scaled by 2^23.
//! Conversion truncates toward zero and saturates at the 24-bit rails; it
//! never wraps.

use wide::f32x4;

/// A Q23 sample: low 24 bits of an `i32`, sign-extended.
pub type Q23 = i32;

/// Largest representable Q23 value (2^23 - 1).
pub const Q23_MAX: Q23 = 0x007f_ffff;

/// Smallest representable Q23 value (-2^23).
pub const Q23_MIN: Q23 = -0x0080_0000;

/// Scale factor between a float sample and its Q23 encoding (2^23).
pub const Q23_ONE: f32 = 8_388_608.0;

/// Convert one float sample to Q23.
///
/// Multiplies by 2^23, truncates toward zero, saturates to
/// `[Q23_MIN, Q23_MAX]`. Truncation rather than round-to-nearest is the
/// historical behavior of this output path and is kept as-is.
#[inline]
pub fn quantize(sample: f32) -> Q23 {
    // `as` both truncates and saturates at the i32 rails.
    ((sample * Q23_ONE) as i32).clamp(Q23_MIN, Q23_MAX)
}

/// Convert a block of float samples to Q23, scalar strategy.
///
/// `src` and `dst` must have the same length. An empty block is a no-op.
pub fn float_to_q23(src: &[f32], dst: &mut [Q23]) {
    assert_eq!(src.len(), dst.len());

    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = quantize(*s);
    }
}

/// Convert a block of float samples to Q23, SIMD strategy.
///
/// Four lanes at a time, with the scalar rule for the 1..=3 sample tail.
/// Saturation is applied in the float domain before the lane conversion
/// (both rails are exactly representable in `f32`), keeping the result
/// bit-identical to [`float_to_q23`] for every finite input at every block
/// size. The two strategies may differ on NaN input, which is outside the
/// caller contract.
pub fn float_to_q23_simd(src: &[f32], dst: &mut [Q23]) {
    assert_eq!(src.len(), dst.len());

    let lo = f32x4::splat(Q23_MIN as f32);
    let hi = f32x4::splat(Q23_MAX as f32);
    let one = f32x4::splat(Q23_ONE);

    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let v = f32x4::from([s[0], s[1], s[2], s[3]]) * one;
        let q = v.max(lo).min(hi).trunc_int();
        d.copy_from_slice(&q.to_array());
    }

    let tail = src.len() - src.len() % 4;
    for (s, d) in src[tail..].iter().zip(dst[tail..].iter_mut()) {
        *d = quantize(*s);
    }
}
