//! Channel interleaving
//!
//! Combines two equal-length channel blocks into one packed buffer:
//! element `2n` comes from channel 1 sample `n`, element `2n+1` from
//! channel 2 sample `n`. Variants apply a fixed scale (no ramping) and
//! optionally quantize to Q23 on the way out. All of them are stateless.

use wide::f32x4;

use crate::q23::{quantize, Q23, Q23_MAX, Q23_MIN, Q23_ONE};

/// Interleave two blocks, scalar strategy.
///
/// `dst` must be exactly twice the channel length.
pub fn zip(src1: &[f32], src2: &[f32], dst: &mut [f32]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    for (n, (a, b)) in src1.iter().zip(src2.iter()).enumerate() {
        dst[2 * n] = *a;
        dst[2 * n + 1] = *b;
    }
}

/// Interleave two blocks, SIMD strategy. Bit-identical to [`zip`].
pub fn zip_simd(src1: &[f32], src2: &[f32], dst: &mut [f32]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    let mut n = 0;
    let full = src1.len() - src1.len() % 4;

    while n < full {
        let a = f32x4::from([src1[n], src1[n + 1], src1[n + 2], src1[n + 3]]).to_array();
        let b = f32x4::from([src2[n], src2[n + 1], src2[n + 2], src2[n + 3]]).to_array();
        for i in 0..4 {
            dst[2 * (n + i)] = a[i];
            dst[2 * (n + i) + 1] = b[i];
        }
        n += 4;
    }

    while n < src1.len() {
        dst[2 * n] = src1[n];
        dst[2 * n + 1] = src2[n];
        n += 1;
    }
}

/// Scale two blocks by a fixed scalar and interleave, scalar strategy.
pub fn scale_zip(src1: &[f32], src2: &[f32], scale: f32, dst: &mut [f32]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    for (n, (a, b)) in src1.iter().zip(src2.iter()).enumerate() {
        dst[2 * n] = *a * scale;
        dst[2 * n + 1] = *b * scale;
    }
}

/// Scale two blocks by a fixed scalar and interleave, SIMD strategy.
/// Bit-identical to [`scale_zip`].
pub fn scale_zip_simd(src1: &[f32], src2: &[f32], scale: f32, dst: &mut [f32]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    let k = f32x4::splat(scale);
    let mut n = 0;
    let full = src1.len() - src1.len() % 4;

    while n < full {
        let a = (f32x4::from([src1[n], src1[n + 1], src1[n + 2], src1[n + 3]]) * k).to_array();
        let b = (f32x4::from([src2[n], src2[n + 1], src2[n + 2], src2[n + 3]]) * k).to_array();
        for i in 0..4 {
            dst[2 * (n + i)] = a[i];
            dst[2 * (n + i) + 1] = b[i];
        }
        n += 4;
    }

    while n < src1.len() {
        dst[2 * n] = src1[n] * scale;
        dst[2 * n + 1] = src2[n] * scale;
        n += 1;
    }
}

/// Scale two blocks, interleave, and quantize to Q23, scalar strategy.
///
/// Each element saturates per the rule in [`crate::q23`].
pub fn scale_zip_to_q23(src1: &[f32], src2: &[f32], scale: f32, dst: &mut [Q23]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    for (n, (a, b)) in src1.iter().zip(src2.iter()).enumerate() {
        dst[2 * n] = quantize(*a * scale);
        dst[2 * n + 1] = quantize(*b * scale);
    }
}

/// Scale two blocks, interleave, and quantize to Q23, SIMD strategy.
/// Bit-identical to [`scale_zip_to_q23`] for finite inputs.
pub fn scale_zip_to_q23_simd(src1: &[f32], src2: &[f32], scale: f32, dst: &mut [Q23]) {
    assert_eq!(src1.len(), src2.len());
    assert_eq!(dst.len(), src1.len() * 2);

    let k = f32x4::splat(scale);
    let one = f32x4::splat(Q23_ONE);
    let lo = f32x4::splat(Q23_MIN as f32);
    let hi = f32x4::splat(Q23_MAX as f32);

    let mut n = 0;
    let full = src1.len() - src1.len() % 4;

    while n < full {
        let a = f32x4::from([src1[n], src1[n + 1], src1[n + 2], src1[n + 3]]) * k;
        let b = f32x4::from([src2[n], src2[n + 1], src2[n + 2], src2[n + 3]]) * k;
        let qa = (a * one).max(lo).min(hi).trunc_int().to_array();
        let qb = (b * one).max(lo).min(hi).trunc_int().to_array();
        for i in 0..4 {
            dst[2 * (n + i)] = qa[i];
            dst[2 * (n + i) + 1] = qb[i];
        }
        n += 4;
    }

    while n < src1.len() {
        dst[2 * n] = quantize(src1[n] * scale);
        dst[2 * n + 1] = quantize(src2[n] * scale);
        n += 1;
    }
}
