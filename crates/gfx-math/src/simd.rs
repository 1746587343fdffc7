//! SIMD fixed-point kernels.
//!
//! 8-lane versions of the [`crate::fixed`] kernels using the `wide` crate
//! for portable SIMD on stable Rust. Channels are widened to `i32` lanes so
//! the intermediates are the same as the scalar formulas and every result
//! is bit-identical to them.
//!
//! # Features
//!
//! - `*_x8` - one 8-channel block
//! - `*_slice` - arbitrary-length runs, 8 at a time with a scalar tail
//!
//! ```rust
//! use gfx_math::{fixed, simd};
//!
//! let a = [0, 32, 64, 96, 128, 160, 192, 255];
//! let b = [255; 8];
//! assert_eq!(simd::multiply_x8(&a, &b), a);
//! assert_eq!(simd::lerp_x8(&a, &b, 255), b);
//! assert_eq!(simd::multiply_x8(&a, &a)[4], fixed::multiply(128, 128));
//! ```

use crate::fixed;
use wide::{f32x8, i32x8};

const LANES: usize = 8;
const SHIFT: i32 = fixed::BASE_SHIFT as i32;
const SIGN: i32 = 31;

#[inline]
fn widen(v: &[u8]) -> i32x8 {
    let mut lanes = [0i32; LANES];
    for (d, &s) in lanes.iter_mut().zip(v) {
        *d = s as i32;
    }
    i32x8::from(lanes)
}

#[inline]
fn narrow(v: i32x8, out: &mut [u8]) {
    for (o, x) in out.iter_mut().zip(v.to_array()) {
        *o = x as u8;
    }
}

#[inline]
fn multiply_lanes(a: i32x8, b: i32x8) -> i32x8 {
    let p = a * b + i32x8::splat(fixed::BASE_MSB as i32);
    ((p >> SHIFT) + p) >> SHIFT
}

#[inline]
fn lerp_lanes(p: i32x8, q: i32x8, a: i32x8) -> i32x8 {
    let d = q - p;
    // `d >> 31` is -1 exactly when p > q, the scalar kernel's bias.
    let t = d * a + i32x8::splat(fixed::BASE_MSB as i32) + (d >> SIGN);
    p + (((t >> SHIFT) + t) >> SHIFT)
}

// Up to eight lanes; the quotient is exact in f32 because numerators
// stay below 2^16.
#[inline]
fn divid_multiply_lanes(a: &[u8], b: &[u8], out: &mut [u8]) {
    let mut num = [0.0f32; LANES];
    let mut den = [1.0f32; LANES];
    let mut live = [0.0f32; LANES];
    for i in 0..a.len().min(LANES) {
        let (x, y) = (a[i] as u32, b[i] as u32);
        num[i] = (x * fixed::BASE_MASK + (y >> 1)) as f32;
        den[i] = y.max(1) as f32;
        live[i] = if x != 0 && y != 0 { 1.0 } else { 0.0 };
    }
    let q = (f32x8::from(num) / f32x8::from(den)).min(f32x8::splat(fixed::BASE_MASK as f32))
        * f32x8::from(live);
    for (o, v) in out.iter_mut().zip(q.to_array()) {
        *o = v as u8;
    }
}

/// [`fixed::multiply`] on 8 channels.
#[inline]
pub fn multiply_x8(a: &[u8; 8], b: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    narrow(multiply_lanes(widen(a), widen(b)), &mut out);
    out
}

/// [`fixed::lerp`] on 8 channels with a shared weight.
#[inline]
pub fn lerp_x8(p: &[u8; 8], q: &[u8; 8], alpha: u8) -> [u8; 8] {
    let mut out = [0u8; 8];
    narrow(lerp_lanes(widen(p), widen(q), i32x8::splat(alpha as i32)), &mut out);
    out
}

/// [`fixed::divid_multiply`] on 8 channels.
#[inline]
pub fn divid_multiply_x8(a: &[u8; 8], b: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    divid_multiply_lanes(a, b, &mut out);
    out
}

/// Batch [`fixed::multiply`]. Slices are walked up to the shortest length.
pub fn multiply_slice(a: &[u8], b: &[u8], out: &mut [u8]) {
    let n = a.len().min(b.len()).min(out.len());
    let body = n - n % LANES;
    for i in (0..body).step_by(LANES) {
        let r = multiply_lanes(widen(&a[i..i + LANES]), widen(&b[i..i + LANES]));
        narrow(r, &mut out[i..i + LANES]);
    }
    for i in body..n {
        out[i] = fixed::multiply(a[i], b[i]);
    }
}

/// Batch [`fixed::lerp`] with a shared weight.
pub fn lerp_slice(p: &[u8], q: &[u8], alpha: u8, out: &mut [u8]) {
    let n = p.len().min(q.len()).min(out.len());
    let body = n - n % LANES;
    let a = i32x8::splat(alpha as i32);
    for i in (0..body).step_by(LANES) {
        let r = lerp_lanes(widen(&p[i..i + LANES]), widen(&q[i..i + LANES]), a);
        narrow(r, &mut out[i..i + LANES]);
    }
    for i in body..n {
        out[i] = fixed::lerp(p[i], q[i], alpha);
    }
}

/// Batch [`fixed::divid_multiply`].
pub fn divid_multiply_slice(a: &[u8], b: &[u8], out: &mut [u8]) {
    let n = a.len().min(b.len()).min(out.len());
    let body = n - n % LANES;
    for i in (0..body).step_by(LANES) {
        divid_multiply_lanes(&a[i..i + LANES], &b[i..i + LANES], &mut out[i..i + LANES]);
    }
    for i in body..n {
        out[i] = fixed::divid_multiply(a[i], b[i]);
    }
}
