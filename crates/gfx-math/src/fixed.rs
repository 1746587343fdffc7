//! Fixed-point 8-bit blend kernels.
//!
//! Channels are integers in [0, 255] standing for [0.0, 1.0]. Every pixel
//! blend in the renderer reduces to these kernels, and their rounding is
//! exact: repeated partial-opacity composites must not drift or band.
//!
//! # Kernels
//!
//! | Kernel | Meaning |
//! |--------|---------|
//! | [`multiply`] | `round(a * b / 255)` |
//! | [`divid_multiply`] | `a / b` scaled to [0, 255], saturating |
//! | [`lerp`] | `p + (q - p) * a / 255` with drift-free rounding |
//! | [`prelerp`] | `p + q - p * a / 255` (premultiplied lerp) |
//! | [`mult_cover`], [`scale_cover`] | coverage scaling, same as [`multiply`] |
//!
//! All intermediates fit in 32 bits, signed for [`lerp`].
//!
//! ```rust
//! use gfx_math::fixed::{lerp, multiply};
//!
//! assert_eq!(multiply(255, 200), 200);
//! assert_eq!(multiply(128, 128), 64);
//! assert_eq!(lerp(0, 255, 128), 128);
//! ```
//!
//! # Slice Kernels
//!
//! [`multiply_into`], [`lerp_into`] and [`divid_multiply_into`] process
//! whole channel runs. With the `simd` feature they run on 8-wide lanes
//! from [`crate::simd`]; the result is identical either way.

/// Bits of fractional precision.
pub const BASE_SHIFT: u32 = 8;

/// `1 << BASE_SHIFT`.
pub const BASE_SCALE: u32 = 1 << BASE_SHIFT;

/// Largest channel value, standing for 1.0.
pub const BASE_MASK: u32 = BASE_SCALE - 1;

/// Rounding bias, half of [`BASE_SCALE`].
pub const BASE_MSB: u32 = 1 << (BASE_SHIFT - 1);

/// Correctly rounded fixed-point product, `round(a * b / 255)`.
///
/// Computed as `p = a * b + 128; ((p >> 8) + p) >> 8`. Commutative, with
/// `multiply(a, 255) == a` and `multiply(a, 0) == 0`.
#[inline]
pub const fn multiply(a: u8, b: u8) -> u8 {
    let p = a as u32 * b as u32 + BASE_MSB;
    (((p >> BASE_SHIFT) + p) >> BASE_SHIFT) as u8
}

/// Saturating fixed-point division, `a / b` scaled to [0, 255].
///
/// Returns 0 when either operand is 0, 255 when `a >= b`, otherwise
/// `round(a * 255 / b)`.
#[inline]
pub const fn divid_multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else if a >= b {
        BASE_MASK as u8
    } else {
        let (a, b) = (a as u32, b as u32);
        ((a * BASE_MASK + (b >> 1)) / b) as u8
    }
}

/// Interpolates `p` toward `q` by `a / 255`.
///
/// The rounding bias drops by one when `p > q`, which keeps the kernel
/// symmetric: `lerp(x, x, a) == x`, `lerp(p, q, 0) == p` and
/// `lerp(p, q, 255) == q` hold for every input.
#[inline]
pub const fn lerp(p: u8, q: u8, a: u8) -> u8 {
    let t = (q as i32 - p as i32) * a as i32 + BASE_MSB as i32 - (p > q) as i32;
    (p as i32 + (((t >> BASE_SHIFT) + t) >> BASE_SHIFT)) as u8
}

/// Premultiplied interpolation, `p + q - multiply(p, a)`.
///
/// `q` is expected to be already scaled by `a`. The sum wraps to 8 bits.
#[inline]
pub const fn prelerp(p: u8, q: u8, a: u8) -> u8 {
    p.wrapping_add(q).wrapping_sub(multiply(p, a))
}

/// Scales a channel by an antialiasing coverage value.
#[inline]
pub const fn mult_cover(a: u8, cover: u8) -> u8 {
    multiply(a, cover)
}

/// Scales a coverage value by a channel. Argument order mirrors
/// [`mult_cover`].
#[inline]
pub const fn scale_cover(cover: u8, value: u8) -> u8 {
    multiply(value, cover)
}

/// `value >> digits`.
#[inline]
pub const fn downshift(value: u32, digits: u32) -> u32 {
    value >> digits
}

/// Drops the fractional bits of a widened product, `value >> 8`.
#[inline]
pub const fn downscale(value: u32) -> u32 {
    value >> BASE_SHIFT
}

// ============================================================================
// Slice kernels
// ============================================================================

/// Writes `multiply(a[i], b[i])` into `out[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn multiply_into(a: &[u8], b: &[u8], out: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    #[cfg(feature = "simd")]
    crate::simd::multiply_slice(a, b, out);
    #[cfg(not(feature = "simd"))]
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = multiply(x, y);
    }
}

/// Writes `divid_multiply(a[i], b[i])` into `out[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn divid_multiply_into(a: &[u8], b: &[u8], out: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    #[cfg(feature = "simd")]
    crate::simd::divid_multiply_slice(a, b, out);
    #[cfg(not(feature = "simd"))]
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = divid_multiply(x, y);
    }
}

/// Writes `lerp(p[i], q[i], alpha)` into `out[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn lerp_into(p: &[u8], q: &[u8], alpha: u8, out: &mut [u8]) {
    assert_eq!(p.len(), q.len());
    assert_eq!(p.len(), out.len());
    #[cfg(feature = "simd")]
    crate::simd::lerp_slice(p, q, alpha, out);
    #[cfg(not(feature = "simd"))]
    for ((o, &x), &y) in out.iter_mut().zip(p).zip(q) {
        *o = lerp(x, y, alpha);
    }
}
