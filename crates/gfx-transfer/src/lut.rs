//! 8-bit sRGB gamma lookup table.
//!
//! Replaces the `powf` calls of [`crate::srgb`] with table reads when
//! converting between 8-bit gamma-encoded channels and linear floats.
//!
//! # Structure
//!
//! - `decode[i]` - linear value of code `i`
//! - `threshold[i]` - linear value of the midpoint between codes `i - 1`
//!   and `i` (`threshold[0] = 0`)
//!
//! Encoding bisects `threshold`, so every code maps back to itself:
//! `encode(decode(i)) == i` for all `i` in 0..=255.
//!
//! ```rust
//! use gfx_transfer::SrgbLut;
//!
//! let lut = SrgbLut::global();
//! let linear = lut.rgb_from_srgb(128);
//! assert!(linear < 128.0 / 255.0);
//! assert_eq!(lut.srgb_from_rgb(linear), 128);
//! ```

use crate::srgb;
use std::sync::OnceLock;

const SIZE: usize = 256;

static GLOBAL: OnceLock<SrgbLut> = OnceLock::new();

/// Forward and inverse sRGB tables for 8-bit channels.
#[derive(Debug, Clone)]
pub struct SrgbLut {
    decode: [f32; SIZE],
    threshold: [f32; SIZE],
}

impl SrgbLut {
    /// Builds both tables from the analytic transfer function.
    pub fn new() -> Self {
        let mut decode = [0.0f32; SIZE];
        let mut threshold = [0.0f32; SIZE];
        for i in 0..SIZE {
            decode[i] = srgb::eotf(i as f32 / 255.0);
            if i > 0 {
                threshold[i] = srgb::eotf((i as f32 - 0.5) / 255.0);
            }
        }
        Self { decode, threshold }
    }

    /// Process-wide table, built on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            tracing::debug!(entries = SIZE, "building sRGB gamma lookup table");
            Self::new()
        })
    }

    /// Linear value of a gamma-encoded code.
    #[inline]
    pub fn rgb_from_srgb(&self, v: u8) -> f32 {
        self.decode[v as usize]
    }

    /// Gamma-encoded code closest to a linear value.
    ///
    /// Values below 0 (and NaN) encode to 0, values above 1 to 255.
    #[inline]
    pub fn srgb_from_rgb(&self, v: f32) -> u8 {
        let mut x = 0usize;
        let mut step = SIZE / 2;
        while step > 0 {
            if v > self.threshold[x + step] {
                x += step;
            }
            step /= 2;
        }
        x as u8
    }

    /// Alpha is stored linearly in both encodings.
    #[inline]
    pub fn alpha_from_srgb(v: u8) -> f32 {
        v as f32 / 255.0
    }

    /// Rounds a linear alpha to 8 bits, clamping to [0, 1].
    #[inline]
    pub fn alpha_to_srgb(v: f32) -> u8 {
        if v <= 0.0 || v.is_nan() {
            0
        } else if v >= 1.0 {
            255
        } else {
            (0.5 + v * 255.0) as u8
        }
    }
}

impl Default for SrgbLut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matches_analytic_curve() {
        let lut = SrgbLut::new();
        for i in 0..=255u8 {
            let direct = srgb::eotf(i as f32 / 255.0);
            assert_abs_diff_eq!(lut.rgb_from_srgb(i), direct, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_every_code_roundtrips() {
        let lut = SrgbLut::new();
        for i in 0..=255u8 {
            assert_eq!(lut.srgb_from_rgb(lut.rgb_from_srgb(i)), i, "code {i}");
        }
    }

    #[test]
    fn test_encode_saturates() {
        let lut = SrgbLut::new();
        assert_eq!(lut.srgb_from_rgb(-1.0), 0);
        assert_eq!(lut.srgb_from_rgb(f32::NAN), 0);
        assert_eq!(lut.srgb_from_rgb(2.0), 255);
    }

    #[test]
    fn test_encode_is_monotonic() {
        let lut = SrgbLut::new();
        let mut prev = 0u8;
        for i in 0..=1000 {
            let code = lut.srgb_from_rgb(i as f32 / 1000.0);
            assert!(code >= prev);
            prev = code;
        }
        assert_eq!(prev, 255);
    }

    #[test]
    fn test_alpha_is_linear() {
        assert_abs_diff_eq!(SrgbLut::alpha_from_srgb(51), 0.2, epsilon = 1e-6);
        assert_eq!(SrgbLut::alpha_to_srgb(0.5), 128);
        assert_eq!(SrgbLut::alpha_to_srgb(-0.1), 0);
        assert_eq!(SrgbLut::alpha_to_srgb(1.5), 255);
    }

    #[test]
    fn test_global_is_shared() {
        let a = SrgbLut::global() as *const SrgbLut;
        let b = SrgbLut::global() as *const SrgbLut;
        assert_eq!(a, b);
    }
}
