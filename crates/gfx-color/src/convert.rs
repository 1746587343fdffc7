//! Colorspace-dispatched channel conversion.
//!
//! [`ChannelCodec`] is implemented for each colorspace marker and decides
//! how an 8-bit channel maps to a linear float:
//!
//! | Marker | Encode (float -> u8) | Decode (u8 -> float) |
//! |--------|----------------------|----------------------|
//! | [`Linear`] | `round(v * 255)`, narrowed to 8 bits | `v / 255` |
//! | [`StandardRgb`] | inverse sRGB table | forward sRGB table |
//!
//! Alpha is linear in both encodings. The StandardRgb alpha encoder
//! clamps to [0, 1]; the Linear one narrows like its color channels.
//!
//! ```rust
//! use gfx_color::{ChannelCodec, Linear, StandardRgb};
//!
//! assert_eq!(Linear::encode(0.5), 128);
//! assert!(StandardRgb::decode(128) < 128.0 / 255.0);
//! ```

use gfx_core::{Colorspace, Linear, StandardRgb};
use gfx_transfer::SrgbLut;

/// Largest channel value as a float.
pub const COLOR_CONVERT: f32 = 255.0;

/// Rounds `v * 255` half up and keeps the low 8 bits.
///
/// Negative inputs saturate to 0 before narrowing.
#[inline]
pub fn uround_u8(v: f32) -> u8 {
    (v * COLOR_CONVERT + 0.5) as u32 as u8
}

/// Float <-> 8-bit channel mapping selected by a colorspace marker.
pub trait ChannelCodec: Colorspace {
    /// Encodes a linear color channel.
    fn encode(v: f32) -> u8;

    /// Decodes a color channel to linear.
    fn decode(v: u8) -> f32;

    /// Encodes a linear alpha value.
    fn encode_alpha(v: f32) -> u8;

    /// Decodes an alpha value.
    #[inline]
    fn decode_alpha(v: u8) -> f32 {
        v as f32 / COLOR_CONVERT
    }
}

impl ChannelCodec for Linear {
    #[inline]
    fn encode(v: f32) -> u8 {
        uround_u8(v)
    }

    #[inline]
    fn decode(v: u8) -> f32 {
        v as f32 / COLOR_CONVERT
    }

    #[inline]
    fn encode_alpha(v: f32) -> u8 {
        uround_u8(v)
    }
}

impl ChannelCodec for StandardRgb {
    #[inline]
    fn encode(v: f32) -> u8 {
        SrgbLut::global().srgb_from_rgb(v)
    }

    #[inline]
    fn decode(v: u8) -> f32 {
        SrgbLut::global().rgb_from_srgb(v)
    }

    #[inline]
    fn encode_alpha(v: f32) -> u8 {
        SrgbLut::alpha_to_srgb(v)
    }

    #[inline]
    fn decode_alpha(v: u8) -> f32 {
        SrgbLut::alpha_from_srgb(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_scaling() {
        assert_eq!(Linear::encode(0.0), 0);
        assert_eq!(Linear::encode(0.5), 128);
        assert_eq!(Linear::encode(1.0), 255);
        assert_eq!(Linear::encode(-3.0), 0);
        for v in 0..=255u8 {
            assert_eq!(Linear::encode(Linear::decode(v)), v);
        }
    }

    #[test]
    fn test_linear_narrows_out_of_range() {
        // 1.5 * 255 + 0.5 = 383, low byte 127
        assert_eq!(Linear::encode(1.5), 127);
    }

    #[test]
    fn test_srgb_is_nonlinear() {
        let mid = StandardRgb::decode(128);
        assert!(mid < 128.0 / 255.0);
        assert_abs_diff_eq!(mid, 0.2158, epsilon = 1e-3);
        assert_eq!(StandardRgb::encode(mid), 128);
        assert_eq!(StandardRgb::encode(0.5), 188);
    }

    #[test]
    fn test_alpha_stays_linear() {
        assert_eq!(StandardRgb::encode_alpha(0.5), 128);
        assert_abs_diff_eq!(StandardRgb::decode_alpha(51), 0.2, epsilon = 1e-6);
        assert_eq!(StandardRgb::encode_alpha(7.0), 255);
    }
}
