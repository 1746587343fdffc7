//! Depth-selected pixel construction, mixing and conversion.
//!
//! These functions are the renderer's entry points for building device
//! pixels. They operate on [`ColorType`], the record picked by the active
//! `depth-*` feature, so callers never name a concrete format.
//!
//! ```rust
//! use gfx_color::utility::{color16_to_32, color_to_16};
//! use gfx_core::Color32;
//!
//! // 16-bit downgrade truncates, it does not round
//! let packed = color_to_16(Color32::rgb(0xFF, 0xFF, 0xFF));
//! assert_eq!(packed, 0xFFFF);
//! let back = Color32::from_full(color16_to_32(gfx_core::Color16::from_full(packed), 0xFF));
//! assert_eq!(back.red, 0xF8);
//! ```

use gfx_core::{Color16, Color24, Color32, ColorType, OPA_OPAQUE, PackedPixel};
use gfx_math::fixed::lerp;

/// Per-channel fixed-point blend of two pixels of the same record.
pub trait BlendPixel: PackedPixel {
    /// Moves `background` toward `foreground` by `weight / 255`.
    ///
    /// `weight == 255` gives `foreground`, `weight == 0` gives
    /// `background`.
    fn mix(foreground: Self, background: Self, weight: u8) -> Self;
}

impl BlendPixel for Color16 {
    /// Blends the native 5/6/5-bit channels, so no precision is gained or
    /// lost by widening.
    fn mix(foreground: Self, background: Self, weight: u8) -> Self {
        Self::new(
            lerp(background.red(), foreground.red(), weight),
            lerp(background.green(), foreground.green(), weight),
            lerp(background.blue(), foreground.blue(), weight),
        )
    }
}

impl BlendPixel for Color24 {
    fn mix(foreground: Self, background: Self, weight: u8) -> Self {
        Self::new(
            lerp(background.red, foreground.red, weight),
            lerp(background.green, foreground.green, weight),
            lerp(background.blue, foreground.blue, weight),
        )
    }
}

impl BlendPixel for Color32 {
    fn mix(foreground: Self, background: Self, weight: u8) -> Self {
        Self::new(
            lerp(background.red, foreground.red, weight),
            lerp(background.green, foreground.green, weight),
            lerp(background.blue, foreground.blue, weight),
            lerp(background.alpha, foreground.alpha, weight),
        )
    }
}

/// Mixes `c1` over `c2` with an 8-bit weight; 255 selects `c1`.
#[inline]
pub fn mix_color(c1: ColorType, c2: ColorType, mix: u8) -> ColorType {
    ColorType::mix(c1, c2, mix)
}

/// Opaque pixel from byte channels.
#[inline]
pub fn color_from_rgb(red: u8, green: u8, blue: u8) -> ColorType {
    ColorType::from_rgba8(red, green, blue, OPA_OPAQUE)
}

/// Pixel from byte channels. 16-bit builds drop `alpha`.
#[inline]
pub fn color_from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> ColorType {
    ColorType::from_rgba8(red, green, blue, alpha)
}

/// Canonical packed 32-bit value of an active-depth pixel.
///
/// Formats without alpha come out opaque.
#[inline]
pub fn color_to_32(color: ColorType) -> u32 {
    let [red, green, blue, alpha] = color.to_rgba8();
    Color32::new(red, green, blue, alpha).full()
}

/// Canonical packed 32-bit value of a 16-bit pixel with explicit alpha.
///
/// Channels are shifted back up, so the low bits are zero.
#[inline]
pub fn color16_to_32(color: Color16, alpha: u8) -> u32 {
    Color32::new(color.red() << 3, color.green() << 2, color.blue() << 3, alpha).full()
}

/// Packed RGB565 value of a 32-bit pixel. Alpha is dropped and the low
/// bits of each channel are truncated.
#[inline]
pub fn color_to_16(color: Color32) -> u16 {
    Color16::from_rgb8(color.red, color.green, color.blue).full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_weight_endpoints() {
        let a = Color32::new(200, 10, 90, 255);
        let b = Color32::new(0, 250, 30, 0);
        assert_eq!(Color32::mix(a, b, 255), a);
        assert_eq!(Color32::mix(a, b, 0), b);
        assert_eq!(Color32::mix(a, b, 128), Color32::new(100, 130, 60, 128));
    }

    #[test]
    fn test_mix_16_bit_native_channels() {
        let a = Color16::new(31, 63, 31);
        let b = Color16::new(0, 0, 0);
        let m = Color16::mix(a, b, 128);
        assert_eq!((m.red(), m.green(), m.blue()), (16, 32, 16));
        assert_eq!(Color16::mix(a, b, 255), a);
    }

    #[test]
    fn test_mix_24_bit() {
        let a = Color24::new(255, 0, 100);
        let b = Color24::new(0, 255, 100);
        assert_eq!(Color24::mix(a, b, 0), b);
        assert_eq!(Color24::mix(a, a, 77), a);
    }

    #[test]
    fn test_mix_color_active_depth() {
        let c1 = color_from_rgb(255, 0, 0);
        let c2 = color_from_rgb(0, 0, 255);
        assert_eq!(mix_color(c1, c2, 255), c1);
        assert_eq!(mix_color(c1, c2, 0), c2);
    }

    #[test]
    fn test_truncation_is_lossy() {
        let px = Color32::rgb(0xFF, 0xFF, 0xFF);
        let back = Color32::from_full(color16_to_32(Color16::from_full(color_to_16(px)), 0xFF));
        assert_eq!(back.red, 0xF8);
        assert_eq!(back.green, 0xFC);
        assert_eq!(back.blue, 0xF8);
        assert_eq!(back.alpha, 0xFF);
    }

    #[test]
    fn test_color_to_16_truncates() {
        // 0x0F >> 3 == 1, not rounded up to 2
        let packed = color_to_16(Color32::rgb(0x0F, 0x07, 0x00));
        let c = Color16::from_full(packed);
        assert_eq!((c.red(), c.green(), c.blue()), (1, 1, 0));
    }

    #[test]
    fn test_color16_to_32_keeps_alpha() {
        let px = Color32::from_full(color16_to_32(Color16::new(1, 2, 3), 0x40));
        assert_eq!((px.red, px.green, px.blue, px.alpha), (8, 8, 24, 0x40));
    }

    #[cfg(feature = "depth-32")]
    #[test]
    fn test_active_depth_32() {
        let c = color_from_rgba(1, 2, 3, 4);
        assert_eq!(color_to_32(c), Color32::new(1, 2, 3, 4).full());
        assert_eq!(color_to_32(color_from_rgb(1, 2, 3)) >> 24, 0xFF);
    }

    #[cfg(feature = "depth-16")]
    #[test]
    fn test_active_depth_16_drops_alpha() {
        let c = color_from_rgba(0xFF, 0xFF, 0xFF, 0x10);
        assert_eq!(c, color_from_rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(color_to_32(c), Color32::new(0xF8, 0xFC, 0xF8, 0xFF).full());
    }
}
