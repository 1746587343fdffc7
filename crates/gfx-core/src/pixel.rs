//! Packed device pixel records.
//!
//! These are the byte-exact layouts a renderer maps onto framebuffer
//! memory. Every record stores its channels explicitly and packs or
//! unpacks with shifts and masks; there is no overlapping storage.
//!
//! # Types
//!
//! - [`Color16`] - RGB565 in one `u16` (blue bits 0-4, green 5-10, red 11-15)
//! - [`Color24`] - three bytes, blue first
//! - [`Color32`] - four bytes, blue first, alpha last; [`Color32::full`]
//!   is the little-endian `u32` view of the same bytes
//! - [`ColorType`] - alias of whichever record the build selected
//!
//! ```
//! use gfx_core::{Color16, Color32};
//!
//! let c = Color32::new(0xFF, 0x80, 0x00, 0xFF);
//! assert_eq!(c.full(), 0xFFFF_8000);
//!
//! let packed = Color16::from_rgb8(0xFF, 0x80, 0x00);
//! assert_eq!((packed.red(), packed.green(), packed.blue()), (31, 32, 0));
//! ```
//!
//! # Used By
//!
//! - `gfx-color` - color utility construction and conversion
//! - [`crate::order`] - raw buffer interpretation

use crate::error::{Error, Result};
use crate::format::PixelDepth;
use std::fmt;

/// Opacity value type.
pub type OpacityType = u8;

/// Fully transparent opacity.
pub const OPA_TRANSPARENT: OpacityType = 0;

/// Fully opaque opacity.
pub const OPA_OPAQUE: OpacityType = 255;

/// Active pixel record for this build.
#[cfg(feature = "depth-16")]
pub type ColorType = Color16;

/// Active pixel record for this build.
#[cfg(all(feature = "depth-32", not(feature = "depth-16")))]
pub type ColorType = Color32;

// ============================================================================
// PackedPixel
// ============================================================================

/// Common interface of the packed records.
///
/// Byte channels passed to [`from_rgba8`](PackedPixel::from_rgba8) are
/// truncated to the record's precision; formats without alpha drop it and
/// report [`OPA_OPAQUE`] from [`to_rgba8`](PackedPixel::to_rgba8).
pub trait PackedPixel: Copy + Clone + Default + PartialEq + Eq + fmt::Debug + Send + Sync + 'static {
    /// Depth of this record.
    const DEPTH: PixelDepth;

    /// Builds a pixel from 8-bit channels.
    fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self;

    /// Expands the pixel to 8-bit channels `[r, g, b, a]`.
    fn to_rgba8(self) -> [u8; 4];

    /// Writes the device layout into the front of `buf`.
    fn write_to(self, buf: &mut [u8]) -> Result<()>;

    /// Reads the device layout from the front of `buf`.
    fn read_from(buf: &[u8]) -> Result<Self>;
}

#[inline]
fn check_len(len: usize, depth: PixelDepth) -> Result<()> {
    let needed = depth.bytes_per_pixel();
    if len < needed {
        tracing::debug!(len, needed, "pixel buffer too short");
        return Err(Error::buffer_too_short(len, needed));
    }
    Ok(())
}

// ============================================================================
// Color16
// ============================================================================

const RED16_SHIFT: u16 = 11;
const GREEN16_SHIFT: u16 = 5;
const MASK5: u16 = 0x1F;
const MASK6: u16 = 0x3F;

/// RGB565 pixel.
///
/// Channel accessors return the raw 5/6/5-bit values, not 8-bit values.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Color16(u16);

impl Color16 {
    /// Builds a pixel from raw channel values. Bits above each channel's
    /// width are discarded.
    #[inline]
    pub const fn new(red5: u8, green6: u8, blue5: u8) -> Self {
        Self(
            ((red5 as u16 & MASK5) << RED16_SHIFT)
                | ((green6 as u16 & MASK6) << GREEN16_SHIFT)
                | (blue5 as u16 & MASK5),
        )
    }

    /// Builds a pixel from 8-bit channels by truncating the low bits.
    #[inline]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red >> 3, green >> 2, blue >> 3)
    }

    /// Wraps a packed `u16`.
    #[inline]
    pub const fn from_full(full: u16) -> Self {
        Self(full)
    }

    /// Packed `u16` value.
    #[inline]
    pub const fn full(self) -> u16 {
        self.0
    }

    /// Red, 0-31.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> RED16_SHIFT) & MASK5) as u8
    }

    /// Green, 0-63.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> GREEN16_SHIFT) & MASK6) as u8
    }

    /// Blue, 0-31.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & MASK5) as u8
    }

    /// Replaces the red channel.
    #[inline]
    pub fn set_red(&mut self, red5: u8) {
        *self = Self::new(red5, self.green(), self.blue());
    }

    /// Replaces the green channel.
    #[inline]
    pub fn set_green(&mut self, green6: u8) {
        *self = Self::new(self.red(), green6, self.blue());
    }

    /// Replaces the blue channel.
    #[inline]
    pub fn set_blue(&mut self, blue5: u8) {
        *self = Self::new(self.red(), self.green(), blue5);
    }

    /// Little-endian device bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Builds a pixel from little-endian device bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl fmt::Debug for Color16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color16")
            .field("red", &self.red())
            .field("green", &self.green())
            .field("blue", &self.blue())
            .finish()
    }
}

impl PackedPixel for Color16 {
    const DEPTH: PixelDepth = PixelDepth::Depth16;

    #[inline]
    fn from_rgba8(red: u8, green: u8, blue: u8, _alpha: u8) -> Self {
        Self::from_rgb8(red, green, blue)
    }

    #[inline]
    fn to_rgba8(self) -> [u8; 4] {
        [self.red() << 3, self.green() << 2, self.blue() << 3, OPA_OPAQUE]
    }

    fn write_to(self, buf: &mut [u8]) -> Result<()> {
        check_len(buf.len(), Self::DEPTH)?;
        buf[..2].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    fn read_from(buf: &[u8]) -> Result<Self> {
        check_len(buf.len(), Self::DEPTH)?;
        Ok(Self::from_bytes([buf[0], buf[1]]))
    }
}

// ============================================================================
// Color24
// ============================================================================

/// RGB888 pixel, stored blue, green, red.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color24 {
    /// Blue
    pub blue: u8,
    /// Green
    pub green: u8,
    /// Red
    pub red: u8,
}

impl Color24 {
    /// Builds a pixel from 8-bit channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Device bytes in storage order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Builds a pixel from device bytes in storage order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
        }
    }
}

impl PackedPixel for Color24 {
    const DEPTH: PixelDepth = PixelDepth::Depth24;

    #[inline]
    fn from_rgba8(red: u8, green: u8, blue: u8, _alpha: u8) -> Self {
        Self::new(red, green, blue)
    }

    #[inline]
    fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, OPA_OPAQUE]
    }

    fn write_to(self, buf: &mut [u8]) -> Result<()> {
        check_len(buf.len(), Self::DEPTH)?;
        buf[..3].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    fn read_from(buf: &[u8]) -> Result<Self> {
        check_len(buf.len(), Self::DEPTH)?;
        Ok(Self::from_bytes([buf[0], buf[1], buf[2]]))
    }
}

// ============================================================================
// Color32
// ============================================================================

/// ARGB8888 pixel, stored blue, green, red, alpha.
///
/// [`full`](Color32::full) packs the same bytes into a `u32` as
/// `b | g << 8 | r << 16 | a << 24`, the value a little-endian load of the
/// pixel's memory would produce. Use it for whole-pixel copy and compare.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color32 {
    /// Blue
    pub blue: u8,
    /// Green
    pub green: u8,
    /// Red
    pub red: u8,
    /// Alpha (how opaque each pixel is)
    pub alpha: u8,
}

impl Color32 {
    /// Builds a pixel from 8-bit channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    /// Builds an opaque pixel.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, OPA_OPAQUE)
    }

    /// Whole-pixel integer view.
    #[inline]
    pub const fn full(self) -> u32 {
        u32::from_le_bytes(self.to_bytes())
    }

    /// Unpacks a whole-pixel integer view.
    #[inline]
    pub const fn from_full(full: u32) -> Self {
        Self::from_bytes(full.to_le_bytes())
    }

    /// Device bytes in storage order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.blue, self.green, self.red, self.alpha]
    }

    /// Builds a pixel from device bytes in storage order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
            alpha: bytes[3],
        }
    }
}

impl PackedPixel for Color32 {
    const DEPTH: PixelDepth = PixelDepth::Depth32;

    #[inline]
    fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(red, green, blue, alpha)
    }

    #[inline]
    fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    fn write_to(self, buf: &mut [u8]) -> Result<()> {
        check_len(buf.len(), Self::DEPTH)?;
        buf[..4].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    fn read_from(buf: &[u8]) -> Result<Self> {
        check_len(buf.len(), Self::DEPTH)?;
        Ok(Self::from_bytes([buf[0], buf[1], buf[2], buf[3]]))
    }
}

impl From<Color24> for Color32 {
    #[inline]
    fn from(c: Color24) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }
}

impl From<Color32> for Color24 {
    #[inline]
    fn from(c: Color32) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(std::mem::size_of::<Color16>(), 2);
        assert_eq!(std::mem::size_of::<Color24>(), 3);
        assert_eq!(std::mem::size_of::<Color32>(), 4);
        assert_eq!(std::mem::size_of::<ColorType>(), PixelDepth::ACTIVE.bytes_per_pixel());
    }

    #[test]
    fn test_color16_bit_positions() {
        assert_eq!(Color16::new(0x1F, 0, 0).full(), 0xF800);
        assert_eq!(Color16::new(0, 0x3F, 0).full(), 0x07E0);
        assert_eq!(Color16::new(0, 0, 0x1F).full(), 0x001F);
    }

    #[test]
    fn test_color16_narrows_channels() {
        let c = Color16::new(0xFF, 0xFF, 0xFF);
        assert_eq!(c.full(), 0xFFFF);
        assert_eq!((c.red(), c.green(), c.blue()), (31, 63, 31));
    }

    #[test]
    fn test_color16_setters() {
        let mut c = Color16::from_full(0);
        c.set_red(3);
        c.set_green(40);
        c.set_blue(17);
        assert_eq!((c.red(), c.green(), c.blue()), (3, 40, 17));
        c.set_green(0);
        assert_eq!((c.red(), c.green(), c.blue()), (3, 0, 17));
    }

    #[test]
    fn test_color16_from_rgb8_truncates() {
        let c = Color16::from_rgb8(0xFF, 0xFF, 0x07);
        assert_eq!(c.to_rgba8(), [0xF8, 0xFC, 0x00, OPA_OPAQUE]);
    }

    #[test]
    fn test_color32_full_view() {
        let c = Color32::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.full(), 0x4411_2233);
        assert_eq!(Color32::from_full(0x4411_2233), c);
        assert_eq!(c.to_bytes(), [0x33, 0x22, 0x11, 0x44]);
    }

    #[test]
    fn test_read_write_buffers() {
        let mut buf = [0u8; 6];
        Color32::rgb(1, 2, 3).write_to(&mut buf[1..]).unwrap();
        assert_eq!(buf, [0, 3, 2, 1, 255, 0]);
        assert_eq!(Color32::read_from(&buf[1..]).unwrap(), Color32::rgb(1, 2, 3));

        let err = Color32::read_from(&buf[3..]).unwrap_err();
        assert_eq!(err, Error::buffer_too_short(3, 4));

        Color16::from_full(0xABCD).write_to(&mut buf).unwrap();
        assert_eq!(&buf[..2], &[0xCD, 0xAB]);
        assert!(Color24::read_from(&buf[..2]).is_err());
    }

    #[test]
    fn test_color24_conversions() {
        let c24 = Color24::new(10, 20, 30);
        let c32 = Color32::from(c24);
        assert_eq!(c32, Color32::new(10, 20, 30, OPA_OPAQUE));
        assert_eq!(Color24::from(c32), c24);
        assert_eq!(Color24::from_bytes(c24.to_bytes()), c24);
    }
}
