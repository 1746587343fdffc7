//! Pixel depth selection.
//!
//! Exactly one packed record is active per build. The choice is made with
//! cargo features on this crate:
//!
//! | Feature | [`ColorType`](crate::ColorType) | Alpha |
//! |---------|---------------------------------|-------|
//! | `depth-16` | [`Color16`](crate::Color16) (RGB565) | no |
//! | `depth-32` (default) | [`Color32`](crate::Color32) (BGRA8888) | yes |
//!
//! Enabling neither or both features fails the build. The 24-bit record is
//! available for buffer interpretation but is never the active format.
//!
//! [`PixelDepth`] describes a depth at runtime, e.g. when a display driver
//! reports its framebuffer format:
//!
//! ```rust
//! use gfx_core::PixelDepth;
//!
//! let depth = PixelDepth::try_from(16).unwrap();
//! assert_eq!(depth.bytes_per_pixel(), 2);
//! assert!(!depth.has_alpha());
//! assert!(PixelDepth::try_from(15).is_err());
//! ```

use crate::error::{Error, Result};

#[cfg(all(feature = "depth-16", feature = "depth-32"))]
compile_error!("features `depth-16` and `depth-32` are mutually exclusive, enable exactly one");

#[cfg(not(any(feature = "depth-16", feature = "depth-32")))]
compile_error!("invalid color depth, enable feature `depth-16` or `depth-32`");

/// Bit count of the active pixel format.
#[cfg(feature = "depth-16")]
pub const COLOR_DEPTH: u32 = 16;

/// Bit count of the active pixel format.
#[cfg(all(feature = "depth-32", not(feature = "depth-16")))]
pub const COLOR_DEPTH: u32 = 32;

/// Packed pixel depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelDepth {
    /// 16-bit RGB565, no alpha.
    Depth16,
    /// 24-bit RGB888, no alpha.
    Depth24,
    /// 32-bit ARGB8888.
    Depth32,
}

impl PixelDepth {
    /// Depth selected for this build.
    #[cfg(feature = "depth-16")]
    pub const ACTIVE: Self = Self::Depth16;

    /// Depth selected for this build.
    #[cfg(all(feature = "depth-32", not(feature = "depth-16")))]
    pub const ACTIVE: Self = Self::Depth32;

    /// Bits per pixel.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Depth16 => 16,
            Self::Depth24 => 24,
            Self::Depth32 => 32,
        }
    }

    /// Bytes per pixel in device memory.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Whether the record stores an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Depth32)
    }
}

impl TryFrom<u32> for PixelDepth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            16 => Ok(Self::Depth16),
            24 => Ok(Self::Depth24),
            32 => Ok(Self::Depth32),
            other => {
                tracing::debug!(bits = other, "rejecting unsupported pixel depth");
                Err(Error::UnsupportedDepth(other))
            }
        }
    }
}

impl From<PixelDepth> for u32 {
    #[inline]
    fn from(depth: PixelDepth) -> Self {
        depth.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matches_constant() {
        assert_eq!(PixelDepth::ACTIVE.bits(), COLOR_DEPTH);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(PixelDepth::try_from(16), Ok(PixelDepth::Depth16));
        assert_eq!(PixelDepth::try_from(24), Ok(PixelDepth::Depth24));
        assert_eq!(PixelDepth::try_from(32), Ok(PixelDepth::Depth32));
        assert_eq!(PixelDepth::try_from(8), Err(Error::UnsupportedDepth(8)));
        assert_eq!(PixelDepth::try_from(0), Err(Error::UnsupportedDepth(0)));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(PixelDepth::Depth16.bytes_per_pixel(), 2);
        assert_eq!(PixelDepth::Depth24.bytes_per_pixel(), 3);
        assert_eq!(PixelDepth::Depth32.bytes_per_pixel(), 4);
        assert!(PixelDepth::Depth32.has_alpha());
        assert!(!PixelDepth::Depth24.has_alpha());
        assert_eq!(u32::from(PixelDepth::Depth24), 24);
    }
}
