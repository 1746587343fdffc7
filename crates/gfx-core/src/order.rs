//! Channel-order descriptors for raw pixel buffers.
//!
//! A device buffer's physical byte order often differs from the declared
//! struct layout: a display controller may scan BGRA while an image
//! decoder hands over RGBA. [`ChannelOrder`] maps a logical [`Channel`] to
//! a storage index so such buffers can be read and written without
//! reshuffling. All lookups are `const fn` and fold away when the order is
//! known at compile time.
//!
//! ```
//! use gfx_core::{Channel, ChannelOrder};
//!
//! let order: ChannelOrder = "argb".parse().unwrap();
//! assert_eq!(order.index(Channel::Alpha), Some(0));
//! assert_eq!(order.read_rgba(&[0x80, 1, 2, 3]).unwrap(), [1, 2, 3, 0x80]);
//! ```

use crate::error::{Error, Result};
use crate::pixel::OPA_OPAQUE;
use std::fmt;
use std::str::FromStr;

/// Logical color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Alpha
    Alpha,
}

/// Storage order of the channels in a raw pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelOrder {
    /// red, green, blue
    Rgb,
    /// blue, green, red
    Bgr,
    /// red, green, blue, alpha
    Rgba,
    /// alpha, red, green, blue
    Argb,
    /// alpha, blue, green, red
    Abgr,
    /// blue, green, red, alpha
    Bgra,
}

impl ChannelOrder {
    /// All six orders.
    pub const ALL: [Self; 6] = [Self::Rgb, Self::Bgr, Self::Rgba, Self::Argb, Self::Abgr, Self::Bgra];

    /// Storage index of `channel`, or `None` if the order has no such channel.
    #[inline]
    pub const fn index(self, channel: Channel) -> Option<usize> {
        use Channel::*;
        let idx = match (self, channel) {
            (Self::Rgb, Red) => 0,
            (Self::Rgb, Green) => 1,
            (Self::Rgb, Blue) => 2,
            (Self::Bgr, Blue) => 0,
            (Self::Bgr, Green) => 1,
            (Self::Bgr, Red) => 2,
            (Self::Rgba, Red) => 0,
            (Self::Rgba, Green) => 1,
            (Self::Rgba, Blue) => 2,
            (Self::Rgba, Alpha) => 3,
            (Self::Argb, Alpha) => 0,
            (Self::Argb, Red) => 1,
            (Self::Argb, Green) => 2,
            (Self::Argb, Blue) => 3,
            (Self::Abgr, Alpha) => 0,
            (Self::Abgr, Blue) => 1,
            (Self::Abgr, Green) => 2,
            (Self::Abgr, Red) => 3,
            (Self::Bgra, Blue) => 0,
            (Self::Bgra, Green) => 1,
            (Self::Bgra, Red) => 2,
            (Self::Bgra, Alpha) => 3,
            (Self::Rgb | Self::Bgr, Alpha) => return None,
        };
        Some(idx)
    }

    /// Number of channels (3 or 4).
    #[inline]
    pub const fn channels(self) -> usize {
        if self.has_alpha() { 4 } else { 3 }
    }

    /// Whether the order stores alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        !matches!(self, Self::Rgb | Self::Bgr)
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
            Self::Rgba => "rgba",
            Self::Argb => "argb",
            Self::Abgr => "abgr",
            Self::Bgra => "bgra",
        }
    }

    /// Reads one pixel from the front of `buf` as `[r, g, b, a]`.
    ///
    /// Orders without alpha report [`OPA_OPAQUE`].
    pub fn read_rgba(self, buf: &[u8]) -> Result<[u8; 4]> {
        self.check(buf.len())?;
        let get = |ch| self.index(ch).map_or(OPA_OPAQUE, |i| buf[i]);
        Ok([
            get(Channel::Red),
            get(Channel::Green),
            get(Channel::Blue),
            get(Channel::Alpha),
        ])
    }

    /// Writes `[r, g, b, a]` into the front of `buf`.
    ///
    /// Alpha is dropped for orders without an alpha slot.
    pub fn write_rgba(self, buf: &mut [u8], rgba: [u8; 4]) -> Result<()> {
        self.check(buf.len())?;
        let channels = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
        for (ch, value) in channels.into_iter().zip(rgba) {
            if let Some(i) = self.index(ch) {
                buf[i] = value;
            }
        }
        Ok(())
    }

    fn check(self, len: usize) -> Result<()> {
        let needed = self.channels();
        if len < needed {
            tracing::debug!(order = self.name(), len, needed, "pixel buffer too short");
            return Err(Error::buffer_too_short(len, needed));
        }
        Ok(())
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChannelOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                tracing::debug!(name = s, "unknown channel order");
                Error::unknown_order(s)
            })
    }
}
