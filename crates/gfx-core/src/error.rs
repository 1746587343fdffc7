//! Error types for gfx-core operations.
//!
//! Color arithmetic in this workspace is total: blend kernels saturate,
//! channel constructors narrow and degenerate divisions yield zero. The
//! only fallible surface is the boundary where raw memory or runtime
//! settings are interpreted:
//!
//! - Reading or writing a pixel from an undersized byte buffer
//! - Parsing a pixel depth that the renderer does not support
//! - Parsing an unknown channel order name
//!
//! # Usage
//!
//! ```rust
//! use gfx_core::{Error, PixelDepth};
//!
//! let err = PixelDepth::try_from(8).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedDepth(8)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting raw pixel memory or pixel settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte buffer is shorter than one pixel of the requested layout.
    #[error("buffer of {len} bytes is too short for a {needed}-byte pixel")]
    BufferTooShort {
        /// Bytes available
        len: usize,
        /// Bytes required
        needed: usize,
    },

    /// Pixel depth is not one of 16, 24 or 32 bits.
    #[error("unsupported color depth: {0} (expected 16, 24 or 32)")]
    UnsupportedDepth(u32),

    /// Channel order name did not match any known layout.
    #[error("unknown channel order: {0:?}")]
    UnknownOrder(String),
}

impl Error {
    /// Creates an [`Error::BufferTooShort`] error.
    #[inline]
    pub fn buffer_too_short(len: usize, needed: usize) -> Self {
        Self::BufferTooShort { len, needed }
    }

    /// Creates an [`Error::UnknownOrder`] error.
    #[inline]
    pub fn unknown_order(name: impl Into<String>) -> Self {
        Self::UnknownOrder(name.into())
    }

    /// Returns `true` if this error came from an undersized buffer.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(self, Self::BufferTooShort { .. })
    }

    /// Returns `true` if this error came from parsing a runtime setting.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UnsupportedDepth(_) | Self::UnknownOrder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_too_short() {
        let err = Error::buffer_too_short(3, 4);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("4-byte"));
        assert!(err.is_buffer_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_unsupported_depth() {
        let err = Error::UnsupportedDepth(12);
        assert!(err.to_string().contains("12"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_unknown_order() {
        let err = Error::unknown_order("grb");
        assert_eq!(err.to_string(), "unknown channel order: \"grb\"");
        assert!(err.is_parse_error());
    }
}
