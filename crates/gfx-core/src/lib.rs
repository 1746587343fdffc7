//! # gfx-core
//!
//! Core pixel types for the embedded rendering stack.
//!
//! This crate provides the foundational types the color layer is built on:
//!
//! - [`Color16`], [`Color24`], [`Color32`] - packed device pixel records
//! - [`ColorType`] - the record selected for this build
//! - [`PixelDepth`] - runtime description of a pixel depth
//! - [`ChannelOrder`], [`Channel`] - raw buffer channel layouts
//! - [`Colorspace`], [`Linear`], [`StandardRgb`] - zero-sized encoding tags
//!
//! ## Crate Structure
//!
//! ```text
//! gfx-core (this crate)
//!    ^
//!    |
//!    +-- gfx-transfer (sRGB gamma tables)
//!    +-- gfx-math (fixed-point blend kernels)
//!    +-- gfx-color (float and fixed-point colors, color utility)
//! ```
//!
//! ## Feature Flags
//!
//! - `depth-32` - 32-bit ARGB8888 is the active format (default)
//! - `depth-16` - 16-bit RGB565 is the active format
//! - `serde` - Serialization for the value types
//!
//! Exactly one `depth-*` feature must be enabled. When switching to 16-bit,
//! disable default features: `gfx-core = { default-features = false,
//! features = ["depth-16"] }`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod format;
pub mod order;
pub mod pixel;

pub use colorspace::*;
pub use error::*;
pub use format::*;
pub use order::*;
pub use pixel::*;

/// Prelude module for convenient imports.
///
/// ```
/// use gfx_core::prelude::*;
///
/// let px = ColorType::from_rgba8(255, 0, 0, OPA_OPAQUE);
/// assert_eq!(px.to_rgba8()[0] & 0xF8, 0xF8);
/// ```
pub mod prelude {
    pub use crate::colorspace::{Colorspace, Linear, StandardRgb};
    pub use crate::error::{Error, Result};
    pub use crate::format::{COLOR_DEPTH, PixelDepth};
    pub use crate::order::{Channel, ChannelOrder};
    pub use crate::pixel::{
        Color16, Color24, Color32, ColorType, OPA_OPAQUE, OPA_TRANSPARENT, OpacityType, PackedPixel,
    };
}
