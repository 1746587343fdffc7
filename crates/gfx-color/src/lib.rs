//! # gfx-color
//!
//! Color values and blend primitives for an embedded renderer.
//!
//! This crate is the layer higher-level drawing code builds on. It supplies
//! color *values* and the arithmetic to combine them; it does not rasterize
//! or touch framebuffers.
//!
//! - [`Rgba`] - linear `f32` color for computation (gradients, spectral
//!   synthesis via [`Rgba::from_wavelength`])
//! - [`Rgba8T`] - 8-bit color tagged with a colorspace ([`Rgba8`],
//!   [`Srgba8`]) carrying the fixed-point compositing kernels
//! - [`utility`] - depth-selected pixel construction, mixing and 16/32-bit
//!   conversion
//! - [`palette`] - basic named colors in the active pixel format
//!
//! # Architecture
//!
//! ```text
//!                 gfx-color
//!                     |
//!        +------------+------------+
//!        |            |            |
//!   gfx-transfer   gfx-math        |
//!   (sRGB table)   (kernels)       |
//!        |            |            |
//!        +------------+------------+
//!                     |
//!                  gfx-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gfx_color::prelude::*;
//!
//! // Spectral color, packed for the display
//! let violet = Rgba::from_wavelength(400.0, 1.0);
//! let px: Srgba8 = violet.into();
//! assert!(px.is_opaque());
//!
//! // Fixed-point blending
//! assert_eq!(Rgba8::lerp(0, 255, 128), 128);
//!
//! let c = mix_color(color_from_rgb(255, 0, 0), color_from_rgb(0, 0, 255), 255);
//! assert_eq!(c, color_from_rgb(255, 0, 0));
//! ```
//!
//! # Feature Flags
//!
//! - `depth-32` - ARGB8888 device pixels (default)
//! - `depth-16` - RGB565 device pixels
//! - `simd` - 8-lane batch kernels in `gfx-math` (default)
//! - `gradient` - `gradient` on both color types (default)
//! - `serde` - Serialization for color values
//!
//! The `depth-*` features are mutually exclusive, and cargo unifies features
//! across the dependency graph. Select the depth once, in the final binary:
//! `gfx-color = { version = "0.1", default-features = false, features =
//! ["depth-16", "simd", "gradient"] }`. Library crates depending on gfx-color
//! should not enable a `depth-*` feature themselves.
//!
//! # Dependencies
//!
//! - [`gfx_core`] - Pixel records, colorspace markers
//! - [`gfx_math`] - Fixed-point kernels, float interpolation
//! - [`gfx_transfer`] - sRGB lookup table

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod palette;
mod rgba;
mod rgba8;
pub mod utility;
pub mod wavelength;

pub use convert::ChannelCodec;
pub use gfx_core::{Colorspace, Linear, StandardRgb};
pub use rgba::Rgba;
pub use rgba8::{Rgba8, Rgba8T, Srgba8};
pub use utility::{
    BlendPixel, color_from_rgb, color_from_rgba, color_to_16, color_to_32, color16_to_32, mix_color,
};

// Re-export sub-crates for convenience
pub use gfx_math as math;
pub use gfx_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::utility::{
        BlendPixel, color_from_rgb, color_from_rgba, color_to_16, color_to_32, color16_to_32,
        mix_color,
    };
    pub use crate::{ChannelCodec, Rgba, Rgba8, Rgba8T, Srgba8};

    pub use gfx_core::{
        Color16, Color24, Color32, ColorType, Colorspace, Linear, OPA_OPAQUE, OPA_TRANSPARENT,
        PackedPixel, StandardRgb,
    };
}
