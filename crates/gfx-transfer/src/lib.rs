//! # gfx-transfer
//!
//! sRGB transfer function and the 8-bit gamma lookup table used by the
//! fixed-point color layer.
//!
//! # Terminology
//!
//! - **OETF**: Linear -> Encoded
//! - **EOTF**: Encoded -> Linear
//!
//! # Usage
//!
//! ```rust
//! use gfx_transfer::{srgb, SrgbLut};
//!
//! // Analytic curve
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//!
//! // Table lookups for 8-bit channels
//! let lut = SrgbLut::global();
//! assert_eq!(lut.srgb_from_rgb(lut.rgb_from_srgb(200)), 200);
//! ```
//!
//! # Used By
//!
//! - `gfx-color` - `Rgba8T<StandardRgb>` conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lut;
pub mod srgb;

pub use lut::SrgbLut;
