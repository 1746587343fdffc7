//! # gfx-math
//!
//! Arithmetic primitives for 8-bit color compositing.
//!
//! - [`fixed`] - rounding-exact fixed-point blend kernels (`multiply`,
//!   `lerp`, `prelerp`, `divid_multiply`, coverage scaling)
//! - `simd` - bit-identical 8-lane batch kernels (feature `simd`)
//! - Float interpolation helpers ([`lerp`], [`inverse_lerp`], [`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use gfx_math::fixed;
//!
//! // 50% coverage of a mid-gray channel
//! assert_eq!(fixed::mult_cover(200, 128), 100);
//!
//! // Blend a whole run of channels
//! let src = [10u8, 20, 30];
//! let dst = [200u8, 210, 220];
//! let mut out = [0u8; 3];
//! fixed::lerp_into(&dst, &src, 255, &mut out);
//! assert_eq!(out, src);
//! ```
//!
//! # Dependencies
//!
//! - [`wide`] - portable SIMD on stable Rust (optional)
//!
//! # Used By
//!
//! - `gfx-color` - `Rgba8T` blend kernels, color mixing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod fixed;
mod interp;
#[cfg(feature = "simd")]
pub mod simd;

pub use interp::*;
