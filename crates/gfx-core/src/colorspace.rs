//! Colorspace marker types.
//!
//! A fixed-point color carries its encoding as a type parameter instead of
//! a runtime field. The markers are zero-sized, so `Rgba8T<Linear>` and
//! `Rgba8T<StandardRgb>` have the same four-byte layout; the tag only
//! selects which float conversion applies.
//!
//! # Markers
//!
//! - [`Linear`] - channel value is proportional to light intensity
//! - [`StandardRgb`] - channel value is gamma encoded with the sRGB curve
//!
//! ```
//! use gfx_core::{Colorspace, Linear, StandardRgb};
//!
//! assert!(Linear::IS_LINEAR);
//! assert!(!StandardRgb::IS_LINEAR);
//! assert_eq!(std::mem::size_of::<StandardRgb>(), 0);
//! ```

use std::fmt;

/// Trait for colorspace marker types.
///
/// Implementors are never instantiated as data; they exist to drive
/// dispatch at compile time.
pub trait Colorspace: Copy + Clone + Default + Send + Sync + fmt::Debug + PartialEq + Eq + 'static {
    /// Human-readable name, used in logs and `Debug` output.
    const NAME: &'static str;

    /// Whether channel values are linear in light intensity.
    const IS_LINEAR: bool;
}

/// Linear-light encoding. Channel `v` represents intensity `v / 255`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear;

impl Colorspace for Linear {
    const NAME: &'static str = "linear";
    const IS_LINEAR: bool = true;
}

/// sRGB gamma encoding (IEC 61966-2-1 transfer function).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardRgb;

impl Colorspace for StandardRgb {
    const NAME: &'static str = "srgb";
    const IS_LINEAR: bool = false;
}
