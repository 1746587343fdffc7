//! sRGB transfer function.
//!
//! Piecewise curve: a linear segment near black joined to a 2.4 power
//! segment, overall close to gamma 2.2.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Inputs outside the range are clamped.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value below which the curve is linear.
pub const ENCODED_KNEE: f32 = 0.04045;

/// Linear value below which the curve is linear.
pub const LINEAR_KNEE: f32 = 0.003_130_8;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f32 = 12.92;

/// Decodes a gamma-encoded sRGB value to linear light.
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// ```rust
/// use gfx_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= ENCODED_KNEE {
        v / LINEAR_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light to a gamma-encoded sRGB value.
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// ```rust
/// use gfx_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    let l = l.clamp(0.0, 1.0);
    if l <= LINEAR_KNEE {
        l * LINEAR_SLOPE
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
