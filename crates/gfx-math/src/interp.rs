//! Float interpolation utilities.
//!
//! - Linear interpolation ([`lerp`]) and its inverse ([`inverse_lerp`])
//! - Clamping to the unit range ([`saturate`])
//!
//! ```rust
//! use gfx_math::{inverse_lerp, lerp, saturate};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(inverse_lerp(440.0, 490.0, 465.0), 0.5);
//! assert_eq!(saturate(1.5), 1.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`. `t` is not clamped:
/// values outside [0, 1] extrapolate.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// Returns 0 for a degenerate range.
///
/// # Formula
///
/// `(value - a) / (b - a)`
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps to [0, 1]. NaN maps to 0.
#[inline]
pub fn saturate(value: f32) -> f32 {
    if value > 0.0 { value.min(1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(440.0, 380.0, 410.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.1), 0.0);
        assert_eq!(saturate(0.25), 0.25);
        assert_eq!(saturate(3.0), 1.0);
        assert_eq!(saturate(f32::NAN), 0.0);
    }
}
