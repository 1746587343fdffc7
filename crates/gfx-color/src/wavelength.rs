//! Approximate RGB appearance of monochromatic visible light.
//!
//! The visible range 380-780 nm is split into six disjoint chromaticity
//! bands. Each band contributes a piecewise-linear color and is black
//! outside its range:
//!
//! | Band | Range (nm) | Red | Green | Blue |
//! |------|------------|-----|-------|------|
//! | violet | 380-440 | 1 -> 0 | 0 | 1 |
//! | blue | 440-490 | 0 | 0 -> 1 | 1 |
//! | cyan | 490-510 | 0 | 1 | 1 -> 0 |
//! | green | 510-580 | 0 -> 1 | 1 | 0 |
//! | orange | 580-645 | 1 | 1 -> 0 | 0 |
//! | red | 645-780 | 1 | 0 | 0 |
//!
//! Bands are half open (`[lo, hi)`) except the red band, which includes
//! 780 nm. Near the edges of the range the eye is less sensitive, so
//! below 420 nm and above 700 nm the color is attenuated by a ratio that
//! ramps from 0.3 at the boundary to 1.0.
//!
//! ```rust
//! use gfx_color::Rgba;
//!
//! let green = Rgba::spectral(550.0);
//! assert!(green.green > green.red && green.blue == 0.0);
//!
//! let infrared = Rgba::from_wavelength(900.0, 1.0);
//! assert_eq!((infrared.red, infrared.green, infrared.blue), (0.0, 0.0, 0.0));
//! ```

use crate::rgba::Rgba;
use gfx_math::inverse_lerp;

/// Short edge of the visible range.
pub const VIOLET_MIN: f32 = 380.0;
/// Wavelength below which violet light is attenuated.
pub const VIOLET_FALLOFF: f32 = 420.0;
/// Violet / blue boundary.
pub const VIOLET_MAX: f32 = 440.0;
/// Blue / cyan boundary.
pub const BLUE_MAX: f32 = 490.0;
/// Cyan / green boundary.
pub const CYAN_MAX: f32 = 510.0;
/// Green / orange boundary.
pub const GREEN_MAX: f32 = 580.0;
/// Orange / red boundary.
pub const ORANGE_MAX: f32 = 645.0;
/// Wavelength above which red light is attenuated.
pub const RED_FALLOFF: f32 = 700.0;
/// Long edge of the visible range.
pub const RED_MAX: f32 = 780.0;

/// Gamma used by [`Rgba::spectral`].
pub const DEFAULT_GAMMA: f32 = 1.0;

/// Attenuation at the very edges of the range.
pub const FALLOFF_FLOOR: f32 = 0.3;
/// Attenuation recovered over the falloff ramp.
pub const FALLOFF_RAMP: f32 = 1.0 - FALLOFF_FLOOR;

#[inline]
fn band(wavelength: f32, lo: f32, hi: f32, color: impl FnOnce(f32) -> (f32, f32, f32)) -> Rgba {
    if wavelength >= lo && wavelength < hi {
        let (r, g, b) = color(inverse_lerp(lo, hi, wavelength));
        Rgba::new(r, g, b, 0.0)
    } else {
        Rgba::no_color()
    }
}

impl Rgba {
    /// Violet band contribution: red fades out toward blue.
    pub fn violet_band(wavelength: f32) -> Self {
        band(wavelength, VIOLET_MIN, VIOLET_MAX, |t| (1.0 - t, 0.0, 1.0))
    }

    /// Blue band contribution: green fades in.
    pub fn blue_band(wavelength: f32) -> Self {
        band(wavelength, VIOLET_MAX, BLUE_MAX, |t| (0.0, t, 1.0))
    }

    /// Cyan band contribution: blue fades out.
    pub fn cyan_band(wavelength: f32) -> Self {
        band(wavelength, BLUE_MAX, CYAN_MAX, |t| (0.0, 1.0, 1.0 - t))
    }

    /// Green band contribution: red fades in.
    pub fn green_band(wavelength: f32) -> Self {
        band(wavelength, CYAN_MAX, GREEN_MAX, |t| (t, 1.0, 0.0))
    }

    /// Orange band contribution: green fades out.
    pub fn orange_band(wavelength: f32) -> Self {
        band(wavelength, GREEN_MAX, ORANGE_MAX, |t| (1.0, 1.0 - t, 0.0))
    }

    /// Red band contribution, constant red up to and including 780 nm.
    pub fn red_band(wavelength: f32) -> Self {
        if (ORANGE_MAX..=RED_MAX).contains(&wavelength) {
            Self::new(1.0, 0.0, 0.0, 0.0)
        } else {
            Self::no_color()
        }
    }

    /// Sum of all six band contributions, before edge falloff.
    ///
    /// At most one band is active, so this is the active band's color, or
    /// black outside the visible range. Alpha is 0.
    pub fn spectral_bands(wavelength: f32) -> Self {
        let mut rgba = Self::no_color();
        rgba += Self::violet_band(wavelength);
        rgba += Self::blue_band(wavelength);
        rgba += Self::cyan_band(wavelength);
        rgba += Self::green_band(wavelength);
        rgba += Self::orange_band(wavelength);
        rgba += Self::red_band(wavelength);
        rgba
    }

    /// Perceptual attenuation at `wavelength`, 1.0 in the middle of the
    /// range and 0.3 at its edges.
    pub fn edge_falloff(wavelength: f32) -> f32 {
        if wavelength > RED_FALLOFF {
            FALLOFF_FLOOR + FALLOFF_RAMP * inverse_lerp(RED_MAX, RED_FALLOFF, wavelength)
        } else if wavelength < VIOLET_FALLOFF {
            FALLOFF_FLOOR + FALLOFF_RAMP * inverse_lerp(VIOLET_MIN, VIOLET_FALLOFF, wavelength)
        } else {
            1.0
        }
    }

    /// Opaque color of monochromatic light, each channel raised to `gamma`.
    ///
    /// Wavelengths outside 380-780 nm (and NaN) give opaque black. Pure and
    /// deterministic.
    pub fn from_wavelength(wavelength: f32, gamma: f32) -> Self {
        if !(VIOLET_MIN..=RED_MAX).contains(&wavelength) {
            return Self::rgb(0.0, 0.0, 0.0);
        }
        let rgba = Self::spectral_bands(wavelength);
        let ratio = Self::edge_falloff(wavelength);
        Self::rgb(
            (rgba.red * ratio).powf(gamma),
            (rgba.green * ratio).powf(gamma),
            (rgba.blue * ratio).powf(gamma),
        )
    }

    /// [`from_wavelength`](Self::from_wavelength) with [`DEFAULT_GAMMA`].
    #[inline]
    pub fn spectral(wavelength: f32) -> Self {
        Self::from_wavelength(wavelength, DEFAULT_GAMMA)
    }
}

impl From<f32> for Rgba {
    /// Opaque color of light at `wavelength` nm, see [`Rgba::spectral`].
    #[inline]
    fn from(wavelength: f32) -> Self {
        Self::spectral(wavelength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BANDS: [fn(f32) -> Rgba; 6] = [
        Rgba::violet_band,
        Rgba::blue_band,
        Rgba::cyan_band,
        Rgba::green_band,
        Rgba::orange_band,
        Rgba::red_band,
    ];

    fn is_black(c: &Rgba) -> bool {
        c.red == 0.0 && c.green == 0.0 && c.blue == 0.0
    }

    #[test]
    fn test_bands_are_disjoint() {
        let mut w = 370.0;
        while w <= 790.0 {
            let active = BANDS.iter().filter(|f| !is_black(&f(w))).count();
            assert!(active <= 1, "{active} bands active at {w} nm");
            w += 0.5;
        }
    }

    #[test]
    fn test_boundaries_belong_to_upper_band() {
        assert!(is_black(&Rgba::violet_band(440.0)));
        assert_eq!(Rgba::blue_band(440.0), Rgba::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(Rgba::spectral_bands(440.0), Rgba::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(Rgba::red_band(780.0), Rgba::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_bands_are_continuous() {
        for edge in [VIOLET_MAX, BLUE_MAX, CYAN_MAX, GREEN_MAX, ORANGE_MAX] {
            let below = Rgba::spectral_bands(edge - 0.01);
            let at = Rgba::spectral_bands(edge);
            assert_abs_diff_eq!(below.red, at.red, epsilon = 1e-3);
            assert_abs_diff_eq!(below.green, at.green, epsilon = 1e-3);
            assert_abs_diff_eq!(below.blue, at.blue, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_falloff() {
        assert_eq!(Rgba::edge_falloff(550.0), 1.0);
        assert_abs_diff_eq!(Rgba::edge_falloff(380.0), 0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(Rgba::edge_falloff(780.0), 0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(Rgba::edge_falloff(400.0), 0.65, epsilon = 1e-6);
        assert_abs_diff_eq!(Rgba::edge_falloff(740.0), 0.65, epsilon = 1e-6);
    }

    #[test]
    fn test_violet() {
        let c = Rgba::from_wavelength(400.0, 1.0);
        assert_abs_diff_eq!(c.red, 0.65 * 2.0 / 3.0, epsilon = 1e-5);
        assert_eq!(c.green, 0.0);
        assert_abs_diff_eq!(c.blue, 0.65, epsilon = 1e-5);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_green_and_red() {
        let g = Rgba::from_wavelength(550.0, 1.0);
        assert_eq!(g.green, 1.0);
        assert!(g.red < g.green);
        assert_eq!(g.blue, 0.0);

        let r = Rgba::from_wavelength(650.0, 1.0);
        assert_eq!((r.red, r.green, r.blue), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_outside_range_is_black() {
        for w in [0.0, 379.9, 780.1, 1000.0, f32::NAN] {
            let c = Rgba::from_wavelength(w, 1.0);
            assert!(is_black(&c), "{w} nm");
            assert_eq!(c.alpha, 1.0);
        }
    }

    #[test]
    fn test_spectral_uses_unit_gamma() {
        for w in [375.0, 400.0, 465.0, 560.0, 700.0, 740.0, 780.0] {
            assert_eq!(Rgba::spectral(w), Rgba::from_wavelength(w, 1.0), "{w} nm");
            assert_eq!(Rgba::from(w), Rgba::spectral(w));
        }
    }

    #[test]
    fn test_gamma_applies_per_channel() {
        let linear = Rgba::from_wavelength(560.0, 1.0);
        let curved = Rgba::from_wavelength(560.0, 0.8);
        assert_abs_diff_eq!(curved.red, linear.red.powf(0.8), epsilon = 1e-6);
        assert_eq!(curved.green, 1.0);
    }
}
