//! Floating-point RGBA color.
//!
//! [`Rgba`] is the computation format: four independent `f32` channels in a
//! device-independent linear space. Gradients and spectral synthesis work
//! here and pack to 8 bits only at the end.
//!
//! Channels have no enforced range. Only [`Rgba::set_opacity`] clamps.
//!
//! ```rust
//! use gfx_color::Rgba;
//!
//! let mut c = Rgba::new(0.2, 0.4, 0.6, 0.5);
//! c.demultiply();
//! assert!((c.red - 0.4).abs() < 1e-6);
//!
//! let mut acc = Rgba::no_color();
//! acc += Rgba::new(0.1, 0.0, 0.0, 0.0);
//! acc *= 2.0;
//! assert!((acc.red - 0.2).abs() < 1e-6);
//! ```

use std::ops::{AddAssign, MulAssign};

/// Linear-space float color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red
    pub red: f32,
    /// Green
    pub green: f32,
    /// Blue
    pub blue: f32,
    /// Alpha
    pub alpha: f32,
}

impl Rgba {
    /// Creates a color from four channels.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Copies the color channels of `color` with a new alpha.
    #[inline]
    pub const fn with_alpha(color: Self, alpha: f32) -> Self {
        Self::new(color.red, color.green, color.blue, alpha)
    }

    /// All channels zero.
    #[inline]
    pub const fn no_color() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Zeroes all four channels.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::no_color();
        self
    }

    /// Zeroes alpha, keeping the color channels.
    #[inline]
    pub fn transparent(&mut self) -> &mut Self {
        self.alpha = 0.0;
        self
    }

    /// Sets alpha, clamped to [0, 1].
    #[inline]
    pub fn set_opacity(&mut self, alpha: f32) -> &mut Self {
        self.alpha = gfx_math::saturate(alpha);
        self
    }

    /// Alpha, unmodified.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.alpha
    }

    /// Converts premultiplied alpha to straight alpha.
    ///
    /// A fully transparent color has no defined hue, so its color channels
    /// become zero instead of being divided by zero.
    pub fn demultiply(&mut self) -> &mut Self {
        if self.alpha == 0.0 {
            self.red = 0.0;
            self.green = 0.0;
            self.blue = 0.0;
        } else {
            let inv = 1.0 / self.alpha;
            self.red *= inv;
            self.green *= inv;
            self.blue *= inv;
        }
        self
    }

    /// Interpolates every channel toward `target` by `k`.
    ///
    /// `k` is not clamped; values outside [0, 1] extrapolate and may leave
    /// the unit range. Clamp first when strict blending is needed.
    #[cfg(feature = "gradient")]
    pub fn gradient(&self, target: &Self, k: f32) -> Self {
        use gfx_math::lerp;
        Self::new(
            lerp(self.red, target.red, k),
            lerp(self.green, target.green, k),
            lerp(self.blue, target.blue, k),
            lerp(self.alpha, target.alpha, k),
        )
    }
}

/// Component-wise sum, used to accumulate spectral contributions.
impl AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.red += rhs.red;
        self.green += rhs.green;
        self.blue += rhs.blue;
        self.alpha += rhs.alpha;
    }
}

impl MulAssign<f32> for Rgba {
    #[inline]
    fn mul_assign(&mut self, k: f32) {
        self.red *= k;
        self.green *= k;
        self.blue *= k;
        self.alpha *= k;
    }
}
