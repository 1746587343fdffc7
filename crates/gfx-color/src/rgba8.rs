//! 8-bit fixed-point color tagged with a colorspace.
//!
//! [`Rgba8T`] is the compositing format. Its four byte channels stand for
//! [0.0, 1.0] with 255 as one. The colorspace parameter is a zero-sized
//! marker: it selects how the color converts to and from [`Rgba`] and
//! nothing else. The blend kernels ([`Rgba8T::multiply`],
//! [`Rgba8T::lerp`], ...) are the same for every colorspace.
//!
//! - [`Rgba8`] - linear channels, scaled directly
//! - [`Srgba8`] - gamma-encoded channels, converted through the sRGB table
//!
//! # Example
//!
//! ```rust
//! use gfx_color::{Rgba, Rgba8, Srgba8};
//!
//! let linear = Rgba8::from_rgba(&Rgba::new(1.0, 0.5, 0.0, 1.0));
//! assert_eq!((linear.red, linear.green, linear.blue), (255, 128, 0));
//!
//! // Same light, gamma encoded
//! let encoded: Srgba8 = linear.convert();
//! assert!(encoded.green > linear.green);
//! ```

use std::fmt;
use std::marker::PhantomData;

use gfx_core::{Color32, Colorspace, Linear, OPA_OPAQUE, OPA_TRANSPARENT, StandardRgb};
use gfx_math::fixed;

use crate::convert::{ChannelCodec, uround_u8};
use crate::rgba::Rgba;

/// Four 8-bit channels in colorspace `C`.
///
/// Integer constructors keep the low 8 bits of each argument without range
/// checking. The marker adds no storage: `size_of::<Rgba8T<_>>() == 4`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
#[repr(C)]
pub struct Rgba8T<C: Colorspace> {
    /// Red
    pub red: u8,
    /// Green
    pub green: u8,
    /// Blue
    pub blue: u8,
    /// Alpha
    pub alpha: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    colorspace: PhantomData<C>,
}

/// Linear 8-bit color.
pub type Rgba8 = Rgba8T<Linear>;

/// sRGB-encoded 8-bit color.
pub type Srgba8 = Rgba8T<StandardRgb>;

impl<C: Colorspace> fmt::Debug for Rgba8T<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgba8T")
            .field("colorspace", &C::NAME)
            .field("red", &self.red)
            .field("green", &self.green)
            .field("blue", &self.blue)
            .field("alpha", &self.alpha)
            .finish()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<C: Colorspace> Rgba8T<C> {
    /// Fractional bits.
    pub const BASE_SHIFT: u32 = fixed::BASE_SHIFT;
    /// `1 << BASE_SHIFT`.
    pub const BASE_SCALE: u32 = fixed::BASE_SCALE;
    /// Channel value standing for 1.0.
    pub const BASE_MASK: u32 = fixed::BASE_MASK;
    /// Rounding bias.
    pub const BASE_MSB: u32 = fixed::BASE_MSB;

    /// Creates a color from integer channels, keeping the low 8 bits of each.
    #[inline]
    pub const fn new(red: u32, green: u32, blue: u32, alpha: u32) -> Self {
        Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
            alpha: alpha as u8,
            colorspace: PhantomData,
        }
    }

    /// Creates an opaque color, narrowing like [`new`](Self::new).
    #[inline]
    pub const fn rgb(red: u32, green: u32, blue: u32) -> Self {
        Self::new(red, green, blue, Self::BASE_MASK)
    }

    /// Copies the color channels of `color` with a new alpha.
    #[inline]
    pub const fn with_alpha(color: Self, alpha: u32) -> Self {
        Self {
            alpha: alpha as u8,
            ..color
        }
    }

    /// All channels zero.
    #[inline]
    pub const fn no_color() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Value of an empty channel.
    #[inline]
    pub const fn empty_value() -> u8 {
        0
    }

    /// Scales a unit float to a channel, `round(value * 255)`.
    #[inline]
    pub fn from_float(value: f32) -> u8 {
        uround_u8(value)
    }

    /// Takes the channels of a device pixel as-is.
    #[inline]
    pub const fn from_color32(px: Color32) -> Self {
        Self::new(px.red as u32, px.green as u32, px.blue as u32, px.alpha as u32)
    }

    /// Packs the channels into a device pixel as-is.
    #[inline]
    pub const fn to_color32(self) -> Color32 {
        Color32::new(self.red, self.green, self.blue, self.alpha)
    }

    /// `alpha == 0`.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.alpha == OPA_TRANSPARENT
    }

    /// `alpha == 255`.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.alpha == OPA_OPAQUE
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
        self.alpha = OPA_TRANSPARENT;
        self
    }

    /// Sets alpha from a unit float: below 0 gives 0, above 1 gives 255,
    /// anything else is rounded.
    pub fn set_opacity(&mut self, alpha: f32) -> &mut Self {
        self.alpha = if alpha < 0.0 {
            OPA_TRANSPARENT
        } else if alpha > 1.0 {
            OPA_OPAQUE
        } else {
            uround_u8(alpha)
        };
        self
    }

    /// Alpha as a unit float.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.alpha as f32 / Self::BASE_MASK as f32
    }

    /// Interpolates every channel toward `target` with [`Rgba8T::lerp`].
    ///
    /// The weight is `round(k * 255)` after clamping `k` to [0, 1]. Unlike
    /// the integer constructors, an out-of-range weight saturates instead of
    /// keeping its low 8 bits: `k = 1.5` returns `target`, not a midpoint.
    #[cfg(feature = "gradient")]
    pub fn gradient(&self, target: &Self, k: f32) -> Self {
        let a = uround_u8(gfx_math::saturate(k));
        Self {
            red: fixed::lerp(self.red, target.red, a),
            green: fixed::lerp(self.green, target.green, a),
            blue: fixed::lerp(self.blue, target.blue, a),
            alpha: fixed::lerp(self.alpha, target.alpha, a),
            colorspace: PhantomData,
        }
    }
}

// ============================================================================
// Blend kernels
// ============================================================================

impl<C: Colorspace> Rgba8T<C> {
    /// See [`fixed::multiply`].
    #[inline]
    pub const fn multiply(a: u8, b: u8) -> u8 {
        fixed::multiply(a, b)
    }

    /// See [`fixed::divid_multiply`].
    #[inline]
    pub const fn divid_multiply(a: u8, b: u8) -> u8 {
        fixed::divid_multiply(a, b)
    }

    /// See [`fixed::lerp`].
    #[inline]
    pub const fn lerp(p: u8, q: u8, a: u8) -> u8 {
        fixed::lerp(p, q, a)
    }

    /// See [`fixed::prelerp`].
    #[inline]
    pub const fn prelerp(p: u8, q: u8, a: u8) -> u8 {
        fixed::prelerp(p, q, a)
    }

    /// See [`fixed::mult_cover`].
    #[inline]
    pub const fn mult_cover(a: u8, cover: u8) -> u8 {
        fixed::mult_cover(a, cover)
    }

    /// See [`fixed::scale_cover`].
    #[inline]
    pub const fn scale_cover(cover: u8, value: u8) -> u8 {
        fixed::scale_cover(cover, value)
    }

    /// See [`fixed::downshift`].
    #[inline]
    pub const fn downshift(value: u32, digits: u32) -> u32 {
        fixed::downshift(value, digits)
    }

    /// See [`fixed::downscale`].
    #[inline]
    pub const fn downscale(value: u32) -> u32 {
        fixed::downscale(value)
    }
}

// ============================================================================
// Float conversion
// ============================================================================

impl<C: ChannelCodec> Rgba8T<C> {
    /// Encodes a float color with this colorspace's transfer.
    pub fn from_rgba(color: &Rgba) -> Self {
        Self {
            red: C::encode(color.red),
            green: C::encode(color.green),
            blue: C::encode(color.blue),
            alpha: C::encode_alpha(color.alpha),
            colorspace: PhantomData,
        }
    }

    /// Decodes to a linear float color.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::new(
            C::decode(self.red),
            C::decode(self.green),
            C::decode(self.blue),
            C::decode_alpha(self.alpha),
        )
    }

    /// Re-encodes in colorspace `D` by way of [`Rgba`].
    pub fn convert<D: ChannelCodec>(&self) -> Rgba8T<D> {
        tracing::trace!(from = C::NAME, to = D::NAME, "convert rgba8");
        Rgba8T::<D>::from_rgba(&self.to_rgba())
    }
}

impl<C: ChannelCodec> From<Rgba> for Rgba8T<C> {
    #[inline]
    fn from(color: Rgba) -> Self {
        Self::from_rgba(&color)
    }
}

impl<C: ChannelCodec> From<Rgba8T<C>> for Rgba {
    #[inline]
    fn from(color: Rgba8T<C>) -> Self {
        color.to_rgba()
    }
}

impl From<Rgba8> for Srgba8 {
    #[inline]
    fn from(color: Rgba8) -> Self {
        color.convert()
    }
}

impl From<Srgba8> for Rgba8 {
    #[inline]
    fn from(color: Srgba8) -> Self {
        color.convert()
    }
}

impl<C: Colorspace> From<Color32> for Rgba8T<C> {
    #[inline]
    fn from(px: Color32) -> Self {
        Self::from_color32(px)
    }
}

impl<C: Colorspace> From<Rgba8T<C>> for Color32 {
    #[inline]
    fn from(color: Rgba8T<C>) -> Self {
        color.to_color32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_sized_marker() {
        assert_eq!(std::mem::size_of::<Rgba8>(), 4);
        assert_eq!(std::mem::size_of::<Srgba8>(), 4);
    }

    #[test]
    fn test_constructors_narrow() {
        let c = Rgba8::new(256, 300, 255, 511);
        assert_eq!((c.red, c.green, c.blue, c.alpha), (0, 44, 255, 255));
        assert!(Rgba8::rgb(1, 2, 3).is_opaque());
        assert!(Rgba8::no_color().is_transparent());
        assert_eq!(Rgba8::with_alpha(Rgba8::rgb(9, 8, 7), 40), Rgba8::new(9, 8, 7, 40));
        assert_eq!(Rgba8::empty_value(), 0);
        assert_eq!(Rgba8::default(), Rgba8::no_color());
    }

    #[test]
    fn test_linear_from_float() {
        let c = Rgba8::from_rgba(&Rgba::new(1.0, 0.0, 0.5, 1.0));
        assert_eq!((c.red, c.green, c.blue, c.alpha), (255, 0, 128, 255));
        assert_eq!(Rgba8::from_float(0.5), 128);
    }

    #[test]
    fn test_linear_round_trip() {
        for v in 0..=255u32 {
            let c = Rgba8::new(v, v, v, v);
            assert_eq!(Rgba8::from_rgba(&c.to_rgba()), c);
        }
    }

    #[test]
    fn test_srgb_uses_gamma_table() {
        let c = Srgba8::new(128, 128, 128, 128);
        let f = c.to_rgba();
        assert!(f.red < 128.0 / 255.0);
        assert_abs_diff_eq!(f.alpha, 128.0 / 255.0, epsilon = 1e-6);
        assert_eq!(Srgba8::from(f), c);
    }

    #[test]
    fn test_convert_between_colorspaces() {
        let lin = Rgba8::new(0, 55, 255, 77);
        let enc: Srgba8 = lin.convert();
        assert_eq!(enc.red, 0);
        assert_eq!(enc.blue, 255);
        assert!(enc.green > lin.green);
        assert_eq!(enc.alpha, 77);

        let back: Rgba8 = enc.into();
        assert!((back.green as i32 - lin.green as i32).abs() <= 1);
    }

    #[test]
    fn test_opacity_clamps() {
        let mut c = Rgba8::rgb(10, 20, 30);
        assert_eq!(c.set_opacity(2.0).alpha, 255);
        assert_eq!(c.set_opacity(-1.0).alpha, 0);
        assert_eq!(c.set_opacity(0.5).alpha, 128);
        assert_abs_diff_eq!(c.opacity(), 128.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clear_and_transparent() {
        let mut c = Rgba8::rgb(10, 20, 30);
        c.transparent();
        assert_eq!(c, Rgba8::new(10, 20, 30, 0));
        c.clear();
        assert_eq!(c, Rgba8::no_color());
    }

    #[test]
    fn test_kernels_delegate() {
        assert_eq!(Rgba8::multiply(128, 128), 64);
        assert_eq!(Srgba8::multiply(128, 128), 64);
        assert_eq!(Rgba8::divid_multiply(1, 2), 128);
        assert_eq!(Rgba8::lerp(0, 255, 128), 128);
        assert_eq!(Rgba8::prelerp(90, 200, 255), 200);
        assert_eq!(Rgba8::mult_cover(200, 128), 100);
        assert_eq!(Rgba8::scale_cover(128, 200), 100);
        assert_eq!(Rgba8::downscale(0x1FF), 1);
        assert_eq!(Rgba8::downshift(0x80, 7), 1);
    }

    #[test]
    fn test_color32_bridge() {
        let px = Color32::new(1, 2, 3, 4);
        let c = Rgba8::from(px);
        assert_eq!((c.red, c.green, c.blue, c.alpha), (1, 2, 3, 4));
        assert_eq!(Color32::from(c), px);
    }

    #[test]
    fn test_debug_names_colorspace() {
        let s = format!("{:?}", Srgba8::rgb(1, 2, 3));
        assert!(s.contains("srgb"));
    }

    #[cfg(feature = "gradient")]
    #[test]
    fn test_gradient() {
        let a = Rgba8::new(0, 100, 200, 255);
        let b = Rgba8::new(255, 200, 0, 0);
        assert_eq!(a.gradient(&b, 0.0), a);
        assert_eq!(a.gradient(&b, 1.0), b);
        assert_eq!(a.gradient(&b, 0.5), Rgba8::new(128, 150, 100, 127));
        // Weight saturates rather than wrapping through 8 bits
        assert_eq!(a.gradient(&b, 1.5), b);
        assert_eq!(a.gradient(&b, 3.0), b);
        assert_eq!(a.gradient(&b, -3.0), a);
    }
}
