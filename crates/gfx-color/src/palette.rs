//! Basic HTML color palette in the active pixel format.

use gfx_core::ColorType;

use crate::utility::color_from_rgb;

macro_rules! palette {
    ($($(#[$doc:meta])* $name:ident => ($r:expr, $g:expr, $b:expr);)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name() -> ColorType {
                color_from_rgb($r, $g, $b)
            }
        )*
    };
}

palette! {
    /// `#FFFFFF`
    white => (0xFF, 0xFF, 0xFF);
    /// `#C0C0C0`
    silver => (0xC0, 0xC0, 0xC0);
    /// `#808080`
    gray => (0x80, 0x80, 0x80);
    /// `#000000`
    black => (0x00, 0x00, 0x00);
    /// `#FF0000`
    red => (0xFF, 0x00, 0x00);
    /// `#800000`
    maroon => (0x80, 0x00, 0x00);
    /// `#FFFF00`
    yellow => (0xFF, 0xFF, 0x00);
    /// `#808000`
    olive => (0x80, 0x80, 0x00);
    /// `#00FF00`
    lime => (0x00, 0xFF, 0x00);
    /// `#008000`
    green => (0x00, 0x80, 0x00);
    /// `#00FFFF`
    cyan => (0x00, 0xFF, 0xFF);
    /// `#00FFFF`, same as [`cyan`].
    aqua => (0x00, 0xFF, 0xFF);
    /// `#008080`
    teal => (0x00, 0x80, 0x80);
    /// `#0000FF`
    blue => (0x00, 0x00, 0xFF);
    /// `#000080`
    navy => (0x00, 0x00, 0x80);
    /// `#FF00FF`
    magenta => (0xFF, 0x00, 0xFF);
    /// `#800080`
    purple => (0x80, 0x00, 0x80);
    /// `#FFA500`
    orange => (0xFF, 0xA5, 0x00);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfx_core::PackedPixel;

    #[test]
    fn test_palette_matches_byte_constructor() {
        assert_eq!(white(), color_from_rgb(255, 255, 255));
        assert_eq!(orange(), color_from_rgb(0xFF, 0xA5, 0x00));
        assert_eq!(cyan(), aqua());
        assert_ne!(green(), lime());
    }

    #[test]
    fn test_palette_is_opaque() {
        for c in [white(), black(), navy(), purple()] {
            assert_eq!(c.to_rgba8()[3], 255);
        }
    }

    #[cfg(feature = "depth-32")]
    #[test]
    fn test_palette_bytes() {
        let [r, g, b, _] = silver().to_rgba8();
        assert_eq!((r, g, b), (0xC0, 0xC0, 0xC0));
        let [r, g, b, _] = maroon().to_rgba8();
        assert_eq!((r, g, b), (0x80, 0x00, 0x00));
    }
}
