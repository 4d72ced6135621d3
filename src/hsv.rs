//! Model a color with the HSV (hue, saturation, value) notation.

use crate::color::{Argb, Component};
use crate::math::clamp;

rect_picker_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue of the color in degrees.
        #[range(0.0, 360.0)]
        hue: Component,
        /// The saturation of the color.
        #[range(0.0, 1.0)]
        saturation: Component,
        /// The value (brightness) of the color.
        #[range(0.0, 1.0)]
        value: Component,
    }
}

impl Default for Hsv {
    /// Red hue, no saturation and full value, which is white.
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Hsv {
    /// Pack this color into an [`Argb`] with the given alpha.
    ///
    /// A hue outside `[0, 360)` is treated as 0; saturation and value are
    /// clamped to `[0, 1]`.
    pub fn to_argb(&self, alpha: u8) -> Argb {
        let saturation = clamp(self.saturation, 0.0, 1.0);
        let scale = clamp(self.value, 0.0, 1.0) * 255.0;
        let v = round_channel(scale);

        if saturation <= 0.0 {
            return Argb::from_channels(alpha, v, v, v);
        }

        let hx = if self.hue < 0.0 || self.hue >= 360.0 || self.hue.is_nan() {
            0.0
        } else {
            self.hue / 60.0
        };
        let sector = hx.floor();
        let f = hx - sector;

        let p = round_channel((1.0 - saturation) * scale);
        let q = round_channel((1.0 - saturation * f) * scale);
        let t = round_channel((1.0 - saturation * (1.0 - f)) * scale);

        let (red, green, blue) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Argb::from_channels(alpha, red, green, blue)
    }

    /// Decompose the color channels of an [`Argb`] into HSV. The alpha channel
    /// is ignored. Achromatic colors get a hue of 0.
    pub fn from_argb(color: Argb) -> Self {
        let red = color.red() as Component;
        let green = color.green() as Component;
        let blue = color.blue() as Component;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let value = max / 255.0;
        if delta == 0.0 {
            return Self::new(0.0, 0.0, value);
        }

        let saturation = delta / max;
        let mut hue = 60.0
            * if red == max {
                (green - blue) / delta
            } else if green == max {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };
        if hue < 0.0 {
            hue += 360.0;
        }

        Self::new(hue, saturation, value)
    }
}

fn round_channel(value: Component) -> u8 {
    clamp(value.round(), 0.0, 255.0) as u8
}
