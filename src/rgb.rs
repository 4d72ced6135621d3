//! Model a color in the sRGB color space with floating point channels, used
//! when blending gradient colors.

use crate::color::{Argb, Component};
use crate::math::{clamp, lerp};

rect_picker_macros::gen_model! {
    /// A color specified in the sRGB color space, each channel in `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        #[range(0.0, 1.0)]
        red: Component,
        /// The green component of the color.
        #[range(0.0, 1.0)]
        green: Component,
        /// The blue component of the color.
        #[range(0.0, 1.0)]
        blue: Component,
    }
}

impl Rgb {
    /// Unpack the color channels of an [`Argb`].
    pub fn from_argb(color: Argb) -> Self {
        Self::new(
            color.red() as Component / 255.0,
            color.green() as Component / 255.0,
            color.blue() as Component / 255.0,
        )
    }

    /// Pack this color into an [`Argb`] with the given alpha, rounding each
    /// channel to 8 bits.
    pub fn to_argb(&self, alpha: u8) -> Argb {
        let c = self.clamped().to_components().map(|c| (c * 255.0).round());
        Argb::from_channels(alpha, c.0 as u8, c.1 as u8, c.2 as u8)
    }

    /// Linearly interpolate each channel from this color to `other`.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self::new(
            lerp(self.red, other.red, t),
            lerp(self.green, other.green, t),
            lerp(self.blue, other.blue, t),
        )
    }

    /// Blend two colors with the multiply mode.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }
}
