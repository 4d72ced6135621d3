//! Sampling of the linear gradients the panel and the hue bar are filled with.

use crate::color::{Argb, Component};
use crate::hsv::Hsv;
use crate::math::clamp;
use crate::rgb::Rgb;

/// A linear gradient with its color stops spread evenly from 0 to 1.
#[derive(Clone, Copy, Debug)]
pub struct LinearGradient<'a> {
    stops: &'a [Argb],
}

impl<'a> LinearGradient<'a> {
    /// Create a gradient over `stops`.
    pub fn new(stops: &'a [Argb]) -> Self {
        Self { stops }
    }

    /// The color at `t`, clamped to the ends of the gradient. An empty
    /// gradient is transparent black.
    pub fn at(&self, t: Component) -> Argb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Argb::default(),
        };

        let t = clamp(t, 0.0, 1.0);
        let segments = self.stops.len() - 1;
        if segments == 0 || t <= 0.0 {
            return first;
        }
        if t >= 1.0 {
            return last;
        }

        let scaled = t * segments as Component;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as Component;

        let from = self.stops[index];
        let to = self.stops[index + 1];
        let alpha = clamp(
            (from.alpha() as Component
                + (to.alpha() as Component - from.alpha() as Component) * local)
                .round(),
            0.0,
            255.0,
        ) as u8;

        Rgb::from_argb(from)
            .interpolate(&Rgb::from_argb(to), local)
            .to_argb(alpha)
    }
}

/// The color of a saturation/value panel filled for `hue`, at the given
/// fractions of its width (`x`) and height (`y`).
///
/// The panel is a white-to-black gradient from top to bottom, multiplied by a
/// white-to-hue gradient from left to right.
pub fn panel_color(hue: Component, x: Component, y: Component) -> Argb {
    let pure = Rgb::from_argb(Hsv::new(hue, 1.0, 1.0).to_argb(0xFF));
    let white = Rgb::new(1.0, 1.0, 1.0);
    let black = Rgb::new(0.0, 0.0, 0.0);

    let across = white.interpolate(&pure, x);
    let down = white.interpolate(&black, y);
    across.multiply(&down).to_argb(0xFF)
}
