//! Math utility functions.

use euclid::default::{Point2D, Rect as Rect2D, Size2D};
use num_traits::Float;

use crate::Component;

/// The size of a surface in pixels.
pub type Size = Size2D<Component>;

/// A position on a surface in pixels.
pub type Point = Point2D<Component>;

/// A rectangle on a surface in pixels.
pub type Rect = Rect2D<Component>;

/// Clamp `value` into `[min, max]`. A NaN input saturates at `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

/// Linearly interpolate from `a` to `b` with `t` as the progress between them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Return how far `position` lies along `extent`, in `[0, 1]`. Returns `None`
/// when the extent is empty, in which case no division takes place.
pub fn fraction<T: Float>(position: T, extent: T) -> Option<T> {
    if extent.is_nan() || extent <= T::zero() {
        return None;
    }
    Some(clamp(position, T::zero(), extent) / extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(f32::NAN, 0.0, 360.0), 0.0);
        assert_eq!(clamp(f32::INFINITY, 0.0, 360.0), 360.0);
    }

    #[test]
    fn lerp_between() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    }

    #[test]
    fn fraction_guards_empty_extent() {
        assert_eq!(fraction(5.0, 0.0), None);
        assert_eq!(fraction(5.0, -3.0), None);
        assert_eq!(fraction(5.0, f32::NAN), None);
        assert_eq!(fraction(5.0, 10.0), Some(0.5));
        assert_eq!(fraction(50.0, 10.0), Some(1.0));
        assert_eq!(fraction(-5.0, 10.0), Some(0.0));
    }
}
