//! Cursor options and the geometry of the cursors drawn on the panel and the
//! hue bar.

use euclid::default::Box2D;

use crate::color::{Argb, Component};
use crate::layout::Orientation;
use crate::math::{Point, Rect, Size};

/// The narrowest stroke a cursor is drawn with.
pub const DEFAULT_CURSOR_WIDTH: Component = 2.0;

/// Corner radius of the hue bar cursor when none is configured.
pub const DEFAULT_CURSOR_RADIUS: Component = 4.0;

/// How cursors are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    /// Whether the cursor is drawn at all.
    pub visible: bool,
    /// The requested stroke width. See [`CursorStyle::stroke_width`].
    pub width: Component,
    /// Corner radius of rectangular cursors.
    pub radius: Component,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            visible: true,
            width: DEFAULT_CURSOR_WIDTH,
            radius: DEFAULT_CURSOR_RADIUS,
        }
    }
}

impl CursorStyle {
    /// The stroke width actually used, never below [`DEFAULT_CURSOR_WIDTH`].
    pub fn stroke_width(&self) -> Component {
        self.width.max(DEFAULT_CURSOR_WIDTH)
    }

    /// The two outlines of a cursor, drawn in order: a wide white one and a
    /// narrow black one on top of it.
    pub fn outlines(&self) -> [(Argb, Component); 2] {
        let stroke = self.stroke_width();
        [(Argb::WHITE, stroke), (Argb::BLACK, stroke / 2.0)]
    }
}

/// The shape of a cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cursor {
    /// A circle, used by the saturation/value panel.
    Circle {
        /// Center of the circle.
        center: Point,
        /// Radius of the circle.
        radius: Component,
    },
    /// A rounded rectangle, used by the hue bar.
    RoundRect {
        /// Bounds of the rectangle.
        rect: Rect,
        /// Corner radius.
        radius: Component,
    },
}

impl Cursor {
    /// The circle cursor of the panel, centered on `position`.
    pub fn circle(style: &CursorStyle, position: Point) -> Self {
        Cursor::Circle {
            center: position,
            radius: style.stroke_width() * 2.0,
        }
    }

    /// The cursor of a hue bar of the given size, spanning the cross axis at
    /// `position` along the primary axis.
    pub fn bar(
        style: &CursorStyle,
        size: Size,
        orientation: Orientation,
        position: Component,
    ) -> Self {
        let stroke = style.stroke_width();
        let half = stroke / 2.0;
        let reach = stroke * 2.0;

        let bounds = match orientation {
            Orientation::Vertical => Box2D::new(
                Point::new(half, position - reach),
                Point::new(size.width - half, position + reach),
            ),
            Orientation::Horizontal => Box2D::new(
                Point::new(position - reach, half),
                Point::new(position + reach, size.height - half),
            ),
        };

        Cursor::RoundRect {
            rect: bounds.to_rect(),
            radius: style.radius,
        }
    }

    /// Translate the cursor by the origin of the surface it is drawn on.
    pub fn translate(&self, origin: Point) -> Self {
        let offset = origin.to_vector();
        match *self {
            Cursor::Circle { center, radius } => Cursor::Circle {
                center: center + offset,
                radius,
            },
            Cursor::RoundRect { rect, radius } => Cursor::RoundRect {
                rect: rect.translate(offset),
                radius,
            },
        }
    }
}
