//! A rectangular panel that maps positions to saturation (horizontally) and
//! value (vertically).

use crate::color::{Argb, Component};
use crate::cursor::{Cursor, CursorStyle};
use crate::event::{Changes, Event, Listener, Notifier, TouchAction};
use crate::gradient::panel_color;
use crate::math::{clamp, fraction, Point, Size};

/// Saturation grows from 0 on the left edge to 1 on the right edge, value
/// drops from 1 on the top edge to 0 on the bottom edge.
///
/// The hue is only used to fill the panel and never changes saturation or
/// value.
#[derive(Debug)]
pub struct SaturationValuePanel {
    size: Size,
    hue: Component,
    saturation: Component,
    value: Component,
    position: Point,
    cursor: CursorStyle,
    notifier: Notifier,
}

impl Default for SaturationValuePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SaturationValuePanel {
    /// Create a panel showing white (no saturation, full value) with no size
    /// yet.
    pub fn new() -> Self {
        Self {
            size: Size::zero(),
            hue: 0.0,
            saturation: 0.0,
            value: 1.0,
            position: Point::zero(),
            cursor: CursorStyle::default(),
            notifier: Notifier::default(),
        }
    }

    /// Set the listener that receives [`Event::SaturationChanged`] and
    /// [`Event::ValueChanged`].
    pub fn set_listener(&mut self, listener: Option<Listener>) {
        self.notifier.set(listener);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the panel. The cursor is moved to match the current saturation
    /// and value.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.position = Point::new(
            self.position_from_saturation(self.saturation),
            self.position_from_value(self.value),
        );
    }

    pub fn hue(&self) -> Component {
        self.hue
    }

    /// Set the hue the panel is filled with. Does not notify.
    pub fn set_hue(&mut self, hue: Component) {
        self.hue = clamp(hue, 0.0, 360.0);
    }

    pub fn saturation(&self) -> Component {
        self.saturation
    }

    pub fn value(&self) -> Component {
        self.value
    }

    /// The cursor position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Set the saturation, clamped to `[0, 1]`, and move the cursor to it.
    pub fn set_saturation(&mut self, saturation: Component) -> Changes {
        let changes = self.change_saturation(saturation);
        self.position.x = self.position_from_saturation(saturation);
        changes
    }

    /// Set the value, clamped to `[0, 1]`, and move the cursor to it.
    pub fn set_value(&mut self, value: Component) -> Changes {
        let changes = self.change_value(value);
        self.position.y = self.position_from_value(value);
        changes
    }

    /// Move the cursor to `(x, y)`, clamped to the panel, and take the
    /// saturation and value found there. Does nothing while the panel has no
    /// area.
    pub fn set_position(&mut self, x: Component, y: Component) -> Changes {
        if self.is_empty() {
            log::debug!("ignoring panel position ({x}, {y}) on an empty surface");
            return Changes::empty();
        }
        self.position = Point::new(
            clamp(x, 0.0, self.size.width),
            clamp(y, 0.0, self.size.height),
        );
        self.change_saturation(self.saturation_from_position(self.position.x))
            | self.change_value(self.value_from_position(self.position.y))
    }

    /// Move the cursor horizontally only.
    pub fn set_position_x(&mut self, x: Component) -> Changes {
        if self.is_empty() {
            log::debug!("ignoring panel position x {x} on an empty surface");
            return Changes::empty();
        }
        self.position.x = clamp(x, 0.0, self.size.width);
        self.change_saturation(self.saturation_from_position(self.position.x))
    }

    /// Move the cursor vertically only.
    pub fn set_position_y(&mut self, y: Component) -> Changes {
        if self.is_empty() {
            log::debug!("ignoring panel position y {y} on an empty surface");
            return Changes::empty();
        }
        self.position.y = clamp(y, 0.0, self.size.height);
        self.change_value(self.value_from_position(self.position.y))
    }

    /// Handle a touch at `point`, in the panel's own coordinates.
    pub fn touch(&mut self, action: TouchAction, point: Point) -> Changes {
        if !action.tracks() {
            return Changes::empty();
        }
        self.set_position(point.x, point.y)
    }

    pub fn position_from_saturation(&self, saturation: Component) -> Component {
        self.size.width * clamp(saturation, 0.0, 1.0)
    }

    pub fn position_from_value(&self, value: Component) -> Component {
        self.size.height * (1.0 - clamp(value, 0.0, 1.0))
    }

    /// The saturation at `x`. A panel without width yields 0.
    pub fn saturation_from_position(&self, x: Component) -> Component {
        fraction(x, self.size.width).unwrap_or(0.0)
    }

    /// The value at `y`. A panel without height yields 1.
    pub fn value_from_position(&self, y: Component) -> Component {
        1.0 - fraction(y, self.size.height).unwrap_or(0.0)
    }

    /// The color drawn at `point`.
    pub fn color_at(&self, point: Point) -> Argb {
        panel_color(
            self.hue,
            fraction(point.x, self.size.width).unwrap_or(0.0),
            fraction(point.y, self.size.height).unwrap_or(0.0),
        )
    }

    pub fn cursor_style(&self) -> &CursorStyle {
        &self.cursor
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.visible = visible;
    }

    pub fn set_cursor_width(&mut self, width: Component) {
        self.cursor.width = width;
    }

    /// The cursor at the current position, if it is visible.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
            .visible
            .then(|| Cursor::circle(&self.cursor, self.position))
    }

    fn is_empty(&self) -> bool {
        fraction(0.0, self.size.width).is_none() || fraction(0.0, self.size.height).is_none()
    }

    fn change_saturation(&mut self, saturation: Component) -> Changes {
        let saturation = clamp(saturation, 0.0, 1.0);
        let old = self.saturation;
        self.saturation = saturation;
        if saturation == old {
            return Changes::empty();
        }
        self.notifier.notify(Event::SaturationChanged(saturation));
        Changes::SATURATION
    }

    fn change_value(&mut self, value: Component) -> Changes {
        let value = clamp(value, 0.0, 1.0);
        let old = self.value;
        self.value = value;
        if value == old {
            return Changes::empty();
        }
        self.notifier.notify(Event::ValueChanged(value));
        Changes::VALUE
    }
}
