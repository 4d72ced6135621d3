//! A bar that maps positions along one axis to hue angles.

use std::sync::LazyLock;

use crate::color::{Argb, Component};
use crate::cursor::{Cursor, CursorStyle};
use crate::event::{Changes, Event, Listener, Notifier, TouchAction};
use crate::gradient::LinearGradient;
use crate::hsv::Hsv;
use crate::layout::Orientation;
use crate::math::{clamp, fraction, Point, Size};

/// Number of hue steps in [`HUE_STOPS`]. Each step covers 30 degrees.
const HUE_STEPS: usize = 12;

/// The colors a hue bar is filled with, from the start of its axis to the
/// end. The hue descends from 359 through 330, 300, ... 30 and back to 359,
/// each with full saturation and value. A hue of exactly 360 is stored as 359
/// so the two ends of the table are not the same degenerate angle.
pub static HUE_STOPS: LazyLock<[Argb; HUE_STEPS + 1]> = LazyLock::new(|| {
    let step = 360 / HUE_STEPS;
    std::array::from_fn(|i| {
        let mut hue = 360 - (i * step) % 360;
        if hue == 360 {
            hue = 359;
        }
        Hsv::new(hue as Component, 1.0, 1.0).to_argb(0xFF)
    })
});

/// Maps a position along its primary axis to a hue in `[0, 360]`. The start
/// of the axis is hue 360 and the end is hue 0.
#[derive(Debug)]
pub struct HueBar {
    size: Size,
    orientation: Orientation,
    hue: Component,
    position: Component,
    cursor: CursorStyle,
    notifier: Notifier,
}

impl Default for HueBar {
    fn default() -> Self {
        Self::new()
    }
}

impl HueBar {
    /// Create a vertical bar with a hue of 0 and no size yet.
    pub fn new() -> Self {
        Self {
            size: Size::zero(),
            orientation: Orientation::Vertical,
            hue: 0.0,
            position: 0.0,
            cursor: CursorStyle::default(),
            notifier: Notifier::default(),
        }
    }

    /// Set the listener that receives [`Event::HueChanged`].
    pub fn set_listener(&mut self, listener: Option<Listener>) {
        self.notifier.set(listener);
    }

    /// The size of the surface the bar is drawn on.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the bar. The cursor position is moved to match the current hue.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.position = self.position_from_hue(self.hue);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switch the axis used for all following mappings.
    ///
    /// The stored position is left as is, so it is stale until the next call
    /// to [`HueBar::set_hue`], [`HueBar::set_position`] or
    /// [`HueBar::set_size`].
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// The length of the axis positions are read from.
    pub fn extent(&self) -> Component {
        self.orientation.extent(self.size)
    }

    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The cursor position along the primary axis.
    pub fn position(&self) -> Component {
        self.position
    }

    /// Set the hue, clamped to `[0, 360]`, and move the cursor to it.
    pub fn set_hue(&mut self, hue: Component) -> Changes {
        let changes = self.change_hue(hue);
        self.position = self.position_from_hue(hue);
        changes
    }

    /// Move the cursor to `position`, clamped to the bar, and take the hue
    /// found there. Does nothing while the bar has no extent.
    pub fn set_position(&mut self, position: Component) -> Changes {
        let extent = self.extent();
        if fraction(position, extent).is_none() {
            log::debug!("ignoring hue bar position {position} on an empty extent");
            return Changes::empty();
        }
        self.position = clamp(position, 0.0, extent);
        self.change_hue(self.hue_from_position(self.position))
    }

    /// Handle a touch at `point`, in the bar's own coordinates.
    pub fn touch(&mut self, action: TouchAction, point: Point) -> Changes {
        if !action.tracks() {
            return Changes::empty();
        }
        self.set_position(self.orientation.coordinate(point))
    }

    /// The hue found at `position`. An empty bar is treated as if the
    /// position was at its start.
    pub fn hue_from_position(&self, position: Component) -> Component {
        let t = fraction(position, self.extent()).unwrap_or(0.0);
        360.0 - t * 360.0
    }

    /// The position of `hue`, clamped to `[0, 360]`.
    pub fn position_from_hue(&self, hue: Component) -> Component {
        let hue = clamp(hue, 0.0, 360.0);
        self.extent() * (1.0 - hue / 360.0)
    }

    /// The color drawn at `position` along the bar.
    pub fn color_at(&self, position: Component) -> Argb {
        let t = fraction(position, self.extent()).unwrap_or(0.0);
        LinearGradient::new(HUE_STOPS.as_slice()).at(t)
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

    pub fn set_cursor_radius(&mut self, radius: Component) {
        self.cursor.radius = radius;
    }

    /// The cursor at the current position, if it is visible.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor.visible.then(|| {
            Cursor::bar(&self.cursor, self.size, self.orientation, self.position)
        })
    }

    fn change_hue(&mut self, hue: Component) -> Changes {
        let hue = clamp(hue, 0.0, 360.0);
        let old = self.hue;
        self.hue = hue;
        if hue == old {
            return Changes::empty();
        }
        self.notifier.notify(Event::HueChanged(hue));
        Changes::HUE
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::assert_component_eq;

    fn bar(size: Size, orientation: Orientation) -> HueBar {
        let mut bar = HueBar::new();
        bar.set_orientation(orientation);
        bar.set_size(size);
        bar
    }

    fn recorded(bar: &mut HueBar) -> Rc<RefCell<Vec<Event>>> {
        let events = Rc::new(RefCell::new(vec![]));
        let sink = events.clone();
        bar.set_listener(Some(Box::new(move |e: Event| sink.borrow_mut().push(e))));
        events
    }

    #[test]
    fn stop_table() {
        let stops = *HUE_STOPS;
        assert_eq!(stops.len(), 13);
        assert_eq!(stops[0], Argb(0xFFFF0004));
        assert_eq!(stops[12], stops[0]);
        assert_eq!(stops[4], Argb(0xFF0000FF));
        assert_eq!(stops[6], Argb(0xFF00FFFF));
        assert_eq!(stops[8], Argb(0xFF00FF00));
        assert_eq!(stops[10], Argb(0xFFFFFF00));
    }

    #[test]
    fn vertical_ends() {
        let mut bar = bar(Size::new(20.0, 200.0), Orientation::Vertical);
        bar.set_position(0.0);
        assert_eq!(bar.hue(), 360.0);
        bar.set_position(200.0);
        assert_eq!(bar.hue(), 0.0);
        bar.set_position(50.0);
        assert_component_eq!(bar.hue(), 270.0);
    }

    #[test]
    fn horizontal_reads_the_width() {
        let mut bar = bar(Size::new(100.0, 10.0), Orientation::Horizontal);
        bar.set_position(25.0);
        assert_component_eq!(bar.hue(), 270.0);
        bar.touch(TouchAction::Move, Point::new(75.0, 1000.0));
        assert_component_eq!(bar.hue(), 90.0);
    }

    #[test]
    fn position_is_clamped() {
        let mut bar = bar(Size::new(20.0, 200.0), Orientation::Vertical);
        bar.set_position(-50.0);
        assert_eq!(bar.position(), 0.0);
        assert_eq!(bar.hue(), 360.0);
        bar.set_position(500.0);
        assert_eq!(bar.position(), 200.0);
        assert_eq!(bar.hue(), 0.0);
    }

    #[test]
    fn set_hue_clamps_and_moves_the_cursor() {
        let mut bar = bar(Size::new(20.0, 360.0), Orientation::Vertical);
        bar.set_hue(90.0);
        assert_eq!(bar.position(), 270.0);
        bar.set_hue(-10.0);
        assert_eq!(bar.hue(), 0.0);
        assert_eq!(bar.position(), 360.0);
        bar.set_hue(1000.0);
        assert_eq!(bar.hue(), 360.0);
        assert_eq!(bar.position(), 0.0);
    }

    #[test]
    fn notifies_only_on_change() {
        let mut bar = bar(Size::new(20.0, 360.0), Orientation::Vertical);
        let events = recorded(&mut bar);

        assert_eq!(bar.set_hue(0.0), Changes::empty());
        assert_eq!(bar.set_hue(270.0), Changes::HUE);
        assert_eq!(bar.set_hue(270.0), Changes::empty());
        assert_eq!(bar.set_position(90.0), Changes::empty());
        assert_eq!(bar.set_position(0.0), Changes::HUE);

        assert_eq!(
            *events.borrow(),
            vec![Event::HueChanged(270.0), Event::HueChanged(360.0)]
        );
    }

    #[test]
    fn cancel_is_ignored() {
        let mut bar = bar(Size::new(20.0, 360.0), Orientation::Vertical);
        assert_eq!(
            bar.touch(TouchAction::Cancel, Point::new(0.0, 0.0)),
            Changes::empty()
        );
        assert_eq!(bar.hue(), 0.0);
    }

    #[test]
    fn empty_bar_ignores_positions() {
        let mut bar = HueBar::new();
        let events = recorded(&mut bar);
        assert_eq!(bar.set_position(10.0), Changes::empty());
        assert_eq!(bar.hue(), 0.0);
        assert_eq!(bar.position(), 0.0);
        assert_eq!(bar.hue_from_position(10.0), 360.0);
        assert!(events.borrow().is_empty());

        // Hues can still be set without a surface.
        assert_eq!(bar.set_hue(42.0), Changes::HUE);
        assert_eq!(bar.position(), 0.0);
    }

    #[test]
    fn orientation_change_leaves_the_position_stale() {
        let mut bar = bar(Size::new(100.0, 200.0), Orientation::Vertical);
        bar.set_hue(180.0);
        assert_eq!(bar.position(), 100.0);

        bar.set_orientation(Orientation::Horizontal);
        // Still the vertical position; the horizontal one would be 50.
        assert_eq!(bar.position(), 100.0);
        assert_eq!(bar.position_from_hue(180.0), 50.0);
        assert_eq!(bar.hue(), 180.0);
    }

    #[test]
    fn resize_follows_the_hue() {
        let mut bar = bar(Size::new(10.0, 100.0), Orientation::Vertical);
        bar.set_hue(90.0);
        assert_eq!(bar.position(), 75.0);
        bar.set_size(Size::new(10.0, 200.0));
        assert_eq!(bar.position(), 150.0);
        assert_eq!(bar.hue(), 90.0);
    }

    #[test]
    fn colors_along_the_bar() {
        let bar = bar(Size::new(10.0, 120.0), Orientation::Vertical);
        assert_eq!(bar.color_at(0.0), Argb(0xFFFF0004));
        assert_eq!(bar.color_at(40.0), Argb(0xFF0000FF));
        assert_eq!(bar.color_at(80.0), Argb(0xFF00FF00));
        assert_eq!(bar.color_at(120.0), Argb(0xFFFF0004));
    }

    #[test]
    fn cursor_visibility() {
        let mut bar = bar(Size::new(10.0, 120.0), Orientation::Vertical);
        assert!(bar.cursor().is_some());
        bar.set_cursor_visible(false);
        assert_eq!(bar.cursor(), None);
    }
}
