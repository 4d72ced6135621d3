//! The composed picker: a saturation/value panel next to a hue bar.

use std::fmt;

use crate::attributes::PickerAttributes;
use crate::color::{Argb, Component};
use crate::cursor::Cursor;
use crate::event::{Changes, Event, TouchAction};
use crate::hsv::Hsv;
use crate::hue_bar::HueBar;
use crate::layout::{Layout, Order, Orientation};
use crate::math::{Point, Size};
use crate::panel::SaturationValuePanel;

/// Receives the picker and an [`Event::ColorPicked`] carrying the composed
/// color every time that color changes.
pub type PickerListener = Box<dyn FnMut(&ColorPicker, Event)>;

/// A [`SaturationValuePanel`] and a [`HueBar`] kept in sync on hue, plus an
/// alpha channel.
///
/// Construction gives a white, opaque picker without a size. Call
/// [`ColorPicker::configure`] once the bounds are known.
pub struct ColorPicker {
    panel: SaturationValuePanel,
    bar: HueBar,
    alpha: u8,
    orientation: Orientation,
    order: Order,
    bounds: Size,
    panel_weight: Component,
    bar_weight: Component,
    layout: Layout,
    listener: Option<PickerListener>,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPicker {
    pub fn new() -> Self {
        let defaults = PickerAttributes::default();

        let mut bar = HueBar::new();
        bar.set_orientation(defaults.orientation.cross());

        Self {
            panel: SaturationValuePanel::new(),
            bar,
            alpha: defaults.alpha,
            orientation: defaults.orientation,
            order: defaults.order,
            bounds: Size::zero(),
            panel_weight: defaults.color_rect_weight,
            bar_weight: defaults.hue_rect_weight,
            layout: Layout::split(
                Size::zero(),
                defaults.orientation,
                defaults.order,
                defaults.color_rect_weight,
                defaults.hue_rect_weight,
            ),
            listener: None,
        }
    }

    /// Apply `attributes` and lay the picker out inside `bounds`. Initial
    /// color state is applied last, so the listener sees the changes it
    /// causes.
    pub fn configure(&mut self, attributes: &PickerAttributes, bounds: Size) {
        self.set_cursor_visible(attributes.cursor_visible);
        self.set_cursor_width(attributes.cursor_width);
        self.set_cursor_radius(attributes.cursor_radius);

        self.panel_weight = attributes.color_rect_weight;
        self.bar_weight = attributes.hue_rect_weight;
        self.orientation = attributes.orientation;
        self.order = attributes.order;
        self.bar.set_orientation(attributes.orientation.cross());
        self.bounds = bounds;
        self.relayout();

        self.alpha = attributes.alpha;
        self.set_hue(attributes.hue);
        self.set_saturation(attributes.saturation);
        self.set_value(attributes.value);
    }

    /// Set the listener that is called whenever the composed color changes.
    pub fn set_listener(&mut self, listener: Option<PickerListener>) {
        self.listener = listener;
    }

    pub fn panel(&self) -> &SaturationValuePanel {
        &self.panel
    }

    pub fn bar(&self) -> &HueBar {
        &self.bar
    }

    /// Lay the picker out again inside new bounds.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.relayout();
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Where the panel and the bar currently sit.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Arrange the panel and bar along `orientation`. The bar always runs
    /// along the other axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.bar.set_orientation(orientation.cross());
        self.relayout();
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
        self.relayout();
    }

    /// Put the panel before the bar.
    pub fn ascending(&mut self) {
        self.set_order(Order::Ascending);
    }

    /// Put the bar before the panel.
    pub fn descending(&mut self) {
        self.set_order(Order::Descending);
    }

    /// Swap the panel and the bar.
    pub fn reverse(&mut self) {
        self.set_order(self.order.reversed());
    }

    /// Set the share of the main axis given to the panel and the bar.
    pub fn set_weights(&mut self, panel_weight: Component, bar_weight: Component) {
        self.panel_weight = panel_weight;
        self.bar_weight = bar_weight;
        self.relayout();
    }

    /// The composed color, with the stored alpha.
    pub fn color(&self) -> Argb {
        Hsv::new(self.bar.hue(), self.panel.saturation(), self.panel.value()).to_argb(self.alpha)
    }

    /// Take alpha, hue, saturation and value from `color`.
    pub fn set_color(&mut self, color: Argb) {
        self.alpha = color.alpha();
        let hsv = Hsv::from_argb(color);

        self.panel.set_hue(hsv.hue);
        let changes = self.bar.set_hue(hsv.hue);
        self.propagate(changes);

        let changes = self.panel.set_saturation(hsv.saturation);
        self.propagate(changes);

        let changes = self.panel.set_value(hsv.value);
        self.propagate(changes);
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Set the alpha channel. The panel and the bar are not touched and no
    /// listener is called.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    pub fn hue(&self) -> Component {
        self.bar.hue()
    }

    pub fn set_hue(&mut self, hue: Component) {
        self.panel.set_hue(hue);
        let changes = self.bar.set_hue(hue);
        self.propagate(changes);
    }

    pub fn saturation(&self) -> Component {
        self.panel.saturation()
    }

    pub fn set_saturation(&mut self, saturation: Component) {
        let changes = self.panel.set_saturation(saturation);
        self.propagate(changes);
    }

    pub fn value(&self) -> Component {
        self.panel.value()
    }

    pub fn set_value(&mut self, value: Component) {
        let changes = self.panel.set_value(value);
        self.propagate(changes);
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.panel.cursor_style().visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.panel.set_cursor_visible(visible);
        self.bar.set_cursor_visible(visible);
    }

    pub fn cursor_width(&self) -> Component {
        self.panel.cursor_style().width
    }

    pub fn set_cursor_width(&mut self, width: Component) {
        self.panel.set_cursor_width(width);
        self.bar.set_cursor_width(width);
    }

    /// Corner radius of the hue bar cursor.
    pub fn set_cursor_radius(&mut self, radius: Component) {
        self.bar.set_cursor_radius(radius);
    }

    /// Handle a touch on the panel, in the panel's own coordinates.
    pub fn touch_panel(&mut self, action: TouchAction, point: Point) -> Changes {
        let changes = self.panel.touch(action, point);
        self.propagate(changes);
        changes
    }

    /// Handle a touch on the bar, in the bar's own coordinates.
    pub fn touch_bar(&mut self, action: TouchAction, point: Point) -> Changes {
        let changes = self.bar.touch(action, point);
        self.propagate(changes);
        changes
    }

    /// The color drawn at `point`, in picker coordinates. `None` outside of
    /// both children.
    pub fn color_at(&self, point: Point) -> Option<Argb> {
        if self.layout.panel.contains(point) {
            let local = point - self.layout.panel.origin.to_vector();
            return Some(self.panel.color_at(local));
        }
        if self.layout.bar.contains(point) {
            let local = point - self.layout.bar.origin.to_vector();
            return Some(self.bar.color_at(self.bar.orientation().coordinate(local)));
        }
        None
    }

    /// The visible cursors, in picker coordinates.
    pub fn cursors(&self) -> Vec<Cursor> {
        let panel = self
            .panel
            .cursor()
            .map(|c| c.translate(self.layout.panel.origin));
        let bar = self.bar.cursor().map(|c| c.translate(self.layout.bar.origin));
        panel.into_iter().chain(bar).collect()
    }

    fn relayout(&mut self) {
        self.layout = Layout::split(
            self.bounds,
            self.orientation,
            self.order,
            self.panel_weight,
            self.bar_weight,
        );
        self.panel.set_size(self.layout.panel.size);
        self.bar.set_size(self.layout.bar.size);
    }

    /// React to changes of the panel or the bar. Every change is reported on
    /// its own, after the change has been stored.
    fn propagate(&mut self, changes: Changes) {
        if changes.contains(Changes::HUE) {
            self.panel.set_hue(self.bar.hue());
            self.color_picked();
        }
        if changes.contains(Changes::SATURATION) {
            self.color_picked();
        }
        if changes.contains(Changes::VALUE) {
            self.color_picked();
        }
    }

    fn color_picked(&mut self) {
        let event = Event::ColorPicked(self.color());
        log::trace!("{event:?}");
        if let Some(mut listener) = self.listener.take() {
            listener(self, event);
            self.listener = Some(listener);
        }
    }
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &self.color())
            .field("orientation", &self.orientation)
            .field("order", &self.order)
            .field("layout", &self.layout)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
