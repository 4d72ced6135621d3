//! rect-picker models a rectangular HSV color picker: a saturation/value
//! panel next to a hue bar. It maps positions to color components and back,
//! keeps the two halves in sync and reports every change of the composed
//! color. Drawing is left to the caller; the gradients and cursors to draw are
//! exposed as plain data.
//!
//! ```rust
//! use rect_picker::{Argb, ColorPicker, PickerAttributes, Size};
//!
//! let mut picker = ColorPicker::new();
//! picker.configure(&PickerAttributes::default(), Size::new(400.0, 300.0));
//! picker.set_color(Argb(0xFF00FF00));
//! assert_eq!(picker.color(), Argb(0xFF00FF00));
//! ```

mod attributes;
mod color;
mod cursor;
mod event;
mod gradient;
mod hsv;
mod hue_bar;
mod layout;
mod math;
mod panel;
mod picker;
mod rgb;

pub use attributes::PickerAttributes;
pub use color::{Argb, Component, Components};
pub use cursor::{Cursor, CursorStyle, DEFAULT_CURSOR_RADIUS, DEFAULT_CURSOR_WIDTH};
pub use event::{Changes, Event, Listener, TouchAction};
pub use gradient::{panel_color, LinearGradient};
pub use hsv::Hsv;
pub use hue_bar::{HueBar, HUE_STOPS};
pub use layout::{Layout, Order, Orientation};
pub use math::{Point, Rect, Size};
pub use panel::SaturationValuePanel;
pub use picker::{ColorPicker, PickerListener};
pub use rgb::Rgb;
