use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rect_picker::{
    Argb, Changes, ColorPicker, Component, Event, HueBar, Orientation, PickerAttributes, Point,
    SaturationValuePanel, Size, TouchAction,
};

fn picker(attributes: &PickerAttributes) -> ColorPicker {
    let mut picker = ColorPicker::new();
    picker.configure(attributes, Size::new(500.0, 400.0));
    picker
}

#[test]
fn fresh_picker_is_white() {
    let picker = picker(&PickerAttributes::default());
    assert_eq!(picker.color(), Argb(0xFFFFFFFF));
}

#[test]
fn opaque_green() {
    let mut picker = picker(&PickerAttributes::default());
    picker.set_color(Argb(0xFF00FF00));
    assert_eq!(picker.alpha(), 255);
    assert_abs_diff_eq!(picker.hue(), 120.0, epsilon = 1e-4);
    assert_abs_diff_eq!(picker.saturation(), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(picker.value(), 1.0, epsilon = 1e-6);
    assert_eq!(picker.color(), Argb(0xFF00FF00));
}

#[test]
fn bar_runs_across_the_picker() {
    let mut picker = picker(&PickerAttributes::default());
    picker.set_orientation(Orientation::Horizontal);
    assert_eq!(picker.bar().orientation(), Orientation::Vertical);
    picker.set_orientation(Orientation::Vertical);
    assert_eq!(picker.bar().orientation(), Orientation::Horizontal);
}

#[test]
fn vertical_bar_positions() {
    let mut bar = HueBar::new();
    bar.set_orientation(Orientation::Vertical);
    bar.set_size(Size::new(30.0, 250.0));
    bar.set_position(0.0);
    assert_eq!(bar.hue(), 360.0);
    bar.set_position(250.0);
    assert_eq!(bar.hue(), 0.0);
}

#[test]
fn unchanged_saturation_is_not_reported() {
    let mut panel = SaturationValuePanel::new();
    panel.set_size(Size::new(100.0, 100.0));
    let events = Rc::new(RefCell::new(vec![]));
    let sink = events.clone();
    panel.set_listener(Some(Box::new(move |e: Event| sink.borrow_mut().push(e))));

    panel.set_saturation(0.3);
    panel.set_saturation(0.3);
    assert_eq!(*events.borrow(), vec![Event::SaturationChanged(0.3)]);
}

#[test]
fn dragging_across_the_picker() {
    let mut picker = picker(&PickerAttributes::default());
    let picked = Rc::new(RefCell::new(vec![]));
    let sink = picked.clone();
    picker.set_listener(Some(Box::new(move |_: &ColorPicker, event: Event| {
        sink.borrow_mut().push(event)
    })));

    let bar = picker.bar().size();
    picker.touch_bar(TouchAction::Down, Point::new(0.0, bar.height * 2.0 / 3.0));
    picker.touch_bar(TouchAction::Up, Point::new(0.0, bar.height * 2.0 / 3.0));

    let panel = picker.panel().size();
    picker.touch_panel(TouchAction::Down, Point::new(0.0, 0.0));
    let changes = picker.touch_panel(TouchAction::Move, Point::new(panel.width, 0.0));
    assert_eq!(changes, Changes::SATURATION);

    // One notification for the hue, one for the saturation.
    assert_eq!(
        *picked.borrow(),
        vec![
            Event::ColorPicked(Argb(0xFFFFFFFF)),
            Event::ColorPicked(Argb(0xFF00FF00)),
        ]
    );
    assert_eq!(picker.color(), Argb(0xFF00FF00));
}

#[test]
fn attributes_from_json() {
    let attributes: PickerAttributes = serde_json::from_str(
        r#"{ "orientation": "vertical", "hue": 240.0, "saturation": 1.0, "alpha": 128 }"#,
    )
    .unwrap();
    let picker = picker(&attributes);
    assert_eq!(picker.color(), Argb(0x800000FF));
    assert_eq!(picker.bar().orientation(), Orientation::Horizontal);
}

proptest! {
    #[test]
    fn hue_is_clamped(hue in -1000.0..1000.0 as Component) {
        let mut picker = picker(&PickerAttributes::default());
        picker.set_hue(hue);
        let expected = hue.clamp(0.0, 360.0);
        prop_assert_eq!(picker.hue(), expected);
        prop_assert_eq!(picker.panel().hue(), expected);
    }

    #[test]
    fn alpha_leaves_hsv_alone(alpha in any::<u8>(), color in any::<u32>()) {
        let mut picker = picker(&PickerAttributes::default());
        picker.set_color(Argb(color));
        let (h, s, v) = (picker.hue(), picker.saturation(), picker.value());
        picker.set_alpha(alpha);
        prop_assert_eq!((picker.hue(), picker.saturation(), picker.value()), (h, s, v));
        prop_assert_eq!(picker.color().alpha(), alpha);
    }
}
