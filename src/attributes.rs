//! Initialization options of a [`ColorPicker`](crate::ColorPicker).

use serde::{Deserialize, Serialize};

use crate::color::Component;
use crate::cursor::{DEFAULT_CURSOR_RADIUS, DEFAULT_CURSOR_WIDTH};
use crate::layout::{Order, Orientation};

/// Options applied by [`ColorPicker::configure`](crate::ColorPicker::configure).
///
/// Every field has a default, so a partial document deserializes fine. Field
/// names are snake_case, with camelCase aliases.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PickerAttributes {
    /// Whether cursors are drawn on the panel and the hue bar.
    #[serde(alias = "cursorVisible")]
    pub cursor_visible: bool,
    /// Stroke width of both cursors, never drawn thinner than
    /// [`DEFAULT_CURSOR_WIDTH`].
    #[serde(alias = "cursorWidth")]
    pub cursor_width: Component,
    /// Corner radius of the hue bar cursor.
    #[serde(alias = "cursorRadius")]
    pub cursor_radius: Component,
    /// The axis the panel and the hue bar are arranged along.
    pub orientation: Orientation,
    /// Whether the panel or the hue bar comes first.
    pub order: Order,
    /// Initial hue in degrees.
    pub hue: Component,
    /// Initial saturation.
    pub saturation: Component,
    /// Initial value.
    pub value: Component,
    /// Initial alpha.
    pub alpha: u8,
    /// Share of the main axis given to the hue bar.
    #[serde(alias = "hueRectWeight")]
    pub hue_rect_weight: Component,
    /// Share of the main axis given to the panel.
    #[serde(alias = "colorRectWeight")]
    pub color_rect_weight: Component,
}

impl Default for PickerAttributes {
    fn default() -> Self {
        Self {
            cursor_visible: true,
            cursor_width: DEFAULT_CURSOR_WIDTH,
            cursor_radius: DEFAULT_CURSOR_RADIUS,
            orientation: Orientation::Horizontal,
            order: Order::Ascending,
            hue: 0.0,
            saturation: 0.0,
            value: 1.0,
            alpha: 0xFF,
            hue_rect_weight: 1.0,
            color_rect_weight: 9.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let attributes: PickerAttributes = serde_json::from_str("{}").unwrap();
        assert_eq!(attributes, PickerAttributes::default());
    }

    #[test]
    fn camel_case_aliases() {
        let attributes: PickerAttributes = serde_json::from_str(
            r#"{
                "cursorVisible": false,
                "cursorWidth": 5.0,
                "hueRectWeight": 2.0,
                "orientation": "vertical",
                "order": "descending",
                "hue": 120.0
            }"#,
        )
        .unwrap();
        assert!(!attributes.cursor_visible);
        assert_eq!(attributes.cursor_width, 5.0);
        assert_eq!(attributes.hue_rect_weight, 2.0);
        assert_eq!(attributes.color_rect_weight, 9.0);
        assert_eq!(attributes.orientation, Orientation::Vertical);
        assert_eq!(attributes.order, Order::Descending);
        assert_eq!(attributes.hue, 120.0);
        assert_eq!(attributes.value, 1.0);
    }

    #[test]
    fn serialize_uses_snake_case() {
        let json = serde_json::to_value(PickerAttributes::default()).unwrap();
        assert_eq!(json["cursor_visible"], true);
        assert_eq!(json["orientation"], "horizontal");
        assert_eq!(json["alpha"], 255);
    }
}
