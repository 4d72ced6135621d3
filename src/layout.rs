//! Arrangement of the panel and the hue bar inside the picker.

use serde::{Deserialize, Serialize};

use crate::color::Component;
use crate::math::{Point, Rect, Size};

/// The axis along which children are arranged, or along which a hue bar maps
/// positions to hues.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The length of `size` along this axis.
    pub fn extent(self, size: Size) -> Component {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// The coordinate of `point` along this axis.
    pub fn coordinate(self, point: Point) -> Component {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

/// The visual order of the panel and the hue bar.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// The panel comes first, then the hue bar.
    #[default]
    Ascending,
    /// The hue bar comes first, then the panel.
    Descending,
}

impl Order {
    /// The opposite order.
    pub fn reversed(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// Where the panel and the hue bar sit, in picker coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Bounds of the saturation/value panel.
    pub panel: Rect,
    /// Bounds of the hue bar.
    pub bar: Rect,
}

impl Layout {
    /// Split `bounds` along `orientation`, giving each child a share of the
    /// main axis proportional to its weight. Negative weights count as zero
    /// and two zero weights split the space evenly.
    pub fn split(
        bounds: Size,
        orientation: Orientation,
        order: Order,
        panel_weight: Component,
        bar_weight: Component,
    ) -> Self {
        let panel_weight = panel_weight.max(0.0);
        let bar_weight = bar_weight.max(0.0);
        let total = panel_weight + bar_weight;
        let share = if total > 0.0 {
            panel_weight / total
        } else {
            0.5
        };

        let main = orientation.extent(bounds).max(0.0);
        let panel_main = main * share;
        let bar_main = main - panel_main;

        let (first, second) = match order {
            Order::Ascending => (panel_main, bar_main),
            Order::Descending => (bar_main, panel_main),
        };

        let (first, second) = match orientation {
            Orientation::Horizontal => (
                Rect::new(Point::zero(), Size::new(first, bounds.height)),
                Rect::new(Point::new(first, 0.0), Size::new(second, bounds.height)),
            ),
            Orientation::Vertical => (
                Rect::new(Point::zero(), Size::new(bounds.width, first)),
                Rect::new(Point::new(0.0, first), Size::new(bounds.width, second)),
            ),
        };

        match order {
            Order::Ascending => Layout {
                panel: first,
                bar: second,
            },
            Order::Descending => Layout {
                panel: second,
                bar: first,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_axis() {
        assert_eq!(Orientation::Horizontal.cross(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.cross(), Orientation::Horizontal);
    }

    #[test]
    fn extent_and_coordinate() {
        let size = Size::new(30.0, 40.0);
        assert_eq!(Orientation::Horizontal.extent(size), 30.0);
        assert_eq!(Orientation::Vertical.extent(size), 40.0);
        let point = Point::new(1.0, 2.0);
        assert_eq!(Orientation::Horizontal.coordinate(point), 1.0);
        assert_eq!(Orientation::Vertical.coordinate(point), 2.0);
    }

    #[test]
    fn horizontal_ascending() {
        let layout = Layout::split(
            Size::new(100.0, 50.0),
            Orientation::Horizontal,
            Order::Ascending,
            8.0,
            2.0,
        );
        assert_eq!(
            layout.panel,
            Rect::new(Point::zero(), Size::new(80.0, 50.0))
        );
        assert_eq!(
            layout.bar,
            Rect::new(Point::new(80.0, 0.0), Size::new(20.0, 50.0))
        );
    }

    #[test]
    fn vertical_descending_puts_the_bar_on_top() {
        let layout = Layout::split(
            Size::new(50.0, 100.0),
            Orientation::Vertical,
            Order::Descending,
            9.0,
            1.0,
        );
        assert_eq!(layout.bar, Rect::new(Point::zero(), Size::new(50.0, 10.0)));
        assert_eq!(
            layout.panel,
            Rect::new(Point::new(0.0, 10.0), Size::new(50.0, 90.0))
        );
    }

    #[test]
    fn zero_weights_split_evenly() {
        let layout = Layout::split(
            Size::new(100.0, 10.0),
            Orientation::Horizontal,
            Order::Ascending,
            0.0,
            -1.0,
        );
        assert_eq!(layout.panel.size.width, 50.0);
        assert_eq!(layout.bar.size.width, 50.0);
    }

    #[test]
    fn order_reversed() {
        assert_eq!(Order::Ascending.reversed(), Order::Descending);
        assert_eq!(Order::Descending.reversed(), Order::Ascending);
    }

    #[test]
    fn deserialize_names() {
        let o: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(o, Orientation::Vertical);
        let o: Order = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(o, Order::Descending);
    }
}
