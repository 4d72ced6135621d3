//! Change notifications sent by the panel, the hue bar and the picker.

use bitflags::bitflags;

use crate::color::{Argb, Component};

/// A change in one of the picker's components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The saturation of the panel changed to the given value.
    SaturationChanged(Component),
    /// The value of the panel changed to the given value.
    ValueChanged(Component),
    /// The hue of the bar changed to the given angle.
    HueChanged(Component),
    /// The composed color of the picker changed.
    ColorPicked(Argb),
}

/// The phase of a touch on the panel or the hue bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TouchAction {
    /// A pointer went down.
    Down,
    /// A pointer moved while down.
    Move,
    /// A pointer went up.
    Up,
    /// The gesture was aborted. Ignored.
    Cancel,
}

impl TouchAction {
    /// Whether the action moves the cursor to the touched point.
    pub fn tracks(self) -> bool {
        !matches!(self, TouchAction::Cancel)
    }
}

bitflags! {
    /// The set of components that changed as a result of a single call.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changes : u8 {
        /// Set when the hue changed.
        const HUE = 1 << 0;
        /// Set when the saturation changed.
        const SATURATION = 1 << 1;
        /// Set when the value changed.
        const VALUE = 1 << 2;
    }
}

/// A single subscriber callback.
pub type Listener = Box<dyn FnMut(Event)>;

/// Holds at most one [`Listener`] and invokes it synchronously.
#[derive(Default)]
pub(crate) struct Notifier {
    listener: Option<Listener>,
}

impl Notifier {
    pub fn set(&mut self, listener: Option<Listener>) {
        self.listener = listener;
    }

    pub fn notify(&mut self, event: Event) {
        log::trace!("{event:?}");
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
