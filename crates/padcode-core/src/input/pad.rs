use std::cell::Cell;

use super::{ButtonMask, InputSource};

/// A polled game pad.
///
/// The host writes the device state once per tick, either as the full set
/// of held buttons ([`GamePad::update`]) or as the buttons pressed since
/// the last tick ([`GamePad::press`]). Recognizers only ever see the
/// frame mask: buttons that went down this tick.
#[derive(Debug, Default)]
pub struct GamePad {
    held: Cell<ButtonMask>,
    frame: Cell<ButtonMask>,
}

impl GamePad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the held buttons for this tick.
    ///
    /// A button held across several ticks only appears in the frame mask
    /// of the tick it went down.
    pub fn update(&self, held: ButtonMask) {
        let previous = self.held.replace(held);
        self.frame.set(held.difference(previous));
    }

    /// Latch buttons pressed this tick, for hosts that only receive
    /// key-press events and never see a release.
    pub fn press(&self, pressed: ButtonMask) {
        self.held.set(ButtonMask::NONE);
        self.frame.set(pressed);
    }

    pub fn held(&self) -> ButtonMask {
        self.held.get()
    }

    pub fn frame(&self) -> ButtonMask {
        self.frame.get()
    }

    /// Forget all state, e.g. when the device is unplugged
    pub fn clear(&self) {
        self.held.set(ButtonMask::NONE);
        self.frame.set(ButtonMask::NONE);
    }
}

impl InputSource<ButtonMask> for GamePad {
    fn sample_input(&self) -> Option<ButtonMask> {
        let frame = self.frame.get();
        (!frame.is_empty()).then_some(frame)
    }
}
