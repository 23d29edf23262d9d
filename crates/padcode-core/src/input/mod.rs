//! Input sources for sequence recognition.
//!
//! A recognizer pulls exactly one sample per tick from an [`InputSource`].
//! Sources are read through `&self`: the host latches the device state
//! once per tick and the recognizer only observes it, so reading twice
//! within a tick always yields the same sample.
//!
//! - [`GamePad`]: button-mask source with press edge detection
//! - [`LatchedInput`]: generic one-sample latch for any code type

mod button;
mod pad;

use std::cell::Cell;

pub use button::*;
pub use pad::*;

/// Something that can report the current tick's input code.
pub trait InputSource<C> {
    /// Current sample, or `None` when nothing was pressed this tick.
    ///
    /// Must not block and must not re-sample the device.
    fn sample_input(&self) -> Option<C>;
}

/// Holds one sample per tick for arbitrary code types.
#[derive(Debug)]
pub struct LatchedInput<C: Copy> {
    sample: Cell<Option<C>>,
}

impl<C: Copy> LatchedInput<C> {
    pub fn new() -> Self {
        Self {
            sample: Cell::new(None),
        }
    }

    /// Latch this tick's sample
    pub fn set(&self, sample: Option<C>) {
        self.sample.set(sample);
    }

    pub fn clear(&self) {
        self.sample.set(None);
    }
}

impl<C: Copy> Default for LatchedInput<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> InputSource<C> for LatchedInput<C> {
    fn sample_input(&self) -> Option<C> {
        self.sample.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latched_input() {
        let input = LatchedInput::new();
        assert_eq!(input.sample_input(), None);

        input.set(Some('x'));
        assert_eq!(input.sample_input(), Some('x'));
        assert_eq!(input.sample_input(), Some('x'));

        input.clear();
        assert_eq!(input.sample_input(), None);
    }
}
