//! Built-in input sequences.

use crate::input::{ButtonMask, PadButton};

/// The debug-mode gesture: up, up, down, down, left, right, left, right,
/// B, A, start.
pub const DEBUG_MODE_CODE: [PadButton; 11] = [
    PadButton::DpadUp,
    PadButton::DpadUp,
    PadButton::DpadDown,
    PadButton::DpadDown,
    PadButton::DpadLeft,
    PadButton::DpadRight,
    PadButton::DpadLeft,
    PadButton::DpadRight,
    PadButton::B,
    PadButton::A,
    PadButton::Start,
];

/// [`DEBUG_MODE_CODE`] as pad frame masks
pub fn debug_mode_sequence() -> Vec<ButtonMask> {
    DEBUG_MODE_CODE.iter().copied().map(ButtonMask::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_sequence() {
        let sequence = debug_mode_sequence();
        assert_eq!(sequence.len(), 11);
        assert_eq!(sequence[0], ButtonMask::from(PadButton::DpadUp));
        assert_eq!(sequence[10], ButtonMask::from(PadButton::Start));
        assert!(sequence.iter().all(|mask| mask.single().is_some()));
    }
}
