use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

/// Game pad buttons, valued as their bit in the controller's button word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum PadButton {
    #[strum(to_string = "DPAD_LEFT", serialize = "LEFT")]
    DpadLeft = 0x0001,
    #[strum(to_string = "DPAD_RIGHT", serialize = "RIGHT")]
    DpadRight = 0x0002,
    #[strum(to_string = "DPAD_DOWN", serialize = "DOWN")]
    DpadDown = 0x0004,
    #[strum(to_string = "DPAD_UP", serialize = "UP")]
    DpadUp = 0x0008,
    #[strum(to_string = "Z")]
    Z = 0x0010,
    #[strum(to_string = "R")]
    R = 0x0020,
    #[strum(to_string = "L")]
    L = 0x0040,
    #[strum(to_string = "A")]
    A = 0x0100,
    #[strum(to_string = "B")]
    B = 0x0200,
    #[strum(to_string = "X")]
    X = 0x0400,
    #[strum(to_string = "Y")]
    Y = 0x0800,
    #[strum(to_string = "START")]
    Start = 0x1000,
}

impl PadButton {
    pub fn from_bit(bit: u16) -> Option<Self> {
        Self::from_repr(bit)
    }

    pub fn bit(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn is_dpad(self) -> bool {
        matches!(
            self,
            Self::DpadLeft | Self::DpadRight | Self::DpadDown | Self::DpadUp
        )
    }
}

/// Set of buttons pressed during one frame.
///
/// This is the input code the pad feeds to a recognizer: a single button
/// is a one-bit mask, a chord is several bits and only equals the same
/// chord. The empty mask means "no input".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ButtonMask(u16);

impl ButtonMask {
    pub const NONE: Self = Self(0);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, button: PadButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Buttons in `self` that are not in `other`
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate the named buttons in this mask, lowest bit first
    pub fn buttons(self) -> impl Iterator<Item = PadButton> {
        PadButton::iter().filter(move |b| self.contains(*b))
    }

    /// The button this mask holds, if it holds exactly one
    pub fn single(self) -> Option<PadButton> {
        if self.0.count_ones() == 1 {
            PadButton::from_bit(self.0)
        } else {
            None
        }
    }

    /// Bits that do not correspond to any named button
    fn unknown_bits(self) -> u16 {
        PadButton::iter().fold(self.0, |bits, b| bits & !b.bit())
    }
}

impl From<PadButton> for ButtonMask {
    fn from(button: PadButton) -> Self {
        Self(button.bit())
    }
}

impl BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<PadButton> for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: PadButton) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for PadButton {
    type Output = ButtonMask;

    fn bitor(self, rhs: Self) -> ButtonMask {
        ButtonMask(self.bit() | rhs.bit())
    }
}

impl fmt::Display for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }

        let mut parts: Vec<String> = self.buttons().map(|b| b.name().to_string()).collect();
        let unknown = self.unknown_bits();
        if unknown != 0 {
            parts.push(format!("{:#06x}", unknown));
        }
        f.write_str(&parts.join("+"))
    }
}

impl FromStr for ButtonMask {
    type Err = Error;

    /// Parse `"B"`, `"B+A"` or raw bits such as `"0x8000"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::UnknownButton(String::new()));
        }

        s.split('+').try_fold(Self::NONE, |mask, part| {
            let part = part.trim();
            if let Ok(button) = part.parse::<PadButton>() {
                return Ok(mask | button);
            }
            part.strip_prefix("0x")
                .or_else(|| part.strip_prefix("0X"))
                .and_then(|hex| u16::from_str_radix(hex, 16).ok())
                .map(|bits| mask | Self(bits))
                .ok_or_else(|| Error::UnknownButton(part.to_string()))
        })
    }
}

impl TryFrom<String> for ButtonMask {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ButtonMask> for String {
    fn from(mask: ButtonMask) -> Self {
        mask.to_string()
    }
}
