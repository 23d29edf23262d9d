//! Prelude module for convenient imports
//!
//! ```ignore
//! use padcode_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Recognition: `SequenceRecognizer`, `Step`, `callback`
//! - Input: `InputSource`, `GamePad`, `LatchedInput`, `PadButton`, `ButtonMask`
//! - Built-in sequences: `DEBUG_MODE_CODE`, `debug_mode_sequence`
//! - Error handling: `Error`, `Result`

// Recognition
pub use crate::recognizer::{
    CompletionCallback, SequenceRecognizer, SharedInput, Step, callback,
};

// Input
pub use crate::input::{ButtonMask, GamePad, InputSource, LatchedInput, PadButton};

// Built-in sequences
pub use crate::sequences::{DEBUG_MODE_CODE, debug_mode_sequence};

// Error handling
pub use crate::error::{Error, Result};
