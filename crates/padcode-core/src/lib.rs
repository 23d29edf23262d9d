//! # padcode-core
//!
//! Core library for recognizing input sequences in a polled input stream.
//!
//! This crate provides:
//! - `SequenceRecognizer`, a per-tick state machine that fires a callback
//!   whenever a fixed sequence of input codes is entered
//! - Game pad input (named buttons, per-frame press masks)
//! - Built-in sequences such as the debug-mode gesture

pub mod error;
pub mod input;
pub mod prelude;
pub mod recognizer;
pub mod sequences;

pub use error::{Error, Result};
pub use input::{ButtonMask, GamePad, InputSource, LatchedInput, PadButton};
pub use recognizer::{
    CompletionCallback, SequenceRecognizer, SequenceRecognizerBuilder, SharedInput, Step,
    callback,
};
pub use sequences::{DEBUG_MODE_CODE, debug_mode_sequence};
