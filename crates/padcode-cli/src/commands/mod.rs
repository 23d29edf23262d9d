//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod buttons;
pub mod replay;
pub mod watch;
