//! Input sequence recognition.
//!
//! [`SequenceRecognizer`] watches a polled input stream for one fixed,
//! ordered sequence of codes. The host calls [`SequenceRecognizer::advance`]
//! once per tick; every tick consumes exactly one sample:
//!
//! - no input: progress is kept, so buttons can be released between presses
//! - the expected code: progress moves one step forward
//! - any other code: progress drops back to zero
//!
//! When the last code matches, the completion callback runs inline and the
//! recognizer starts over from the first code.
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use padcode_core::prelude::*;
//!
//! let pad = Rc::new(GamePad::new());
//! let mut recognizer = SequenceRecognizer::builder()
//!     .sequence(debug_mode_sequence())
//!     .input_source(Rc::clone(&pad))
//!     .on_complete(|_| println!("debug mode unlocked"))
//!     .build()?;
//!
//! loop {
//!     pad.update(poll_device());
//!     recognizer.advance()?;
//! }
//! ```

mod builder;

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::input::InputSource;

pub use builder::SequenceRecognizerBuilder;

/// Shared handle to the source a recognizer samples every tick
pub type SharedInput<C> = Rc<dyn InputSource<C>>;

/// Callback fired once per completed sequence
pub type CompletionCallback<C> = Rc<dyn Fn(&SequenceRecognizer<C>)>;

/// Wrap a closure as a [`CompletionCallback`]
pub fn callback<C, F>(f: F) -> CompletionCallback<C>
where
    F: Fn(&SequenceRecognizer<C>) + 'static,
{
    Rc::new(f)
}

/// Outcome of a single [`SequenceRecognizer::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No input this tick; progress kept
    Idle,
    /// Expected code matched; `progress` codes matched so far
    Matched { progress: usize },
    /// Wrong code; `lost` matched codes were discarded
    Reset { lost: usize },
    /// Last code matched and the callback ran
    Completed,
}

impl Step {
    pub fn is_completed(&self) -> bool {
        matches!(self, Step::Completed)
    }
}

/// Recognizes one fixed input sequence in a polled input stream.
///
/// Not thread-safe: the recognizer is meant to be owned by the loop that
/// polls the device and driven from that loop only.
pub struct SequenceRecognizer<C> {
    sequence: Vec<C>,
    progress: usize,
    input: Option<SharedInput<C>>,
    on_complete: Option<CompletionCallback<C>>,
    active: bool,
    completions: u64,
}

impl<C> SequenceRecognizer<C>
where
    C: Copy + PartialEq + fmt::Debug,
{
    /// Create an unconfigured recognizer
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            progress: 0,
            input: None,
            on_complete: None,
            active: false,
            completions: 0,
        }
    }

    /// Create a builder that configures the recognizer in one step
    pub fn builder() -> SequenceRecognizerBuilder<C> {
        SequenceRecognizerBuilder::default()
    }

    /// Set the expected sequence, the input source and the callback.
    ///
    /// Calling this again with the same sequence, the same source and the
    /// same callback (by pointer) is a no-op. Any other call on a configured
    /// recognizer fails with [`Error::AlreadyConfigured`]; use
    /// [`SequenceRecognizer::unconfigure`] first.
    pub fn configure(
        &mut self,
        sequence: Vec<C>,
        input: SharedInput<C>,
        on_complete: CompletionCallback<C>,
    ) -> Result<()> {
        if sequence.is_empty() {
            return Err(Error::InvalidConfiguration(
                "input sequence is empty".to_string(),
            ));
        }

        if self.is_initialized() {
            if self.is_configured_with(&sequence, &input, &on_complete) {
                return Ok(());
            }
            return Err(Error::AlreadyConfigured);
        }

        debug!(len = sequence.len(), "Configured input sequence");
        self.sequence = sequence;
        self.input = Some(input);
        self.on_complete = Some(on_complete);
        self.progress = 0;
        Ok(())
    }

    fn is_configured_with(
        &self,
        sequence: &[C],
        input: &SharedInput<C>,
        on_complete: &CompletionCallback<C>,
    ) -> bool {
        self.sequence == sequence
            && self.input.as_ref().is_some_and(|i| Rc::ptr_eq(i, input))
            && self
                .on_complete
                .as_ref()
                .is_some_and(|c| Rc::ptr_eq(c, on_complete))
    }

    pub fn is_initialized(&self) -> bool {
        !self.sequence.is_empty() && self.input.is_some() && self.on_complete.is_some()
    }

    /// Consume this tick's input sample.
    ///
    /// Reads the input source exactly once. On the last matching code the
    /// completion callback runs before this returns, observing
    /// `progress() == len()`; progress is back at zero afterwards.
    pub fn advance(&mut self) -> Result<Step> {
        if !self.is_initialized() {
            return Err(Error::NotConfigured);
        }

        // A callback that unwound leaves a completed match behind
        if self.progress >= self.sequence.len() {
            self.progress = 0;
        }

        let Some(sample) = self.input.as_ref().and_then(|input| input.sample_input()) else {
            return Ok(Step::Idle);
        };

        let expected = self.sequence[self.progress];
        if sample != expected {
            let lost = std::mem::take(&mut self.progress);
            if lost > 0 {
                debug!(?sample, ?expected, lost, "Wrong input, sequence reset");
            }
            return Ok(Step::Reset { lost });
        }

        self.progress += 1;
        if self.progress < self.sequence.len() {
            trace!(progress = self.progress, len = self.sequence.len(), "Input matched");
            return Ok(Step::Matched {
                progress: self.progress,
            });
        }

        self.active = true;
        self.completions += 1;
        info!(completions = self.completions, "Input sequence completed");

        if let Some(on_complete) = self.on_complete.clone() {
            on_complete(self);
        }
        self.progress = 0;

        Ok(Step::Completed)
    }

    /// Number of consecutive codes matched so far
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn expected_sequence(&self) -> &[C] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether the sequence has been completed at least once since the
    /// last [`SequenceRecognizer::reset`]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn completions(&self) -> u64 {
        self.completions
    }

    /// Clear progress and the active state, keeping the configuration
    pub fn reset(&mut self) {
        self.progress = 0;
        self.active = false;
        self.completions = 0;
    }

    /// Drop the configuration so the recognizer can be configured again
    pub fn unconfigure(&mut self) {
        debug!("Input sequence unconfigured");
        self.sequence.clear();
        self.input = None;
        self.on_complete = None;
        self.reset();
    }
}

impl<C> Default for SequenceRecognizer<C>
where
    C: Copy + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: fmt::Debug> fmt::Debug for SequenceRecognizer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceRecognizer")
            .field("sequence", &self.sequence)
            .field("progress", &self.progress)
            .field("has_input", &self.input.is_some())
            .field("has_callback", &self.on_complete.is_some())
            .field("active", &self.active)
            .field("completions", &self.completions)
            .finish()
    }
}
