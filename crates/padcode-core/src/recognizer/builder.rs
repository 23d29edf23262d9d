use std::fmt;
use std::rc::Rc;

use super::{CompletionCallback, SequenceRecognizer, SharedInput};
use crate::error::{Error, Result};
use crate::input::InputSource;

/// Builder for [`SequenceRecognizer`].
///
/// Unlike [`SequenceRecognizer::configure`], every piece is optional here,
/// and `build` reports whichever one is missing.
pub struct SequenceRecognizerBuilder<C> {
    sequence: Option<Vec<C>>,
    input: Option<SharedInput<C>>,
    on_complete: Option<CompletionCallback<C>>,
}

impl<C> Default for SequenceRecognizerBuilder<C> {
    fn default() -> Self {
        Self {
            sequence: None,
            input: None,
            on_complete: None,
        }
    }
}

impl<C> SequenceRecognizerBuilder<C>
where
    C: Copy + PartialEq + fmt::Debug,
{
    /// Set the expected input sequence
    pub fn sequence<I: IntoIterator<Item = C>>(mut self, sequence: I) -> Self {
        self.sequence = Some(sequence.into_iter().collect());
        self
    }

    /// Set the source sampled on every tick
    pub fn input_source<S: InputSource<C> + 'static>(mut self, input: Rc<S>) -> Self {
        let input: SharedInput<C> = input;
        self.input = Some(input);
        self
    }

    /// Set the callback fired on every completed sequence
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: Fn(&SequenceRecognizer<C>) + 'static,
    {
        self.on_complete = Some(super::callback(f));
        self
    }

    /// Build the configured recognizer
    pub fn build(self) -> Result<SequenceRecognizer<C>> {
        let sequence = self
            .sequence
            .ok_or_else(|| Error::InvalidConfiguration("missing input sequence".to_string()))?;
        let input = self
            .input
            .ok_or_else(|| Error::InvalidConfiguration("missing input source".to_string()))?;
        let on_complete = self.on_complete.ok_or_else(|| {
            Error::InvalidConfiguration("missing completion callback".to_string())
        })?;

        let mut recognizer = SequenceRecognizer::new();
        recognizer.configure(sequence, input, on_complete)?;
        Ok(recognizer)
    }
}
