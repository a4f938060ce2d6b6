//! Command interpreter
//!
//! Converts recognizer results into lighting state changes.

use crate::recognizer::{Recognizer, RecognizerResult};
use crate::state::{ControlState, LightingState};

/// Outcome of interpreting one recognizer result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Raw result code
    pub result: RecognizerResult,
    /// State selected by the result, `None` for unmapped codes
    pub selected: Option<LightingState>,
    /// Whether the active state differs from the previous one
    pub changed: bool,
}

impl Interpretation {
    /// Numeric state id for diagnostic records, -1 for unmapped results
    pub fn state_id(&self) -> i8 {
        self.selected.map_or(-1, LightingState::id)
    }
}

/// Apply a recognizer result to the control state
///
/// Unmapped results leave the state untouched.
pub fn interpret(state: &mut ControlState, result: RecognizerResult) -> Interpretation {
    let selected = LightingState::from_result(result);
    let mut changed = false;
    if let Some(next) = selected {
        changed = next != state.lighting;
        state.lighting = next;
    }
    Interpretation {
        result,
        selected,
        changed,
    }
}

/// Polls the recognizer and updates the lighting state
pub struct CommandInterpreter<R> {
    recognizer: R,
}

impl<R: Recognizer> CommandInterpreter<R> {
    pub const fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Poll once and apply the result (non-blocking)
    pub fn poll(&mut self, state: &mut ControlState) -> Interpretation {
        let previous = state.lighting;
        let interpretation = interpret(state, self.recognizer.poll());
        if interpretation.changed {
            log::info!(
                "lighting: {} -> {} (result {})",
                previous,
                state.lighting,
                interpretation.result
            );
        }
        interpretation
    }

    pub const fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub const fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }

    pub fn into_recognizer(self) -> R {
        self.recognizer
    }
}
