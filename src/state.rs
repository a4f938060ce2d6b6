//! Lighting state shared between the interpreter and the renderer

use core::fmt;

use crate::recognizer::RecognizerResult;

const RESULT_RED: RecognizerResult = 1;
const RESULT_GREEN: RecognizerResult = 2;
const RESULT_BLUE: RecognizerResult = 3;
const RESULT_TROLL: RecognizerResult = 4;
const RESULT_RESET: RecognizerResult = 5;

/// Logical lighting state selected by voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingState {
    /// Rainbow shimmer
    #[default]
    Default,
    Red,
    Green,
    Blue,
    /// Audio cue, lights keep the previous frame
    Troll,
}

impl LightingState {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Troll,
    ];

    /// Map a recognizer result to a state
    ///
    /// Returns `None` for codes that must not change the state.
    pub const fn from_result(result: RecognizerResult) -> Option<Self> {
        Some(match result {
            RESULT_RED => Self::Red,
            RESULT_GREEN => Self::Green,
            RESULT_BLUE => Self::Blue,
            RESULT_TROLL => Self::Troll,
            RESULT_RESET => Self::Default,
            _ => return None,
        })
    }

    /// Numeric id used in diagnostic records
    pub const fn id(self) -> i8 {
        match self {
            Self::Default => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
            Self::Troll => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Troll => "troll",
        }
    }
}

impl fmt::Display for LightingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control loop state, passed explicitly into each cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    /// Active lighting state
    pub lighting: LightingState,
    /// Countdown until returning to the default state. `None` when inactive.
    pub timer: Option<u32>,
}

impl ControlState {
    pub const fn new() -> Self {
        Self {
            lighting: LightingState::Default,
            timer: None,
        }
    }
}
