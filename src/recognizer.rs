//! Speech recognizer capability

use crate::config::ConfigError;

/// Result code returned by a recognizer poll
pub type RecognizerResult = i16;

/// Poll result reported when nothing was recognized
pub const NO_EVENT: RecognizerResult = 0;

/// Audio playback capability
pub trait AudioPlayer {
    /// Play a named audio asset
    fn play(&mut self, asset: &str);
}

/// Abstract speech recognizer
///
/// Implement this trait for the recognizer hardware. The control loop
/// polls it once per cycle and uses it for audio cues.
pub trait Recognizer: AudioPlayer {
    /// Block until the recognizer is ready
    fn initialize(&mut self);

    /// Poll for a recognized sentence without blocking
    ///
    /// Returns [`NO_EVENT`] when nothing was said.
    fn poll(&mut self) -> RecognizerResult;

    /// Set the sensitivity threshold
    fn set_threshold(&mut self, threshold: Threshold);

    /// Train the call sign and sentence list
    ///
    /// Only called during startup. Implementations may skip training when
    /// the stored vocabulary is unchanged.
    fn train(&mut self, vocabulary: &Vocabulary);
}

/// Recognizer sensitivity threshold in the range 2-95
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(u8);

impl Threshold {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 95;

    pub const fn new(value: u8) -> Result<Self, ConfigError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ConfigError::ThresholdOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Call sign and sentences trained into the recognizer
///
/// Sentence `n` (zero-based) is reported as result code `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    call_sign: &'static str,
    sentences: &'static [&'static str],
}

impl Vocabulary {
    pub const fn new(call_sign: &'static str, sentences: &'static [&'static str]) -> Self {
        Self {
            call_sign,
            sentences,
        }
    }

    pub const fn call_sign(&self) -> &'static str {
        self.call_sign
    }

    pub const fn sentences(&self) -> &'static [&'static str] {
        self.sentences
    }

    /// Get the sentence reported by a result code
    pub fn sentence(&self, result: RecognizerResult) -> Option<&'static str> {
        let index = usize::try_from(result).ok()?.checked_sub(1)?;
        self.sentences.get(index).copied()
    }
}
