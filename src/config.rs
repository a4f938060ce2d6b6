//! Compile-time configuration
//!
//! Everything the firmware can be tuned with lives in [`DEFAULT_CONFIG`].
//! The configuration is validated once, before the control loop starts.

use core::fmt;

use crate::recognizer::{Threshold, Vocabulary};

/// Highest usable data pin on the target board
pub const MAX_DATA_PIN: u8 = 19;

/// Pins taken by the serial console (0, 1) and the recognizer link (10, 11)
pub const RESERVED_PINS: [u8; 4] = [0, 1, 10, 11];

/// Order in which the strip expects color channels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    Rgb,
    Grb,
}

/// Bitstream frequency class of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// WS2812 and most current strips
    Khz800,
    /// Classic WS2811 drivers
    Khz400,
}

/// Strip driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub data_pin: u8,
    pub brightness: u8,
    pub color_order: ColorOrder,
    pub frequency: Frequency,
}

/// Recognizer configuration
#[derive(Debug, Clone, Copy)]
pub struct VoiceConfig {
    pub vocabulary: Vocabulary,
    /// Sensitivity threshold, 2-95
    pub threshold: u8,
    /// Asset played in the troll state
    pub troll_asset: &'static str,
}

/// Full firmware configuration
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub strip: StripConfig,
    pub voice: VoiceConfig,
}

pub const DEFAULT_CONFIG: Config = Config {
    strip: StripConfig {
        pixel_count: 93,
        data_pin: 6,
        brightness: 50,
        color_order: ColorOrder::Grb,
        frequency: Frequency::Khz800,
    },
    voice: VoiceConfig {
        vocabulary: Vocabulary::new(
            "gallery",
            &["turn red", "turn green", "turn blue", "troll me", "rainbow"],
        ),
        threshold: 20,
        troll_asset: "troll.wav",
    },
};

/// Configuration rejected before entering the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The strip has no pixels
    ZeroLength,
    /// The strip is longer than the frame buffer
    TooLong { requested: usize, capacity: usize },
    /// The data pin does not exist or is reserved
    InvalidPin(u8),
    /// Recognizer threshold outside 2-95
    ThresholdOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "strip must have at least one pixel"),
            Self::TooLong {
                requested,
                capacity,
            } => write!(
                f,
                "strip length {} exceeds frame capacity {}",
                requested, capacity
            ),
            Self::InvalidPin(pin) => write!(f, "pin {} cannot drive the strip", pin),
            Self::ThresholdOutOfRange(value) => write!(
                f,
                "threshold {} is outside {}-{}",
                value,
                Threshold::MIN,
                Threshold::MAX
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

impl StripConfig {
    /// Check the strip settings against a frame buffer capacity
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.pixel_count == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.pixel_count > capacity {
            return Err(ConfigError::TooLong {
                requested: self.pixel_count,
                capacity,
            });
        }
        if self.data_pin > MAX_DATA_PIN || RESERVED_PINS.contains(&self.data_pin) {
            return Err(ConfigError::InvalidPin(self.data_pin));
        }
        Ok(())
    }
}

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        self.strip.validate(capacity)?;
        Threshold::new(self.voice.threshold)?;
        Ok(())
    }
}
