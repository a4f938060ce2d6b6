#![no_std]

pub mod canvas;
pub mod color;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod effect;
pub mod frame;
pub mod hue;
pub mod interpreter;
pub mod recognizer;
pub mod renderer;
pub mod state;
pub mod strip;

pub use canvas::Canvas;
pub use config::{Config, ConfigError, DEFAULT_CONFIG, StripConfig, VoiceConfig};
pub use controller::{Controller, CycleReport};
pub use diagnostics::{DiagnosticsQueue, DiagnosticsSink, LogSink, NullSink};
pub use frame::Frame;
pub use hue::{HueSource, SplitMixHues};
pub use interpreter::{CommandInterpreter, Interpretation, interpret};
pub use recognizer::{AudioPlayer, NO_EVENT, Recognizer, RecognizerResult, Threshold, Vocabulary};
pub use renderer::{Rendered, Renderer};
pub use state::{ControlState, LightingState};
pub use strip::{SmartLedsStrip, StripDriver};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Route `log` records to the ESP32 serial console
#[cfg(feature = "esp32-log")]
pub fn init_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
