//! Voice light control loop
//!
//! Composes the interpreter and the renderer with the injected strip,
//! recognizer, delay, hue source and diagnostics sink.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = Controller::<_, _, _, _, _, 128>::start(
//!     &DEFAULT_CONFIG,
//!     SmartLedsStrip::new(ws2812),
//!     movi,
//!     delay,
//!     SplitMixHues::new(seed),
//!     LogSink,
//! )?;
//! controller.run();
//! ```

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::canvas::Canvas;
use crate::color::WHITE;
use crate::config::{Config, ConfigError};
use crate::diagnostics::DiagnosticsSink;
use crate::frame::Frame;
use crate::hue::HueSource;
use crate::interpreter::{CommandInterpreter, Interpretation};
use crate::recognizer::{Recognizer, RecognizerResult, Threshold, Vocabulary};
use crate::renderer::{Rendered, Renderer};
use crate::state::{ControlState, LightingState};
use crate::strip::StripDriver;

/// Longest diagnostic record the controller formats
const RECORD_LEN: usize = 48;

/// Summary of one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Raw recognizer result
    pub result: RecognizerResult,
    /// Lighting state after the cycle
    pub state: LightingState,
    /// Whether the cycle changed the state
    pub changed: bool,
    /// What the renderer produced
    pub rendered: Rendered,
}

/// Single-threaded control loop
pub struct Controller<S, R, D, H, K, const MAX_LEDS: usize> {
    interpreter: CommandInterpreter<R>,
    renderer: Renderer<S, D, H, MAX_LEDS>,
    sink: K,
    state: ControlState,
    vocabulary: Vocabulary,
}

impl<S, R, D, H, K, const MAX_LEDS: usize> Controller<S, R, D, H, K, MAX_LEDS>
where
    S: StripDriver,
    R: Recognizer,
    D: DelayNs,
    H: HueSource,
    K: DiagnosticsSink,
{
    /// Validate the configuration, bring up the hardware and train the
    /// recognizer
    ///
    /// Blocks until the recognizer is ready. Misconfiguration is rejected
    /// before any hardware is touched.
    pub fn start(
        config: &Config,
        mut strip: S,
        mut recognizer: R,
        delay: D,
        hues: H,
        sink: K,
    ) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;
        let threshold = Threshold::new(config.voice.threshold)?;
        let frame = Frame::new(config.strip.pixel_count)?;

        strip.configure(&config.strip);
        let mut canvas = Canvas::new(frame, strip, delay);
        // All pixels off as early as possible
        canvas.show();
        canvas.strip_mut().set_brightness(config.strip.brightness);
        canvas.frame_mut().fill(WHITE, 0);
        canvas.show();

        recognizer.initialize();
        recognizer.train(&config.voice.vocabulary);
        recognizer.set_threshold(threshold);
        log::info!(
            "voice light ready: {} pixels, call sign '{}', threshold {}",
            config.strip.pixel_count,
            config.voice.vocabulary.call_sign(),
            threshold.value()
        );

        Ok(Self {
            interpreter: CommandInterpreter::new(recognizer),
            renderer: Renderer::new(canvas, hues, config.voice.troll_asset),
            sink,
            state: ControlState::new(),
            vocabulary: config.voice.vocabulary,
        })
    }

    /// Run one cycle: poll, update state, render
    pub fn cycle(&mut self) -> CycleReport {
        let interpretation = self.interpreter.poll(&mut self.state);
        self.report(&interpretation);

        let rendered = self
            .renderer
            .render(&self.state, self.interpreter.recognizer_mut());

        CycleReport {
            result: interpretation.result,
            state: self.state.lighting,
            changed: interpretation.changed,
            rendered,
        }
    }

    /// Cycle until power-off
    pub fn run(&mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    fn report(&mut self, interpretation: &Interpretation) {
        if let Some(sentence) = self.vocabulary.sentence(interpretation.result) {
            log::debug!("heard '{}'", sentence);
        }
        let mut record: String<RECORD_LEN> = String::new();
        // Both numbers are bounded, the record always fits
        let _ = write!(
            record,
            "state is: {} response is: {}",
            interpretation.state_id(),
            interpretation.result
        );
        self.sink.emit(&record);
    }

    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    pub const fn renderer(&self) -> &Renderer<S, D, H, MAX_LEDS> {
        &self.renderer
    }

    /// Renderer access for running animation primitives
    pub const fn renderer_mut(&mut self) -> &mut Renderer<S, D, H, MAX_LEDS> {
        &mut self.renderer
    }

    pub const fn recognizer(&self) -> &R {
        self.interpreter.recognizer()
    }

    pub const fn sink(&self) -> &K {
        &self.sink
    }
}
