//! Strip driver capability
//!
//! The renderer only sees [`StripDriver`]. [`SmartLedsStrip`] adapts any
//! `smart-leds` writer (WS2812 over RMT, SPI, PIO...) which owns the
//! wire protocol, color order and bit timing.

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::Rgb;
use crate::config::StripConfig;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
pub trait StripDriver {
    /// Apply the strip configuration before the first commit
    fn configure(&mut self, config: &StripConfig);

    /// Set global output brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Push a complete frame to the LEDs
    ///
    /// The strip shows this frame until the next commit.
    fn commit(&mut self, pixels: &[Rgb]);
}

/// [`StripDriver`] on top of a `smart-leds` writer
pub struct SmartLedsStrip<W> {
    writer: W,
    brightness: u8,
    config: Option<StripConfig>,
    failed_writes: u32,
}

impl<W> SmartLedsStrip<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
            config: None,
            failed_writes: 0,
        }
    }

    /// Configuration applied by the last `configure` call
    pub const fn config(&self) -> Option<&StripConfig> {
        self.config.as_ref()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of commits the writer rejected
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripDriver for SmartLedsStrip<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    fn configure(&mut self, config: &StripConfig) {
        log::debug!(
            "strip: {} pixels on pin {}, {:?} {:?}",
            config.pixel_count,
            config.data_pin,
            config.color_order,
            config.frequency
        );
        self.config = Some(*config);
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn commit(&mut self, pixels: &[Rgb]) {
        let scaled = brightness(pixels.iter().copied(), self.brightness);
        if self.writer.write(scaled).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
            log::warn!("strip: write failed ({} total)", self.failed_writes);
        }
    }
}
