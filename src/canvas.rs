//! Frame, strip and delay bundled for effect rendering

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::color::Gamma;
use crate::frame::Frame;
use crate::strip::StripDriver;

/// Drawing surface used by effects
///
/// Owns the frame buffer while it is built. `show` hands it to the strip
/// driver, `pause` blocks the control thread.
pub struct Canvas<S, D, const MAX_LEDS: usize> {
    frame: Frame<MAX_LEDS>,
    strip: S,
    delay: D,
    gamma: Gamma,
}

impl<S: StripDriver, D: DelayNs, const MAX_LEDS: usize> Canvas<S, D, MAX_LEDS> {
    pub fn new(frame: Frame<MAX_LEDS>, strip: S, delay: D) -> Self {
        Self {
            frame,
            strip,
            delay,
            gamma: Gamma::default(),
        }
    }

    /// Replace the gamma curve
    #[must_use]
    pub fn with_gamma(mut self, gamma: Gamma) -> Self {
        self.gamma = gamma;
        self
    }

    pub const fn frame(&self) -> &Frame<MAX_LEDS> {
        &self.frame
    }

    pub const fn frame_mut(&mut self) -> &mut Frame<MAX_LEDS> {
        &mut self.frame
    }

    pub const fn gamma(&self) -> &Gamma {
        &self.gamma
    }

    /// Frame buffer and gamma curve together, for drawing corrected colors
    pub fn frame_and_gamma(&mut self) -> (&mut Frame<MAX_LEDS>, &Gamma) {
        (&mut self.frame, &self.gamma)
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub const fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub const fn delay(&self) -> &D {
        &self.delay
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        self.frame.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Commit the frame to the strip
    pub fn show(&mut self) {
        self.strip.commit(self.frame.pixels());
    }

    /// Block the control thread
    pub fn pause(&mut self, wait: Duration) {
        let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);
        if millis > 0 {
            self.delay.delay_ms(millis);
        }
    }

    /// Commit the frame, then block
    pub fn show_and_pause(&mut self, wait: Duration) {
        self.show();
        self.pause(wait);
    }

    pub fn into_parts(self) -> (Frame<MAX_LEDS>, S, D) {
        (self.frame, self.strip, self.delay)
    }
}
