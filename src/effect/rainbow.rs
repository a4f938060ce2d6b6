//! Rainbow along the strip
//!
//! The first pixel gets `first_hue`, the rest follow at equal hue steps so
//! that the strip covers `reps` full turns of the color wheel.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::{Gamma, HUE_CIRCLE, hsv16_to_rgb};
use crate::frame::Frame;
use crate::strip::StripDriver;

/// First-pixel hue increment between rainbow cycle frames
pub const RAINBOW_CYCLE_STEP: u32 = 256;

/// Full color wheel turns made by the first pixel in a rainbow cycle
const RAINBOW_CYCLE_TURNS: u32 = 5;

/// Frames committed by one [`rainbow_cycle`]
pub const RAINBOW_CYCLE_FRAMES: u32 = RAINBOW_CYCLE_TURNS * HUE_CIRCLE / RAINBOW_CYCLE_STEP;

/// Hue of pixel `index` on a strip of `len` pixels
#[allow(clippy::cast_possible_truncation)]
pub fn rainbow_hue(first_hue: u16, index: usize, len: usize, reps: u8) -> u16 {
    let len = len.max(1) as u64;
    let offset = (index as u64) * u64::from(reps) * u64::from(HUE_CIRCLE) / len;
    // Wraps around the wheel
    (u64::from(first_hue) + offset) as u16
}

/// Fill the frame with a rainbow
pub fn fill_rainbow<const MAX_LEDS: usize>(
    frame: &mut Frame<MAX_LEDS>,
    gamma: &Gamma,
    first_hue: u16,
    reps: u8,
    sat: u8,
    val: u8,
    gammify: bool,
) {
    let len = frame.len();
    for (index, pixel) in frame.pixels_mut().iter_mut().enumerate() {
        let hue = rainbow_hue(first_hue, index, len, reps);
        let color = hsv16_to_rgb(hue, sat, val);
        *pixel = if gammify { gamma.apply(color) } else { color };
    }
}

/// Flowing rainbow, five turns of the wheel
///
/// Blocks for [`RAINBOW_CYCLE_FRAMES`] times `wait`.
#[allow(clippy::cast_possible_truncation)]
pub fn rainbow_cycle<S, D, const MAX_LEDS: usize>(canvas: &mut Canvas<S, D, MAX_LEDS>, wait: Duration)
where
    S: StripDriver,
    D: DelayNs,
{
    for step in 0..RAINBOW_CYCLE_FRAMES {
        let first_hue = (step * RAINBOW_CYCLE_STEP) as u16;
        let (frame, gamma) = canvas.frame_and_gamma();
        fill_rainbow(frame, gamma, first_hue, 1, u8::MAX, u8::MAX, true);
        canvas.show_and_pause(wait);
    }
}
