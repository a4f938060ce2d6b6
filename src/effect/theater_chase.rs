//! Theater marquee chase
//!
//! Each phase lights every third pixel, shifting the starting offset by one
//! on the next phase.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::{HUE_CIRCLE, Rgb, hsv16_to_rgb};
use crate::strip::StripDriver;

/// Phases per repetition, also the spacing between lit pixels
pub const CHASE_PHASES: usize = 3;

/// Repetitions of [`theater_chase`]
pub const CHASE_REPEATS: usize = 10;

/// Repetitions of [`theater_chase_rainbow`]
pub const CHASE_RAINBOW_REPEATS: usize = 30;

/// Base hue advance per phase, one wheel turn over 90 phases
#[allow(clippy::cast_possible_truncation)]
pub const CHASE_RAINBOW_HUE_STEP: u16 = (HUE_CIRCLE / 90) as u16;

/// Single-color marquee
///
/// Blocks for `CHASE_REPEATS * CHASE_PHASES` times `wait`.
pub fn theater_chase<S, D, const MAX_LEDS: usize>(
    canvas: &mut Canvas<S, D, MAX_LEDS>,
    color: Rgb,
    wait: Duration,
) where
    S: StripDriver,
    D: DelayNs,
{
    for _ in 0..CHASE_REPEATS {
        for phase in 0..CHASE_PHASES {
            let frame = canvas.frame_mut();
            frame.clear();
            for index in (phase..frame.len()).step_by(CHASE_PHASES) {
                frame.set_pixel(index, color);
            }
            canvas.show_and_pause(wait);
        }
    }
}

/// Marquee with a rotating rainbow
///
/// Lit pixels take one full wheel turn along the strip, offset by a base
/// hue that advances every phase. Blocks for
/// `CHASE_RAINBOW_REPEATS * CHASE_PHASES` times `wait`.
#[allow(clippy::cast_possible_truncation)]
pub fn theater_chase_rainbow<S, D, const MAX_LEDS: usize>(
    canvas: &mut Canvas<S, D, MAX_LEDS>,
    wait: Duration,
) where
    S: StripDriver,
    D: DelayNs,
{
    let mut base_hue: u16 = 0;
    for _ in 0..CHASE_RAINBOW_REPEATS {
        for phase in 0..CHASE_PHASES {
            let (frame, gamma) = canvas.frame_and_gamma();
            let len = frame.len();
            frame.clear();
            for index in (phase..len).step_by(CHASE_PHASES) {
                let offset = (index as u64 * u64::from(HUE_CIRCLE) / len as u64) as u16;
                let hue = base_hue.wrapping_add(offset);
                frame.set_pixel(index, gamma.apply(hsv16_to_rgb(hue, u8::MAX, u8::MAX)));
            }
            canvas.show_and_pause(wait);
            base_hue = base_hue.wrapping_add(CHASE_RAINBOW_HUE_STEP);
        }
    }
}
