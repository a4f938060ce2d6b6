use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::strip::StripDriver;

/// Paint the strip pixel by pixel from the start
///
/// The frame is not cleared first. Every pixel is committed on its own,
/// followed by `wait`.
pub fn color_wipe<S, D, const MAX_LEDS: usize>(
    canvas: &mut Canvas<S, D, MAX_LEDS>,
    color: Rgb,
    wait: Duration,
) where
    S: StripDriver,
    D: DelayNs,
{
    for index in 0..canvas.len() {
        canvas.frame_mut().set_pixel(index, color);
        canvas.show_and_pause(wait);
    }
}
