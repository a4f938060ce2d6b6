use crate::color::Rgb;
use crate::frame::Frame;

/// Set every pixel to one color
pub fn solid_fill<const MAX_LEDS: usize>(frame: &mut Frame<MAX_LEDS>, color: Rgb) {
    frame.fill(color, 0);
}
