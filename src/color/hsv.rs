//! 16-bit hue color wheel
//!
//! The wheel is split into six 255-step ramps (1530 steps in total), so
//! adjacent hues differ by at most one channel step. Red sits at 0,
//! green at 1/3 and blue at 2/3 of [`HUE_CIRCLE`].

use crate::color::Rgb;

/// Number of distinct hue values on the wheel (one full revolution)
pub const HUE_CIRCLE: u32 = 65536;

const WHEEL_STEPS: u32 = 1530;

/// Convert a 16-bit hue with 8-bit saturation and value to RGB
#[allow(clippy::cast_possible_truncation)]
pub fn hsv16_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    // Remap 0..=65535 onto 0..=1530 with rounding
    let hue = (u32::from(hue) * WHEEL_STEPS + HUE_CIRCLE / 2) / HUE_CIRCLE;

    let (r, g, b) = if hue < 510 {
        // Red to green
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        // Green to blue
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < WHEEL_STEPS {
        // Blue to red
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, WHEEL_STEPS - hue)
        }
    } else {
        // Rounded up to the full circle
        (255, 0, 0)
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);
    let scale = |channel: u32| (((((channel * s1) >> 8) + s2) * v1) >> 8) as u8;

    Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}
