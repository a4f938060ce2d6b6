mod gamma;
mod hsv;
mod utils;

use smart_leds::RGB8;

pub use gamma::{DEFAULT_GAMMA, Gamma};
pub use hsv::{HUE_CIRCLE, hsv16_to_rgb};
pub use utils::{BLACK, BLUE, GREEN, RED, WHITE, pack_rgb, rgb_from_u32};

pub type Rgb = RGB8;
