//! Gamma correction lookup table

use crate::color::Rgb;

/// Gamma exponent matching the perceived brightness of WS2812-class LEDs
pub const DEFAULT_GAMMA: f64 = 2.6;

/// Precomputed 8-bit gamma curve
///
/// Each entry is `round(255 * (i / 255) ^ exponent)`.
#[derive(Clone)]
pub struct Gamma {
    lut: [u8; 256],
}

impl Gamma {
    /// Build the lookup table for the given exponent
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_lossless
    )]
    pub fn new(exponent: f64) -> Self {
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let normalized = i as f64 / 255.0;
            *entry = (libm::pow(normalized, exponent) * 255.0 + 0.5) as u8;
        }
        Self { lut }
    }

    /// Correct a single channel value
    #[inline]
    pub fn channel(&self, value: u8) -> u8 {
        self.lut[usize::from(value)]
    }

    /// Correct every channel of a color
    #[inline]
    pub fn apply(&self, color: Rgb) -> Rgb {
        Rgb {
            r: self.channel(color.r),
            g: self.channel(color.g),
            b: self.channel(color.b),
        }
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}

impl core::fmt::Debug for Gamma {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gamma")
            .field("mid", &self.lut[128])
            .finish_non_exhaustive()
    }
}
