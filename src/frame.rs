//! Pixel frame buffer

use crate::color::{BLACK, Rgb};
use crate::config::ConfigError;

/// In-memory pixel buffer for a strip of up to `MAX_LEDS` pixels
///
/// Only the first `len` pixels belong to the strip. Writes outside the
/// strip are ignored.
#[derive(Debug, Clone)]
pub struct Frame<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> Frame<MAX_LEDS> {
    /// Create a cleared frame of `len` pixels
    pub const fn new(len: usize) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if len > MAX_LEDS {
            return Err(ConfigError::TooLong {
                requested: len,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            pixels: [BLACK; MAX_LEDS],
            len,
        })
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false, frames hold at least one pixel
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels().get(index).copied()
    }

    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    /// Fill from `start` to the end of the strip
    pub fn fill(&mut self, color: Rgb, start: usize) {
        for pixel in self.pixels_mut().iter_mut().skip(start) {
            *pixel = color;
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BLACK, 0);
    }
}
