//! Starting hue source for the rainbow shimmer

/// Produces a starting hue in `[0, 65536)` for each rainbow frame
pub trait HueSource {
    fn next_hue(&mut self) -> u16;
}

impl<F: FnMut() -> u16> HueSource for F {
    fn next_hue(&mut self) -> u16 {
        self()
    }
}

/// Pseudo-random hues from a `SplitMix64` sequence
///
/// Seed it from the hardware RNG on target.
#[derive(Debug, Clone)]
pub struct SplitMixHues {
    state: u64,
}

impl SplitMixHues {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl HueSource for SplitMixHues {
    #[allow(clippy::cast_possible_truncation)]
    fn next_hue(&mut self) -> u16 {
        (self.next_u64() >> 48) as u16
    }
}
