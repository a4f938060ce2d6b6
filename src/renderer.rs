use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::effect::{fill_rainbow, solid_fill};
use crate::hue::HueSource;
use crate::recognizer::AudioPlayer;
use crate::state::{ControlState, LightingState};
use crate::strip::StripDriver;

/// What a render pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// Rainbow frame starting at `first_hue`
    Rainbow { first_hue: u16 },
    /// Solid color frame
    Solid(Rgb),
    /// Audio cue played, no frame committed
    AudioCue(&'static str),
}

/// Animation renderer
///
/// Turns the current lighting state into a committed frame. Holds no state
/// across cycles besides the canvas and the hue source.
pub struct Renderer<S, D, H, const MAX_LEDS: usize> {
    canvas: Canvas<S, D, MAX_LEDS>,
    hues: H,
    troll_asset: &'static str,
}

impl<S, D, H, const MAX_LEDS: usize> Renderer<S, D, H, MAX_LEDS>
where
    S: StripDriver,
    D: DelayNs,
    H: HueSource,
{
    pub fn new(canvas: Canvas<S, D, MAX_LEDS>, hues: H, troll_asset: &'static str) -> Self {
        Self {
            canvas,
            hues,
            troll_asset,
        }
    }

    /// Render one cycle
    ///
    /// Single-frame effects commit exactly once. The troll state only
    /// triggers audio through `player`, the strip keeps its last frame.
    pub fn render<P: AudioPlayer>(&mut self, state: &ControlState, player: &mut P) -> Rendered {
        let rendered = match state.lighting {
            LightingState::Default => {
                let first_hue = self.hues.next_hue();
                let (frame, gamma) = self.canvas.frame_and_gamma();
                fill_rainbow(frame, gamma, first_hue, 1, u8::MAX, u8::MAX, true);
                self.canvas.show();
                Rendered::Rainbow { first_hue }
            }
            LightingState::Red => self.render_solid(RED),
            LightingState::Green => self.render_solid(GREEN),
            LightingState::Blue => self.render_solid(BLUE),
            LightingState::Troll => {
                player.play(self.troll_asset);
                Rendered::AudioCue(self.troll_asset)
            }
        };
        log::debug!("render: {} -> {:?}", state.lighting, rendered);
        rendered
    }

    fn render_solid(&mut self, color: Rgb) -> Rendered {
        solid_fill(self.canvas.frame_mut(), color);
        self.canvas.show();
        Rendered::Solid(color)
    }

    pub const fn canvas(&self) -> &Canvas<S, D, MAX_LEDS> {
        &self.canvas
    }

    /// Canvas access for running animation primitives
    pub const fn canvas_mut(&mut self) -> &mut Canvas<S, D, MAX_LEDS> {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> Canvas<S, D, MAX_LEDS> {
        self.canvas
    }
}
