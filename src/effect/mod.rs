//! Effect algorithms
//!
//! Single-frame effects draw into a [`Frame`](crate::frame::Frame) and leave
//! committing to the caller. Animations take a [`Canvas`](crate::canvas::Canvas)
//! and run every frame to completion, committing and pausing between
//! frames. There is no way to interrupt an animation once started.

mod color_wipe;
mod rainbow;
mod solid;
mod theater_chase;

pub use color_wipe::color_wipe;
pub use rainbow::{
    RAINBOW_CYCLE_FRAMES, RAINBOW_CYCLE_STEP, fill_rainbow, rainbow_cycle, rainbow_hue,
};
pub use solid::solid_fill;
pub use theater_chase::{
    CHASE_PHASES, CHASE_RAINBOW_HUE_STEP, CHASE_RAINBOW_REPEATS, CHASE_REPEATS, theater_chase,
    theater_chase_rainbow,
};
