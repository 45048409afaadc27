//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard → per-tick input)
//! - Time/ticks (fixed-rate clock, FPS)

pub mod clock;
pub mod input;

pub use clock::{FixedClock, FpsCounter};
pub use input::{KeyAction, KeyboardState, map_key};
