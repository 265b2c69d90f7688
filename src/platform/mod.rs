//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame pacing (one tick per displayed frame) and cancellation
//! - Input events (keyboard and pointer mapped to a jump request)

pub mod frame;
pub mod input;

pub use frame::{CancelToken, FixedRateClock, FrameClock, LoopExit, Unpaced, run_frames};
pub use input::{InputEvent, Key, is_jump};
