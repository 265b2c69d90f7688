//! Frame loop
//!
//! The host's display refresh is modelled as a `FrameClock`. `run_frames`
//! waits for a frame, runs exactly one tick, hands the frame to the caller,
//! and repeats until the run ends or the loop is cancelled. Once it returns,
//! nothing is left scheduled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::game::Game;
use crate::sim::{GamePhase, RandomSource, RunSummary};

/// Source of display frames
pub trait FrameClock {
    /// Block until the next frame is due
    fn wait_frame(&mut self);
}

/// Paces frames to a fixed rate by sleeping (native stand-in for vsync)
#[derive(Debug)]
pub struct FixedRateClock {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for FixedRateClock {
    fn wait_frame(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        // Don't try to catch up after a stall; just restart the cadence
        let base = if due + self.period < now { now } else { due };
        self.next = Some(base + self.period);
    }
}

/// Frames are always due (tests, headless fast-forward)
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl FrameClock for Unpaced {
    fn wait_frame(&mut self) {}
}

/// Shared stop flag for a frame loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Why a frame loop stopped
#[derive(Debug, Clone, PartialEq)]
pub enum LoopExit {
    /// The run ended on a fatal collision
    Finished(RunSummary),
    /// Cancelled, out of frame budget, or the run left the running state
    Cancelled { frames: u64 },
}

/// Drive `game` one tick per frame.
///
/// `on_frame` runs after every tick with the updated game; it may request
/// jumps, draw, or cancel through a cloned token. `max_frames` caps the loop.
pub fn run_frames<R, C, F>(
    game: &mut Game<R>,
    clock: &mut C,
    token: &CancelToken,
    max_frames: Option<u64>,
    mut on_frame: F,
) -> LoopExit
where
    R: RandomSource,
    C: FrameClock + ?Sized,
    F: FnMut(&mut Game<R>),
{
    let mut frames = 0u64;
    loop {
        if token.is_cancelled() || game.phase() != GamePhase::Running {
            break;
        }
        if max_frames.is_some_and(|max| frames >= max) {
            log::info!("Frame budget of {} exhausted", frames);
            break;
        }

        clock.wait_frame();
        frames += 1;
        let finished = game.step();
        on_frame(game);

        if let Some(summary) = finished {
            return LoopExit::Finished(summary);
        }
    }
    log::debug!("Frame loop stopped after {} frames", frames);
    LoopExit::Cancelled { frames }
}
