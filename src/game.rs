//! Run lifecycle: idle → running → over
//!
//! `Game` owns the random source, the selected character and, while a run
//! exists, its `GameState`. Hosts feed it jump requests, call `step` once per
//! displayed frame, and read the state back for drawing.

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::error::GameError;
use crate::platform::input::{InputEvent, Key, is_jump};
use crate::roster;
use crate::sim::{
    CharacterProfile, GameEvent, GamePhase, GameState, RandomSource, RunSummary, TickInput, seeded, tick,
};
use crate::tuning::Tuning;

/// Read-only numbers for a HUD overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub coins: u32,
    pub level: u32,
    pub scroll_speed: f32,
    pub phase: GamePhase,
}

/// The run driver
#[derive(Debug)]
pub struct Game<R: RandomSource = Pcg32> {
    rng: R,
    seed: u64,
    tuning: Tuning,
    /// Chosen on the character-select screen
    selected: Option<(CharacterProfile, String)>,
    /// Present while running or over; dropped on return to idle
    run: Option<GameState>,
    input: TickInput,
}

impl Game<Pcg32> {
    /// Game with the stock tuning and a seeded PCG random source
    pub fn new(seed: u64) -> Self {
        Self::with_random(seeded(seed), seed, Tuning::default())
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_random(rng: R, seed: u64, tuning: Tuning) -> Self {
        Self {
            rng,
            seed,
            tuning,
            selected: None,
            run: None,
            input: TickInput::default(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Supply the character-select result for the next run
    pub fn select_character(&mut self, profile: CharacterProfile, name: impl Into<String>) {
        self.selected = Some((profile, name.into()));
    }

    /// Select a built-in character by roster id
    pub fn select_from_roster(&mut self, id: &str) -> Result<(), GameError> {
        let character = roster::find(id)?;
        self.select_character(character.profile, character.name);
        Ok(())
    }

    pub fn selected_profile(&self) -> Option<CharacterProfile> {
        self.selected.as_ref().map(|(profile, _)| *profile)
    }

    /// Start (or restart) a run with the selected character.
    ///
    /// Fails without touching any state if no character has been selected.
    pub fn start_run(&mut self) -> Result<(), GameError> {
        let Some((profile, name)) = self.selected.clone() else {
            log::error!("Refusing to start a run: no character selected");
            return Err(GameError::NoCharacterSelected);
        };

        log::info!(
            "Starting run as {} (jump {}, seed {})",
            name,
            profile.jump_power,
            self.seed
        );
        self.run = Some(GameState::new(profile, name, self.seed, &self.tuning));
        self.input.jump = false;
        Ok(())
    }

    /// Discard the current run, if any
    pub fn return_to_idle(&mut self) {
        if self.run.take().is_some() {
            log::info!("Returned to idle");
        }
        self.input.jump = false;
    }

    pub fn phase(&self) -> GamePhase {
        self.run.as_ref().map_or(GamePhase::Idle, |s| s.phase)
    }

    /// Queue a jump for the next tick. Ignored unless a run is active.
    pub fn request_jump(&mut self) {
        if self.phase() == GamePhase::Running {
            self.input.jump = true;
        }
    }

    /// Feed a raw host event. Jump keys and taps on the play surface queue a
    /// jump; Escape abandons the run.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if is_jump(event) {
            self.request_jump();
        } else if *event == InputEvent::KeyDown(Key::Escape) {
            self.return_to_idle();
        }
    }

    /// Demo mode: let the simulation time its own jumps
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.idle_mode = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.input.idle_mode
    }

    /// Advance one tick.
    ///
    /// Returns the final summary on the tick the run ends; `None` otherwise,
    /// including when there is nothing to advance.
    pub fn step(&mut self) -> Option<RunSummary> {
        let state = self.run.as_mut()?;
        if state.phase != GamePhase::Running {
            return None;
        }

        tick(state, &self.input, &self.tuning, &mut self.rng);
        // Clear one-shot inputs after processing
        self.input.jump = false;

        (state.phase == GamePhase::Over).then(|| state.summary())
    }

    /// Current run state for rendering
    pub fn state(&self) -> Option<&GameState> {
        self.run.as_ref()
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.run.as_mut()
    }

    pub fn hud(&self) -> Option<Hud> {
        self.run.as_ref().map(|s| Hud {
            score: s.run.score,
            coins: s.run.coins,
            level: s.run.level,
            scroll_speed: s.run.scroll_speed,
            phase: s.phase,
        })
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.run
            .as_mut()
            .map(|s| std::mem::take(&mut s.events))
            .unwrap_or_default()
    }
}
