//! Game state and core simulation types
//!
//! Everything a run owns lives in `GameState`; the component steps borrow it
//! mutably once per tick and nothing else holds on to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Lifecycle of the run driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active run
    Idle,
    /// Ticking
    Running,
    /// Fatal collision happened; state is frozen
    Over,
}

/// Movement parameters of the selected character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Run speed. Carried through for future use; physics ignores it.
    pub speed: f32,
    /// Magnitude of the upward jump impulse
    pub jump_power: f32,
}

impl CharacterProfile {
    pub fn new(speed: f32, jump_power: f32) -> Self {
        Self { speed, jump_power }
    }
}

/// The runner's physics body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left of the player box
    pub pos: Vec2,
    /// Positive is downward
    pub velocity_y: f32,
    pub is_jumping: bool,
}

impl PlayerBody {
    /// Body at rest at `pos`. Anything above the ground line starts airborne.
    pub fn new(pos: Vec2) -> Self {
        let y = pos.y.min(GROUND_Y);
        Self {
            pos: Vec2::new(pos.x, y),
            velocity_y: 0.0,
            is_jumping: y < GROUND_Y,
        }
    }

    /// Body standing on the ground at the player column
    pub fn grounded() -> Self {
        Self::new(Vec2::new(PLAYER_X, GROUND_Y))
    }

    pub fn on_ground(&self) -> bool {
        self.pos.y >= GROUND_Y && self.velocity_y >= 0.0
    }
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_X, PLAYER_START_Y))
    }
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Block standing on the ground
    Barrier,
    /// Shallow marker at ground level
    Pit,
}

impl HazardKind {
    pub fn height(&self) -> f32 {
        match self {
            HazardKind::Barrier => BARRIER_HEIGHT,
            HazardKind::Pit => PIT_HEIGHT,
        }
    }

    /// Top edge when placed on the track
    pub fn top(&self) -> f32 {
        match self {
            HazardKind::Barrier => GROUND_Y - BARRIER_HEIGHT,
            HazardKind::Pit => GROUND_Y,
        }
    }
}

/// An obstacle that ends the run on contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Hazard {
    /// Hazard of `kind` placed on the track at horizontal position `x`
    pub fn new(id: u32, kind: HazardKind, x: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, kind.top()),
            size: Vec2::new(HAZARD_WIDTH, kind.height()),
        }
    }
}

/// A pickup worth coins and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    /// Centre point
    pub pos: Vec2,
    pub collected: bool,
}

impl Collectible {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            collected: false,
        }
    }
}

/// Score and progression for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    pub coins: u32,
    pub level: u32,
    /// Per-tick horizontal displacement of every track entity
    pub scroll_speed: f32,
    pub game_over: bool,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            coins: 0,
            level: 1,
            scroll_speed: tuning.base_scroll_speed,
            game_over: false,
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    CoinCollected { id: u32 },
    LevelUp { level: u32 },
    HazardHit { id: u32, kind: HazardKind },
    RunOver,
}

/// Final snapshot of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub name: String,
    pub score: u64,
    pub coins: u32,
    pub level: u32,
    /// Ticks survived
    pub ticks: u64,
}

/// Complete run state (deterministic given seed, profile and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the run's random source was created from
    pub seed: u64,
    /// Name reported to the leaderboard
    pub player_name: String,
    pub profile: CharacterProfile,
    /// Running or Over (Idle means there is no GameState at all)
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: PlayerBody,
    /// Active hazards (sorted by id)
    pub hazards: Vec<Hazard>,
    /// Active collectibles (sorted by id)
    pub collectibles: Vec<Collectible>,
    pub run: RunState,
    /// Events from the latest ticks, drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh run: player dropped at the start height, empty track, level 1
    pub fn new(profile: CharacterProfile, player_name: impl Into<String>, seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            player_name: player_name.into(),
            profile,
            phase: GamePhase::Running,
            time_ticks: 0,
            player: PlayerBody::default(),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            run: RunState::new(tuning),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Place a hazard at `x` (spawner and tests)
    pub fn push_hazard(&mut self, kind: HazardKind, x: f32) -> u32 {
        let id = self.next_entity_id();
        self.hazards.push(Hazard::new(id, kind, x));
        id
    }

    /// Place a collectible centred at `pos`
    pub fn push_collectible(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible::new(id, pos));
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            name: self.player_name.clone(),
            score: self.run.score,
            coins: self.run.coins,
            level: self.run.level,
            ticks: self.time_ticks,
        }
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.hazards.sort_by_key(|h| h.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}
