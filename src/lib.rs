//! Cookie Dash - An endless runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, progression)
//! - `game`: Run lifecycle state machine (idle → running → over)
//! - `platform`: Frame scheduling and input mapping
//! - `roster`: Built-in playable characters
//! - `highscores`: In-memory leaderboard
//! - `settings` / `tuning`: JSON configuration and data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod roster;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, SettingsError};
pub use game::{Game, Hud};
pub use highscores::{HighScores, LeaderboardEntry};
pub use settings::Settings;
pub use tuning::{LevelUpRule, Tuning};

/// Fixed playfield geometry (logical units, y grows downward)
pub mod consts {
    /// Logical play surface size
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ground line - the player can never sink below this
    pub const GROUND_Y: f32 = 350.0;

    /// Player box is a fixed square rooted at its position
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player horizontal position (constant; the track scrolls instead)
    pub const PLAYER_X: f32 = 100.0;
    /// Height a fresh run drops the player from
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Hazard footprints
    pub const HAZARD_WIDTH: f32 = 40.0;
    pub const BARRIER_HEIGHT: f32 = 40.0;
    pub const PIT_HEIGHT: f32 = 20.0;

    /// Collectibles collide as a box of ± this around their centre
    pub const COIN_HALF_EXTENT: f32 = 12.0;
    /// Collectibles spawn this far above ground, plus up to `COIN_BAND`
    pub const COIN_MIN_HEIGHT: f32 = 100.0;
    pub const COIN_BAND: f32 = 100.0;

    /// Entities at or left of these lines are dropped
    pub const HAZARD_DESPAWN_X: f32 = -100.0;
    pub const COIN_DESPAWN_X: f32 = -30.0;

    /// Default display refresh the native runner paces itself to
    pub const DEFAULT_FPS: u32 = 60;
}
