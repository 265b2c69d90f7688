//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per displayed frame
//! - Injected randomness only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod progression;
pub mod random;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collect_overlapping, first_hazard_hit, hits_hazard, reaches_collectible};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use state::{
    CharacterProfile, Collectible, GameEvent, GamePhase, GameState, Hazard, HazardKind, PlayerBody,
    RunState, RunSummary,
};
pub use tick::{TickInput, tick};
