//! Track scrolling, spawning and despawning
//!
//! New entities appear at the right edge of the field; everything drifts left
//! by the current scroll speed and is dropped once it is well past the left
//! edge, so the lists stay bounded.

use glam::Vec2;

use super::random::RandomSource;
use super::state::{GameState, HazardKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Advance the track by one tick: scroll, despawn, then spawn.
///
/// Draws from `rng` in a fixed order: hazard roll, hazard kind (only when a
/// hazard spawns), coin roll, coin height (only when a coin spawns).
pub fn step_track<R: RandomSource + ?Sized>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let speed = state.run.scroll_speed;

    for hazard in &mut state.hazards {
        hazard.pos.x -= speed;
    }
    let before = state.hazards.len();
    state.hazards.retain(|h| h.pos.x > HAZARD_DESPAWN_X);
    let dropped = before - state.hazards.len();
    if dropped > 0 {
        log::debug!("Despawned {} hazard(s)", dropped);
    }

    for coin in &mut state.collectibles {
        coin.pos.x -= speed;
    }
    state.collectibles.retain(|c| c.pos.x > COIN_DESPAWN_X);

    if rng.next_unit() < tuning.hazard_chance {
        let kind = if rng.next_unit() > 0.5 {
            HazardKind::Barrier
        } else {
            HazardKind::Pit
        };
        let id = state.push_hazard(kind, FIELD_WIDTH);
        log::debug!("Spawned {:?} #{} at tick {}", kind, id, state.time_ticks);
    }

    if rng.next_unit() < tuning.coin_chance {
        let y = GROUND_Y - COIN_MIN_HEIGHT - rng.next_unit() * COIN_BAND;
        let id = state.push_collectible(Vec2::new(FIELD_WIDTH, y));
        log::debug!("Spawned coin #{} at height {:.1}", id, y);
    }
}
