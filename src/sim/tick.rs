//! Fixed-step simulation tick
//!
//! One call advances a run by exactly one displayed frame. Sub-steps run in a
//! fixed order: physics, track, collisions, progression. Collisions therefore
//! always see this tick's post-physics, post-spawn positions.

use super::random::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, physics, progression, spawner};
use crate::consts::PLAYER_SIZE;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump request (key press or tap since the last tick)
    pub jump: bool,
    /// Demo mode - the simulation times jumps itself
    pub idle_mode: bool,
}

/// Advance the run by one tick. Does nothing once the run is over.
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, input: &TickInput, tuning: &Tuning, rng: &mut R) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Physics
    let wants_jump = input.jump || (input.idle_mode && autopilot_wants_jump(state, tuning));
    if wants_jump && physics::try_jump(&mut state.player, state.profile.jump_power) {
        state.events.push(GameEvent::Jumped);
    }
    physics::step_body(&mut state.player, tuning.gravity);

    // Track
    spawner::step_track(state, tuning, rng);

    // Collisions
    let fatal = collision::first_hazard_hit(&state.player, &state.hazards).map(|h| (h.id, h.kind));
    if let Some((id, kind)) = fatal {
        log::info!("Hit {:?} #{} at tick {}", kind, id, state.time_ticks);
        state.run.game_over = true;
        state.events.push(GameEvent::HazardHit { id, kind });
    }

    for id in collision::collect_overlapping(&state.player, &mut state.collectibles) {
        progression::award_coin(&mut state.run, tuning);
        state.events.push(GameEvent::CoinCollected { id });
    }
    state.collectibles.retain(|c| !c.collected);

    // Progression (still applies on the fatal tick)
    let level_before = state.run.level;
    progression::advance(&mut state.run, tuning);
    for level in (level_before + 1)..=state.run.level {
        state.events.push(GameEvent::LevelUp { level });
    }

    if state.run.game_over {
        state.phase = GamePhase::Over;
        state.events.push(GameEvent::RunOver);
        log::info!(
            "Run over: score={} coins={} level={} ticks={}",
            state.run.score,
            state.run.coins,
            state.run.level,
            state.time_ticks
        );
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Demo-mode jump timing.
///
/// Jumps when the nearest hazard still ahead gets within half an airtime of
/// travel, minus half the span the player box and hazard overlap over, which
/// centres the arc over the hazard.
fn autopilot_wants_jump(state: &GameState, tuning: &Tuning) -> bool {
    if state.player.is_jumping {
        return false;
    }

    let speed = state.run.scroll_speed;
    let player_x = state.player.pos.x;
    let airtime = tuning.airtime_ticks(state.profile.jump_power);

    state
        .hazards
        .iter()
        .filter(|h| h.pos.x + h.size.x > player_x)
        .map(|h| (h.pos.x - (player_x + PLAYER_SIZE), h.size.x))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .is_some_and(|(gap, width)| {
            let lead = speed * airtime / 2.0 - (width + PLAYER_SIZE) / 2.0;
            gap <= lead
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::random::{ScriptedRandom, seeded};
    use crate::sim::state::{CharacterProfile, HazardKind, PlayerBody};
    use glam::Vec2;

    fn new_state(jump_power: f32) -> GameState {
        GameState::new(CharacterProfile::new(5.0, jump_power), "Tester", 12345, &Tuning::default())
    }

    fn run_ticks(state: &mut GameState, input: &TickInput, tuning: &Tuning, n: usize) {
        let mut rng = ScriptedRandom::never();
        for _ in 0..n {
            tick(state, input, tuning, &mut rng);
        }
    }

    #[test]
    fn test_tick_counts_and_scores() {
        let mut state = new_state(15.0);
        run_ticks(&mut state, &TickInput::default(), &Tuning::default(), 5);
        assert_eq!(state.time_ticks, 5);
        assert_eq!(state.run.score, 5);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_jump_event_once() {
        let mut state = new_state(15.0);
        state.player = PlayerBody::grounded();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let tuning = Tuning::default();
        run_ticks(&mut state, &jump, &tuning, 3);

        let jumps = state.events.iter().filter(|e| **e == GameEvent::Jumped).count();
        assert_eq!(jumps, 1);
        assert!(state.player.is_jumping);
    }

    #[test]
    fn test_coin_pickup_in_tick() {
        let mut state = new_state(15.0);
        let id = state.push_collectible(Vec2::new(130.0, 320.0));
        run_ticks(&mut state, &TickInput::default(), &Tuning::default(), 1);

        assert_eq!(state.run.coins, 1);
        assert_eq!(state.run.score, 101);
        assert!(state.collectibles.is_empty());
        assert!(state.events.contains(&GameEvent::CoinCollected { id }));
    }

    #[test]
    fn test_hazard_ends_run_and_freezes() {
        let mut state = new_state(15.0);
        state.player = PlayerBody::grounded();
        let hz = state.push_hazard(HazardKind::Barrier, 100.0);
        state.push_collectible(Vec2::new(600.0, 200.0));

        run_ticks(&mut state, &TickInput::default(), &Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Over);
        assert!(state.run.game_over);
        // Progression still ran on the fatal tick
        assert_eq!(state.run.score, 1);
        assert!(state.events.contains(&GameEvent::HazardHit { id: hz, kind: HazardKind::Barrier }));
        assert_eq!(state.events.last(), Some(&GameEvent::RunOver));

        let frozen = (state.player, state.hazards.clone(), state.collectibles.clone(), state.run.clone());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::always();
        for _ in 0..10 {
            tick(&mut state, &jump, &Tuning::default(), &mut rng);
        }
        assert_eq!(state.player, frozen.0);
        assert_eq!(state.hazards, frozen.1);
        assert_eq!(state.collectibles, frozen.2);
        assert_eq!(state.run, frozen.3);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_level_up_event() {
        let mut state = new_state(15.0);
        state.run.score = 999;
        run_ticks(&mut state, &TickInput::default(), &Tuning::default(), 1);
        assert!(state.events.contains(&GameEvent::LevelUp { level: 2 }));
        assert_eq!(state.run.scroll_speed, 3.5);
    }

    #[test]
    fn test_autopilot_clears_barrier() {
        let mut state = new_state(15.0);
        let tuning = Tuning::without_spawns();
        state.push_hazard(HazardKind::Barrier, FIELD_WIDTH);

        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        run_ticks(&mut state, &demo, &tuning, 320);

        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.hazards.is_empty());
        assert!(state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_autopilot_idle_without_hazards() {
        let mut state = new_state(15.0);
        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        run_ticks(&mut state, &demo, &Tuning::without_spawns(), 100);
        assert!(!state.events.contains(&GameEvent::Jumped));
        assert_eq!(state.player.pos.y, GROUND_Y);
    }

    #[test]
    fn test_without_autopilot_barrier_is_fatal() {
        let mut state = new_state(15.0);
        state.push_hazard(HazardKind::Barrier, FIELD_WIDTH);
        run_ticks(&mut state, &TickInput::default(), &Tuning::without_spawns(), 320);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let tuning = Tuning::default();
        let mut state1 = new_state(14.0);
        let mut state2 = new_state(14.0);
        let mut rng1 = seeded(99999);
        let mut rng2 = seeded(99999);

        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, &tuning, &mut rng1);
            tick(&mut state2, input, &tuning, &mut rng2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.run, state2.run);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.hazards, state2.hazards);
        assert_eq!(state1.collectibles, state2.collectibles);
    }
}
