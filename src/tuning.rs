//! Data-driven game balance
//!
//! Everything a designer might want to tweak without touching the simulation
//! lives here. `Tuning::default()` is the stock curve.

use serde::{Deserialize, Serialize};

/// How score thresholds turn into level-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelUpRule {
    /// Level up only on ticks where the score lands exactly on a multiple of
    /// the step. A coin pickup that jumps over the multiple skips that level.
    #[default]
    ExactMultiple,
    /// Level up whenever the score has reached the next threshold, even if a
    /// pickup carried it past.
    CrossedThreshold,
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every tick (units/tick²)
    pub gravity: f32,
    /// Per-tick probability of spawning a hazard
    pub hazard_chance: f32,
    /// Per-tick probability of spawning a collectible
    pub coin_chance: f32,
    /// Scroll speed at level 1 (units/tick)
    pub base_scroll_speed: f32,
    /// Scroll speed added per level-up
    pub speed_per_level: f32,
    /// Score needed per level
    pub level_score_step: u64,
    /// Score awarded per collectible
    pub coin_score: u64,
    /// Threshold semantics
    pub level_up_rule: LevelUpRule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            hazard_chance: 0.02,
            coin_chance: 0.03,
            base_scroll_speed: 3.0,
            speed_per_level: 0.5,
            level_score_step: 1000,
            coin_score: 100,
            level_up_rule: LevelUpRule::ExactMultiple,
        }
    }
}

impl Tuning {
    /// Same balance with spawning switched off (empty track)
    pub fn without_spawns() -> Self {
        Self {
            hazard_chance: 0.0,
            coin_chance: 0.0,
            ..Self::default()
        }
    }

    /// Ticks a jump of `jump_power` stays airborne (continuous approximation)
    pub fn airtime_ticks(&self, jump_power: f32) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        2.0 * jump_power / self.gravity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.hazard_chance, 0.02);
        assert_eq!(t.coin_chance, 0.03);
        assert_eq!(t.base_scroll_speed, 3.0);
        assert_eq!(t.speed_per_level, 0.5);
        assert_eq!(t.level_score_step, 1000);
        assert_eq!(t.coin_score, 100);
        assert_eq!(t.level_up_rule, LevelUpRule::ExactMultiple);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t: Tuning =
            serde_json::from_str(r#"{ "level_up_rule": "CrossedThreshold" }"#).unwrap();
        assert_eq!(t.level_up_rule, LevelUpRule::CrossedThreshold);
        assert_eq!(t.base_scroll_speed, 3.0);
    }

    #[test]
    fn test_airtime() {
        let t = Tuning::default();
        assert!((t.airtime_ticks(15.0) - 37.5).abs() < 0.001);
        assert_eq!(Tuning::without_spawns().hazard_chance, 0.0);
    }
}
