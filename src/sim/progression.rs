//! Score, coins, level and scroll speed

use super::state::RunState;
use crate::tuning::{LevelUpRule, Tuning};

/// Credit one collectible pickup
pub fn award_coin(run: &mut RunState, tuning: &Tuning) {
    run.coins += 1;
    run.score += tuning.coin_score;
}

/// Passive per-tick progression: +1 score, then the level-up check.
///
/// Returns the number of levels gained this tick (0 or 1 under
/// `ExactMultiple`).
pub fn advance(run: &mut RunState, tuning: &Tuning) -> u32 {
    run.score += 1;

    let step = tuning.level_score_step.max(1);
    let mut gained = 0;
    match tuning.level_up_rule {
        LevelUpRule::ExactMultiple => {
            if run.score > 0 && run.score % step == 0 {
                level_up(run, tuning);
                gained = 1;
            }
        }
        LevelUpRule::CrossedThreshold => {
            while run.score >= u64::from(run.level) * step {
                level_up(run, tuning);
                gained += 1;
            }
        }
    }
    gained
}

fn level_up(run: &mut RunState, tuning: &Tuning) {
    run.level += 1;
    run.scroll_speed += tuning.speed_per_level;
    log::info!("Level {} reached at score {} (speed {:.1})", run.level, run.score, run.scroll_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn crossed() -> Tuning {
        Tuning {
            level_up_rule: LevelUpRule::CrossedThreshold,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_passive_score() {
        let tuning = Tuning::default();
        let mut run = RunState::new(&tuning);
        for _ in 0..10 {
            advance(&mut run, &tuning);
        }
        assert_eq!(run.score, 10);
        assert_eq!(run.level, 1);
    }

    #[test]
    fn test_level_up_at_1000() {
        let tuning = Tuning::default();
        let mut run = RunState::new(&tuning);
        run.score = 998;
        assert_eq!(advance(&mut run, &tuning), 0);
        assert_eq!(advance(&mut run, &tuning), 1);
        assert_eq!(run.score, 1000);
        assert_eq!(run.level, 2);
        assert_eq!(run.scroll_speed, 3.5);
        assert_eq!(advance(&mut run, &tuning), 0);
    }

    #[test]
    fn test_coin_award() {
        let tuning = Tuning::default();
        let mut run = RunState::new(&tuning);
        award_coin(&mut run, &tuning);
        award_coin(&mut run, &tuning);
        assert_eq!(run.coins, 2);
        assert_eq!(run.score, 200);
    }

    #[test]
    fn test_exact_multiple_skips_jumped_threshold() {
        let tuning = Tuning::default();
        let mut run = RunState::new(&tuning);
        run.score = 960;
        award_coin(&mut run, &tuning);
        assert_eq!(advance(&mut run, &tuning), 0);
        assert_eq!(run.score, 1061);
        assert_eq!(run.level, 1);
        assert_eq!(run.scroll_speed, 3.0);
    }

    #[test]
    fn test_exact_multiple_hit_by_coin() {
        let tuning = Tuning::default();
        let mut run = RunState::new(&tuning);
        run.score = 899;
        award_coin(&mut run, &tuning);
        assert_eq!(advance(&mut run, &tuning), 1);
        assert_eq!(run.score, 1000);
        assert_eq!(run.level, 2);
    }

    #[test]
    fn test_crossed_threshold_catches_jump() {
        let tuning = crossed();
        let mut run = RunState::new(&tuning);
        run.score = 960;
        award_coin(&mut run, &tuning);
        assert_eq!(advance(&mut run, &tuning), 1);
        assert_eq!(run.score, 1061);
        assert_eq!(run.level, 2);
        assert_eq!(run.scroll_speed, 3.5);
        // Next threshold is 2000
        assert_eq!(advance(&mut run, &tuning), 0);
    }

    proptest! {
        #[test]
        fn prop_monotonic(coins in proptest::collection::vec(any::<bool>(), 1..3000), exact in any::<bool>()) {
            let tuning = if exact { Tuning::default() } else { crossed() };
            let mut run = RunState::new(&tuning);
            for coin in coins {
                let (score, level, speed) = (run.score, run.level, run.scroll_speed);
                if coin {
                    award_coin(&mut run, &tuning);
                }
                advance(&mut run, &tuning);
                prop_assert!(run.score > score);
                prop_assert!(run.level >= level);
                prop_assert!(run.scroll_speed >= speed);
            }
        }

        #[test]
        fn prop_crossed_level_tracks_score(ticks in 1u64..5000) {
            let tuning = crossed();
            let mut run = RunState::new(&tuning);
            for t in 0..ticks {
                if t % 7 == 0 {
                    award_coin(&mut run, &tuning);
                }
                advance(&mut run, &tuning);
            }
            prop_assert_eq!(u64::from(run.level), 1 + run.score / 1000);
        }
    }
}
