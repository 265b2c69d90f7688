//! Cookie Dash entry point
//!
//! Headless native runner: loads settings, plays one run paced to the target
//! frame rate (autopilot by default), then records it on the leaderboard.
//!
//! Usage: `cookie-dash [settings.json] [--fast]`

use std::process::ExitCode;

use cookie_dash::platform::{CancelToken, FixedRateClock, FrameClock, LoopExit, Unpaced, run_frames};
use cookie_dash::sim::{GameEvent, seeded};
use cookie_dash::{Game, GameError, HighScores, LeaderboardEntry, Settings, roster};

/// Log the HUD this often (in frames)
const HUD_EVERY: u64 = 300;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings_path = "cookie-dash.json".to_string();
    let mut fast = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--fast" => fast = true,
            other => settings_path = other.to_string(),
        }
    }

    let settings = Settings::load_or_default(&settings_path);
    match run(&settings, fast) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings, fast: bool) -> Result<(), GameError> {
    let character = roster::find(&settings.character)?;
    let name = settings
        .player_name
        .clone()
        .unwrap_or_else(|| character.name.to_string());
    let seed = settings.effective_seed();

    log::info!("Cookie Dash starting...");
    log::info!("{} {} selected, seed {}", character.emoji, character.name, seed);

    let mut game = Game::with_random(seeded(seed), seed, settings.tuning.clone());
    game.select_character(character.profile, name);
    game.set_autopilot(settings.autopilot);
    game.start_run()?;

    let mut clock: Box<dyn FrameClock> = if fast {
        Box::new(Unpaced)
    } else {
        Box::new(FixedRateClock::new(settings.target_fps))
    };
    let token = CancelToken::new();

    let exit = run_frames(&mut game, clock.as_mut(), &token, settings.max_frames, |game| {
        for event in game.drain_events() {
            match event {
                GameEvent::LevelUp { level } => log::info!("Level up! Now level {}", level),
                GameEvent::CoinCollected { id } => log::debug!("Coin #{} collected", id),
                _ => {}
            }
        }
        if let (Some(hud), Some(state)) = (game.hud(), game.state()) {
            if state.time_ticks % HUD_EVERY == 0 {
                log::info!(
                    "Score: {}  Coins: {}  Level: {}  Speed: {:.1}",
                    hud.score,
                    hud.coins,
                    hud.level,
                    hud.scroll_speed
                );
            }
        }
    });

    let summary = match exit {
        LoopExit::Finished(summary) => summary,
        LoopExit::Cancelled { frames } => {
            if let Some(hud) = game.hud() {
                println!(
                    "Stopped after {} frames: score {}, coins {}, level {}",
                    frames, hud.score, hud.coins, hud.level
                );
            }
            return Ok(());
        }
    };

    println!("GAME OVER");
    println!("  Score: {}", summary.score);
    println!("  Coins: {}", summary.coins);
    println!("  Level: {}", summary.level);

    let mut leaderboard = HighScores::seeded();
    if let Some(rank) = leaderboard.record(LeaderboardEntry::from(&summary)) {
        println!("New entry at #{}!", rank);
    }

    println!("\nLEADERBOARD");
    for (i, entry) in leaderboard.entries.iter().enumerate() {
        println!("  #{:<2} {:<20} {:>7}  (level {})", i + 1, entry.name, entry.score, entry.level);
    }

    Ok(())
}
