//! Generates input script JSON files for the ringside host.
//!
//! Usage:
//!   cargo run -p ringside-core --example gen-script -- [idle|brawl|short] > script.json

use ringside_core::*;

/// Ten minutes of frames is more than any best-of-three needs.
const SCRIPT_TICKS: usize = TICK_RATE as usize * 600;

fn frame(player: Vec<Command>) -> TickFrame {
    TickFrame {
        delta: FRAME_TIME,
        player,
        opponent: Vec::new(),
    }
}

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let mut config = default_config(42);

    let transcript: Vec<TickFrame> = match mode.as_str() {
        "idle" => {
            // Nobody moves; every round goes to the clock and ties favour the player
            vec![frame(Vec::new()); SCRIPT_TICKS]
        }
        "brawl" => {
            // Player presses forward and punches twice a second against the AI
            config.opponent_mode = OpponentMode::Ai;
            config.difficulty = Difficulty::Medium;
            (0..SCRIPT_TICKS)
                .map(|tick| {
                    if tick % 30 == 0 {
                        frame(vec![Command::SkipDelay, Command::MoveRight, Command::Punch])
                    } else {
                        frame(Vec::new())
                    }
                })
                .collect()
        }
        "short" => {
            // 100 idle frames, ends mid-round
            vec![frame(Vec::new()); 100]
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'brawl', or 'short'", mode);
            std::process::exit(1);
        }
    };

    let input = ReplayInput { config, transcript };

    // Verify by running the sim
    match run_replay(&input) {
        Ok(output) => {
            eprintln!("=== Sim result ({} mode) ===", mode);
            eprintln!("Ticks: {}", output.ticks);
            eprintln!("Winner: {:?}", output.winner);
            eprintln!(
                "Rounds: won={}, lost={}, played={}",
                output.rounds_won, output.rounds_lost, output.rounds_played
            );
        }
        Err(err) => {
            eprintln!("Invalid config: {err}");
            std::process::exit(1);
        }
    }

    println!("{}", serde_json::to_string(&input).unwrap());
}
