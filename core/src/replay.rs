use tracing::{debug, info};

use crate::error::ConfigError;
use crate::hash::{hash_seed, hash_transcript};
use crate::init::create_match;
use crate::input::apply_command;
use crate::opponent::policy_for;
use crate::step::step;
use crate::types::*;

/// Drive a whole match from a recorded input script.
///
/// Each frame applies the player's commands, then the opponent's scripted
/// commands, then whatever the configured opponent policy decides, and
/// finally steps the simulation by the frame's delta. Playback stops at the
/// first frame that ends the match; trailing frames are ignored.
pub fn run_replay(input: &ReplayInput) -> Result<ReplayOutput, ConfigError> {
    let config = &input.config;
    let mut state = create_match(config)?;
    let mut policy = policy_for(config);
    let mut ticks = 0u32;

    for frame in &input.transcript {
        for &command in &frame.player {
            apply_command(&mut state, Side::Player, command, config);
        }
        for &command in &frame.opponent {
            apply_command(&mut state, Side::Opponent, command, config);
        }
        for command in policy.decide(&state, frame.delta, config) {
            apply_command(&mut state, Side::Opponent, command, config);
        }

        let events = step(&mut state, frame.delta, config);
        ticks += 1;
        if !events.is_empty() {
            debug!(tick = state.tick, ?events, "frame events");
        }
        if state.game_state == GameState::GameOver {
            break;
        }
    }

    let winner = if state.game_state == GameState::GameOver {
        state.match_winner(config.max_rounds)
    } else {
        None
    };
    info!(
        ticks,
        frames = input.transcript.len(),
        ?winner,
        "replay finished"
    );

    Ok(ReplayOutput {
        winner,
        rounds_won: state.rounds_won,
        rounds_lost: state.rounds_lost,
        rounds_played: state.rounds_won + state.rounds_lost,
        ticks,
        transcript_hash: hash_transcript(&input.transcript),
        seed_commit: hash_seed(config.seed),
    })
}
