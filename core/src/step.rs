use tracing::{debug, info, warn};

use crate::arena::clamp_to_ring;
use crate::contact::resolve_attack;
use crate::init::start_round;
use crate::types::*;

/// Advance the match by one frame.
///
/// Sub-step order:
///  1. Round phase: STARTING → IN_PROGRESS after the start delay, ENDING →
///     next round or GAME_OVER after the end delay, else accumulate phase time
///  2. Update both fighters (animation clocks, walking, clip completion)
///  3. Face the fighters toward each other
///  4. Clamp both fighters into the ring
///  5. While IN_PROGRESS: run the round clock, deciding a timeout by life
///     (ties go to the player); then resolve the player's swing, then the
///     opponent's, each only if the round is still in progress
///
/// Returns the events raised during the frame.
pub fn step(state: &mut MatchState, delta_time: f32, config: &MatchConfig) -> Vec<MatchEvent> {
    let delta_time = sanitize_delta(delta_time);
    let mut events = Vec::new();
    state.tick = state.tick.wrapping_add(1);

    // 1. Round phase
    if state.game_state == GameState::GameOver {
        // Hold the final frame's phase; fighters keep animating below
    } else if state.round_state == RoundState::Starting
        && state.round_state_time >= config.start_round_delay
    {
        state.round_state = RoundState::InProgress;
        state.round_state_time = 0.0;
        info!(round = state.current_round, "fight");
        events.push(MatchEvent::FightStarted {
            round: state.current_round,
        });
    } else if state.round_state == RoundState::Ending
        && state.round_state_time >= config.end_round_delay
    {
        if let Some(winner) = state.match_winner(config.max_rounds) {
            state.game_state = GameState::GameOver;
            info!(
                ?winner,
                rounds_won = state.rounds_won,
                rounds_lost = state.rounds_lost,
                "match over"
            );
            events.push(MatchEvent::MatchOver { winner });
        } else {
            state.current_round += 1;
            start_round(state, config);
            events.push(MatchEvent::RoundStarted {
                round: state.current_round,
            });
        }
    } else {
        state.round_state_time += delta_time;
    }

    // 2. Fighters
    state.player.update(delta_time);
    state.opponent.update(delta_time);

    // 3. Facing
    if state.player.position().x <= state.opponent.position().x {
        state.player.face_right();
        state.opponent.face_left();
    } else {
        state.player.face_left();
        state.opponent.face_right();
    }

    // 4. Ring bounds
    let player_pos = clamp_to_ring(state.player.position(), &config.ring);
    state.player.set_position(player_pos);
    let opponent_pos = clamp_to_ring(state.opponent.position(), &config.ring);
    state.opponent.set_position(opponent_pos);

    // 5. Round clock and contact
    if state.round_state == RoundState::InProgress {
        state.round_timer = (state.round_timer - delta_time).max(0.0);
        if state.round_timer <= 0.0 {
            let winner = if state.player.life() >= state.opponent.life() {
                Side::Player
            } else {
                Side::Opponent
            };
            end_round(state, winner, RoundEndReason::Timeout, &mut events);
        }

        resolve_side(state, Side::Player, config, &mut events);
        resolve_side(state, Side::Opponent, config, &mut events);
    }

    events
}

/// Land `attacker`'s swing if the round is still live, ending it on a knockout.
fn resolve_side(
    state: &mut MatchState,
    attacker: Side,
    config: &MatchConfig,
    events: &mut Vec<MatchEvent>,
) {
    if state.round_state != RoundState::InProgress {
        return;
    }

    let hit = match attacker {
        Side::Player => resolve_attack(&mut state.player, &mut state.opponent, &config.contact),
        Side::Opponent => resolve_attack(&mut state.opponent, &mut state.player, &config.contact),
    };
    let Some(hit) = hit else {
        return;
    };

    let defender = attacker.other();
    debug!(
        ?attacker,
        damage = hit.damage,
        blocked = hit.blocked,
        remaining_life = hit.remaining_life,
        "hit"
    );
    events.push(MatchEvent::Hit {
        attacker,
        defender,
        damage: hit.damage,
        blocked: hit.blocked,
        remaining_life: hit.remaining_life,
    });

    if hit.knockout {
        end_round(state, attacker, RoundEndReason::Knockout, events);
    }
}

/// Settle the round for `winner`: set WIN/LOSE, bump the tally, enter ENDING.
fn end_round(
    state: &mut MatchState,
    winner: Side,
    reason: RoundEndReason,
    events: &mut Vec<MatchEvent>,
) {
    state.fighter_mut(winner).win();
    state.fighter_mut(winner.other()).lose();
    match winner {
        Side::Player => state.rounds_won += 1,
        Side::Opponent => state.rounds_lost += 1,
    }
    state.round_state = RoundState::Ending;
    state.round_state_time = 0.0;

    info!(
        round = state.current_round,
        ?winner,
        ?reason,
        rounds_won = state.rounds_won,
        rounds_lost = state.rounds_lost,
        "round over"
    );
    events.push(MatchEvent::RoundWon { winner, reason });
}

/// Negative or non-finite frame times are a caller bug: fatal in debug
/// builds, treated as a zero-length frame in release.
fn sanitize_delta(delta_time: f32) -> f32 {
    let valid = delta_time.is_finite() && delta_time >= 0.0;
    debug_assert!(valid, "delta time must be finite and non-negative, got {delta_time}");
    if valid {
        delta_time
    } else {
        warn!(delta_time, "invalid delta time, treating frame as zero-length");
        0.0
    }
}
