use tracing::debug;

use crate::init::start_game;
use crate::types::*;

/// Apply one semantic input to the match, between ticks.
///
/// Movement presses only register while a round is in progress; releases
/// always do so a key let go during the start delay cannot leave a fighter
/// walking. Skip and restart act on the match, not on `side`.
pub fn apply_command(state: &mut MatchState, side: Side, command: Command, config: &MatchConfig) {
    let fighting = state.round_state == RoundState::InProgress;
    let fighter = state.fighter_mut(side);

    match command {
        Command::MoveLeft if fighting => fighter.move_left(),
        Command::MoveRight if fighting => fighter.move_right(),
        Command::MoveUp if fighting => fighter.move_up(),
        Command::MoveDown if fighting => fighter.move_down(),
        Command::MoveLeft | Command::MoveRight | Command::MoveUp | Command::MoveDown => {}
        Command::StopLeft => fighter.stop_moving_left(),
        Command::StopRight => fighter.stop_moving_right(),
        Command::StopUp => fighter.stop_moving_up(),
        Command::StopDown => fighter.stop_moving_down(),
        Command::Block => fighter.block(),
        Command::StopBlocking => fighter.stop_blocking(),
        Command::Punch => fighter.punch(),
        Command::Kick => fighter.kick(),
        Command::SkipDelay => skip_delay(state, config),
        Command::Restart => {
            if state.game_state == GameState::GameOver {
                debug!("restarting match");
                start_game(state, config);
            }
        }
    }
}

/// Jump the current round phase's clock to its threshold so the next tick advances it.
fn skip_delay(state: &mut MatchState, config: &MatchConfig) {
    if state.game_state != GameState::Running {
        return;
    }
    match state.round_state {
        RoundState::Starting => state.round_state_time = config.start_round_delay,
        RoundState::Ending => state.round_state_time = config.end_round_delay,
        RoundState::InProgress => {}
    }
}
