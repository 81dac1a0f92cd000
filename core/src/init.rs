use tracing::info;

use crate::error::ConfigError;
use crate::fighter::Fighter;
use crate::types::*;

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        for (field, value) in [
            ("start_round_delay", self.start_round_delay),
            ("end_round_delay", self.end_round_delay),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDelay { field, value });
            }
        }
        if !self.max_round_time.is_finite() || self.max_round_time <= 0.0 {
            return Err(ConfigError::InvalidRoundTime(self.max_round_time));
        }

        let ring = &self.ring;
        for (field, value) in [
            ("ring.min_x", ring.min_x),
            ("ring.max_x", ring.max_x),
            ("ring.min_y", ring.min_y),
            ("ring.max_y", ring.max_y),
            ("player_start_x", self.player_start_x),
            ("opponent_start_x", self.opponent_start_x),
            ("start_y", self.start_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if ring.slope.is_nan() || ring.slope <= 0.0 {
            return Err(ConfigError::InvalidSlope(ring.slope));
        }
        if ring.min_x > ring.max_x {
            return Err(ConfigError::InvertedRing {
                axis: 'x',
                min: ring.min_x,
                max: ring.max_x,
            });
        }
        if ring.min_y > ring.max_y {
            return Err(ConfigError::InvertedRing {
                axis: 'y',
                min: ring.min_y,
                max: ring.max_y,
            });
        }
        if self.contact.distance_x.is_nan()
            || self.contact.distance_y.is_nan()
            || self.contact.distance_x < 0.0
            || self.contact.distance_y < 0.0
        {
            return Err(ConfigError::InvalidContactBox {
                x: self.contact.distance_x,
                y: self.contact.distance_y,
            });
        }
        if self.start_y < ring.min_y || self.start_y > ring.max_y {
            return Err(ConfigError::StartOutsideRing {
                start_y: self.start_y,
                min_y: ring.min_y,
                max_y: ring.max_y,
            });
        }
        Ok(())
    }
}

/// Default config with the given AI seed.
pub fn default_config(seed: u32) -> MatchConfig {
    MatchConfig {
        seed,
        ..MatchConfig::default()
    }
}

/// Build both fighters and start round 1.
pub fn create_match(config: &MatchConfig) -> Result<MatchState, ConfigError> {
    config.validate()?;

    let mut state = MatchState {
        tick: 0,
        player: Fighter::new(&config.player),
        opponent: Fighter::new(&config.opponent),
        game_state: GameState::Running,
        difficulty: config.difficulty,
        round_state: RoundState::Starting,
        round_state_time: 0.0,
        current_round: 1,
        rounds_won: 0,
        rounds_lost: 0,
        round_timer: config.max_round_time,
    };
    start_game(&mut state, config);
    Ok(state)
}

/// Reset counters and start round 1. Used for the first match and for restarts.
pub fn start_game(state: &mut MatchState, config: &MatchConfig) {
    state.game_state = GameState::Running;
    state.rounds_won = 0;
    state.rounds_lost = 0;
    state.current_round = 1;
    start_round(state, config);
}

/// Put both fighters on their marks and restart the round clock.
pub fn start_round(state: &mut MatchState, config: &MatchConfig) {
    state
        .player
        .get_ready(config.player_start_x, config.start_y);
    state
        .opponent
        .get_ready(config.opponent_start_x, config.start_y);
    state.round_state = RoundState::Starting;
    state.round_state_time = 0.0;
    state.round_timer = config.max_round_time;
    info!(round = state.current_round, "round starting");
}
