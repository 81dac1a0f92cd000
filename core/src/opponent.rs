use tracing::debug;

use crate::contact::within_contact_distance;
use crate::prng::{prng_chance, prng_int_range};
use crate::types::*;

/// Decides the opponent's inputs for the coming tick.
pub trait OpponentPolicy {
    fn decide(&mut self, state: &MatchState, delta_time: f32, config: &MatchConfig)
        -> Vec<Command>;
}

/// Never acts. The opponent only moves if a script drives it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn decide(&mut self, _: &MatchState, _: f32, _: &MatchConfig) -> Vec<Command> {
        Vec::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrawlerTuning {
    /// Seconds between decisions.
    pub reaction_time: f32,
    /// Chance to swing when in range.
    pub attack_chance: f64,
    /// Chance to block an incoming swing.
    pub block_chance: f64,
}

pub fn brawler_tuning(difficulty: Difficulty) -> BrawlerTuning {
    match difficulty {
        Difficulty::Easy => BrawlerTuning {
            reaction_time: 0.9,
            attack_chance: 0.35,
            block_chance: 0.1,
        },
        Difficulty::Medium => BrawlerTuning {
            reaction_time: 0.6,
            attack_chance: 0.55,
            block_chance: 0.3,
        },
        Difficulty::Hard => BrawlerTuning {
            reaction_time: 0.3,
            attack_chance: 0.8,
            block_chance: 0.5,
        },
    }
}

/// Walks in, then trades punches, kicks and blocks at a pace set by difficulty.
#[derive(Clone, Debug)]
pub struct BrawlerPolicy {
    tuning: BrawlerTuning,
    rng_state: u32,
    cooldown: f32,
}

impl BrawlerPolicy {
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        Self {
            tuning: brawler_tuning(difficulty),
            rng_state: seed,
            cooldown: 0.0,
        }
    }

    fn chance(&mut self, p: f64) -> bool {
        let (hit, next) = prng_chance(self.rng_state, p);
        self.rng_state = next;
        hit
    }

    fn approach(me: Vec2, target: Vec2, contact: &ContactBox) -> Vec<Command> {
        let mut commands = Vec::new();
        let dx = target.x - me.x;
        if dx < -contact.distance_x * 0.5 {
            commands.push(Command::MoveLeft);
        } else if dx > contact.distance_x * 0.5 {
            commands.push(Command::MoveRight);
        } else {
            commands.extend([Command::StopLeft, Command::StopRight]);
        }

        let dy = target.y - me.y;
        if dy < -contact.distance_y * 0.5 {
            commands.push(Command::MoveDown);
        } else if dy > contact.distance_y * 0.5 {
            commands.push(Command::MoveUp);
        } else {
            commands.extend([Command::StopUp, Command::StopDown]);
        }
        commands
    }
}

impl OpponentPolicy for BrawlerPolicy {
    fn decide(
        &mut self,
        state: &MatchState,
        delta_time: f32,
        config: &MatchConfig,
    ) -> Vec<Command> {
        if state.round_state != RoundState::InProgress {
            self.cooldown = 0.0;
            return Vec::new();
        }

        // Bad frame times count as zero-length, matching `step`
        if delta_time.is_finite() && delta_time > 0.0 {
            self.cooldown += delta_time;
        }
        if self.cooldown < self.tuning.reaction_time {
            return Vec::new();
        }
        self.cooldown = 0.0;

        let me = &state.opponent;
        let foe = &state.player;
        if !me.state().is_neutral() && !me.is_blocking() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if !within_contact_distance(me.position(), foe.position(), &config.contact) {
            if me.is_blocking() {
                commands.push(Command::StopBlocking);
            }
            commands.extend(Self::approach(me.position(), foe.position(), &config.contact));
            return commands;
        }

        commands.extend([
            Command::StopLeft,
            Command::StopRight,
            Command::StopUp,
            Command::StopDown,
        ]);
        if foe.is_attacking() && self.chance(self.tuning.block_chance) {
            commands.push(Command::Block);
        } else {
            commands.push(Command::StopBlocking);
            if self.chance(self.tuning.attack_chance) {
                let (roll, next) = prng_int_range(self.rng_state, 0, 1);
                self.rng_state = next;
                commands.push(if roll == 0 {
                    Command::Punch
                } else {
                    Command::Kick
                });
            }
        }
        debug!(?commands, "opponent decision");
        commands
    }
}

/// The policy the config asks for.
pub fn policy_for(config: &MatchConfig) -> Box<dyn OpponentPolicy> {
    match config.opponent_mode {
        OpponentMode::Passive => Box::new(PassivePolicy),
        OpponentMode::Ai => Box::new(BrawlerPolicy::new(config.difficulty, config.seed)),
    }
}
