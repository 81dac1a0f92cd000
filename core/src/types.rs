use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::fighter::Fighter;

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Tint applied by the renderer. The simulation never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// ── Fighter ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FighterState {
    Idle,
    Walk,
    Block,
    Punch,
    Kick,
    Hurt,
    Win,
    Lose,
}

impl FighterState {
    pub fn clip(self) -> AnimationClip {
        animation_clip(self)
    }

    pub fn is_attack(self) -> bool {
        matches!(self, FighterState::Punch | FighterState::Kick)
    }

    /// States that ignore incoming hits.
    pub fn is_hit_immune(self) -> bool {
        matches!(
            self,
            FighterState::Hurt | FighterState::Win | FighterState::Lose
        )
    }

    /// States that accept a new block or attack.
    pub fn is_neutral(self) -> bool {
        matches!(self, FighterState::Idle | FighterState::Walk)
    }
}

/// Frame timing of one sprite-sheet animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClip {
    pub frame_duration: f32,
    pub frame_count: usize,
    pub looping: bool,
}

impl AnimationClip {
    pub fn duration(&self) -> f32 {
        self.frame_duration * self.frame_count as f32
    }

    fn frame_number(&self, state_time: f32) -> usize {
        if state_time <= 0.0 {
            return 0;
        }
        (state_time / self.frame_duration) as usize
    }

    /// True once playback has run past the last frame. Looping clips never finish.
    pub fn is_finished(&self, state_time: f32) -> bool {
        !self.looping && self.frame_number(state_time) > self.frame_count - 1
    }

    pub fn key_frame_index(&self, state_time: f32) -> usize {
        let n = self.frame_number(state_time);
        if self.looping {
            n % self.frame_count
        } else {
            n.min(self.frame_count - 1)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterProfile {
    pub name: String,
    pub color: Color,
}

// ── Match ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundState {
    Starting,
    InProgress,
    Ending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEndReason {
    Knockout,
    Timeout,
}

/// Things that happened during one tick, for the audio and HUD layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    RoundStarted {
        round: u32,
    },
    FightStarted {
        round: u32,
    },
    Hit {
        attacker: Side,
        defender: Side,
        damage: f32,
        blocked: bool,
        remaining_life: f32,
    },
    RoundWon {
        winner: Side,
        reason: RoundEndReason,
    },
    MatchOver {
        winner: Side,
    },
}

/// Everything the simulation owns for one match. Both fighters live here;
/// nothing is reached through globals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub tick: u32,
    pub player: Fighter,
    pub opponent: Fighter,
    pub game_state: GameState,
    pub difficulty: Difficulty,
    pub round_state: RoundState,
    /// Seconds spent in the current round phase.
    pub round_state_time: f32,
    /// 1-based.
    pub current_round: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    /// Counts down while the round is in progress.
    pub round_timer: f32,
}

impl MatchState {
    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Side holding a strict majority of `max_rounds`, if any.
    pub fn match_winner(&self, max_rounds: u32) -> Option<Side> {
        if self.rounds_won > max_rounds / 2 {
            Some(Side::Player)
        } else if self.rounds_lost > max_rounds / 2 {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn is_round_time_critical(&self, config: &MatchConfig) -> bool {
        self.round_timer < config.critical_round_time
    }

    /// Text shown while a round is starting, `None` otherwise.
    pub fn round_banner(&self, config: &MatchConfig) -> Option<String> {
        if self.game_state != GameState::Running || self.round_state != RoundState::Starting {
            return None;
        }
        if self.round_state_time < config.start_round_delay * 0.5 {
            Some(format!("ROUND {}", self.current_round))
        } else {
            Some("FIGHT!".to_string())
        }
    }
}

// ── Input ───────────────────────────────────────────────────

/// Semantic input, already translated from keys or touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Command {
    MoveLeft = 0,
    MoveRight = 1,
    MoveUp = 2,
    MoveDown = 3,
    StopLeft = 4,
    StopRight = 5,
    StopUp = 6,
    StopDown = 7,
    Block = 8,
    StopBlocking = 9,
    Punch = 10,
    Kick = 11,
    SkipDelay = 12,
    Restart = 13,
}

/// One recorded frame: elapsed time plus the commands issued before it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    pub delta: f32,
    #[serde(default)]
    pub player: Vec<Command>,
    #[serde(default)]
    pub opponent: Vec<Command>,
}

// ── Config ──────────────────────────────────────────────────

/// Trapezoidal playable area, narrower toward the top of the ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub slope: f32,
}

impl Default for RingBounds {
    fn default() -> Self {
        Self {
            min_x: RING_MIN_X,
            max_x: RING_MAX_X,
            min_y: RING_MIN_Y,
            max_y: RING_MAX_Y,
            slope: RING_SLOPE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactBox {
    pub distance_x: f32,
    pub distance_y: f32,
}

impl Default for ContactBox {
    fn default() -> Self {
        Self {
            distance_x: FIGHTER_CONTACT_DISTANCE_X,
            distance_y: FIGHTER_CONTACT_DISTANCE_Y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentMode {
    /// The opponent only does what the script tells it.
    #[default]
    Passive,
    Ai,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub seed: u32,
    pub max_rounds: u32,
    pub max_round_time: f32,
    pub critical_round_time: f32,
    pub start_round_delay: f32,
    pub end_round_delay: f32,
    pub ring: RingBounds,
    pub contact: ContactBox,
    pub player_start_x: f32,
    pub opponent_start_x: f32,
    pub start_y: f32,
    pub player: FighterProfile,
    pub opponent: FighterProfile,
    pub difficulty: Difficulty,
    pub opponent_mode: OpponentMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_rounds: MAX_ROUNDS,
            max_round_time: MAX_ROUND_TIME,
            critical_round_time: CRITICAL_ROUND_TIME,
            start_round_delay: START_ROUND_DELAY,
            end_round_delay: END_ROUND_DELAY,
            ring: RingBounds::default(),
            contact: ContactBox::default(),
            player_start_x: PLAYER_START_POSITION_X,
            opponent_start_x: OPPONENT_START_POSITION_X,
            start_y: FIGHTER_START_POSITION_Y,
            player: FighterProfile {
                name: "Slim Stallone".to_string(),
                color: Color::rgba(1.0, 0.2, 0.2, 1.0),
            },
            opponent: FighterProfile {
                name: "Thin Diesel".to_string(),
                color: Color::rgba(0.25, 0.7, 1.0, 1.0),
            },
            difficulty: Difficulty::Easy,
            opponent_mode: OpponentMode::Passive,
        }
    }
}

// ── Replay I/O ──────────────────────────────────────────────

/// A full recorded match: config plus one frame per tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayInput {
    #[serde(default)]
    pub config: MatchConfig,
    pub transcript: Vec<TickFrame>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    /// None when the script ran out before the match was decided.
    pub winner: Option<Side>,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub rounds_played: u32,
    pub ticks: u32,
    /// SHA-256 of the input transcript.
    pub transcript_hash: [u8; 32],
    /// SHA-256 of the seed.
    pub seed_commit: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_clips_last_three_tenths() {
        assert!((FighterState::Punch.clip().duration() - 0.3).abs() < 1e-6);
        assert!((FighterState::Kick.clip().duration() - 0.3).abs() < 1e-6);
        assert!((FighterState::Hurt.clip().duration() - 0.18).abs() < 1e-6);
    }

    #[test]
    fn one_shot_clip_finishes_after_last_frame() {
        let clip = FighterState::Punch.clip();
        assert!(!clip.is_finished(0.0));
        assert!(!clip.is_finished(0.29));
        assert!(clip.is_finished(0.31));
        assert_eq!(clip.key_frame_index(10.0), ANIMATION_FRAMES - 1);
    }

    #[test]
    fn looping_clip_wraps_and_never_finishes() {
        let clip = FighterState::Idle.clip();
        assert!(!clip.is_finished(100.0));
        assert_eq!(clip.key_frame_index(0.05), 0);
        assert_eq!(clip.key_frame_index(0.25), 2);
        assert_eq!(clip.key_frame_index(0.65), 0);
    }

    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"seed": 7, "difficulty": "HARD"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.max_rounds, MAX_ROUNDS);
        assert_eq!(config.ring, RingBounds::default());
        assert_eq!(config.player.name, "Slim Stallone");
    }

    #[test]
    fn commands_parse_from_snake_case() {
        let frame: TickFrame =
            serde_json::from_str(r#"{"delta": 0.016, "player": ["move_left", "punch"]}"#)
                .unwrap();
        assert_eq!(frame.player, vec![Command::MoveLeft, Command::Punch]);
        assert!(frame.opponent.is_empty());
    }
}
