use crate::types::{AnimationClip, FighterState};

// All durations are in seconds, all distances in world units.

// Fighter
pub const MOVEMENT_SPEED: f32 = 10.0;
pub const MAX_LIFE: f32 = 100.0;
pub const HIT_STRENGTH: f32 = 5.0;
pub const BLOCK_DAMAGE_FACTOR: f32 = 0.2;

// Attack window, as fractions of the attack clip's duration (exclusive)
pub const ATTACK_WINDOW_START: f32 = 0.33;
pub const ATTACK_WINDOW_END: f32 = 0.66;

// Sprite sheets are 2 rows x 3 columns
pub const ANIMATION_FRAMES: usize = 6;

// Rounds
pub const MAX_ROUNDS: u32 = 3;
pub const MAX_ROUND_TIME: f32 = 99.99;
pub const CRITICAL_ROUND_TIME: f32 = 10.0;
pub const START_ROUND_DELAY: f32 = 2.0;
pub const END_ROUND_DELAY: f32 = 2.0;

// Ring
pub const RING_MIN_X: f32 = 7.0;
pub const RING_MAX_X: f32 = 60.0;
pub const RING_MIN_Y: f32 = 4.0;
pub const RING_MAX_Y: f32 = 22.0;
pub const RING_SLOPE: f32 = 3.16;

// Starting marks
pub const PLAYER_START_POSITION_X: f32 = 16.0;
pub const OPPONENT_START_POSITION_X: f32 = 51.0;
pub const FIGHTER_START_POSITION_Y: f32 = 15.0;

// Contact box
pub const FIGHTER_CONTACT_DISTANCE_X: f32 = 7.5;
pub const FIGHTER_CONTACT_DISTANCE_Y: f32 = 1.5;

// Nominal frame time, used by scripts and tests
pub const TICK_RATE: u32 = 60;
pub const FRAME_TIME: f32 = 1.0 / TICK_RATE as f32;

pub fn animation_clip(state: FighterState) -> AnimationClip {
    match state {
        FighterState::Block => AnimationClip {
            frame_duration: 0.05,
            frame_count: ANIMATION_FRAMES,
            looping: true,
        },
        FighterState::Hurt => AnimationClip {
            frame_duration: 0.03,
            frame_count: ANIMATION_FRAMES,
            looping: false,
        },
        FighterState::Idle => AnimationClip {
            frame_duration: 0.1,
            frame_count: ANIMATION_FRAMES,
            looping: true,
        },
        FighterState::Kick => AnimationClip {
            frame_duration: 0.05,
            frame_count: ANIMATION_FRAMES,
            looping: false,
        },
        FighterState::Lose => AnimationClip {
            frame_duration: 0.05,
            frame_count: ANIMATION_FRAMES,
            looping: false,
        },
        FighterState::Punch => AnimationClip {
            frame_duration: 0.05,
            frame_count: ANIMATION_FRAMES,
            looping: false,
        },
        FighterState::Walk => AnimationClip {
            frame_duration: 0.08,
            frame_count: ANIMATION_FRAMES,
            looping: true,
        },
        FighterState::Win => AnimationClip {
            frame_duration: 0.05,
            frame_count: ANIMATION_FRAMES,
            looping: true,
        },
    }
}
