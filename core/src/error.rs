use thiserror::Error;

/// Reasons a [`MatchConfig`](crate::MatchConfig) cannot start a match.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidDelay { field: &'static str, value: f32 },

    #[error("max_round_time must be positive, got {0}")]
    InvalidRoundTime(f32),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("ring slope must be positive, got {0}")]
    InvalidSlope(f32),

    #[error("ring extents are inverted: {axis} min {min} > max {max}")]
    InvertedRing { axis: char, min: f32, max: f32 },

    #[error("contact distances must be non-negative, got ({x}, {y})")]
    InvalidContactBox { x: f32, y: f32 },

    #[error("start_y {start_y} lies outside the ring's vertical range [{min_y}, {max_y}]")]
    StartOutsideRing { start_y: f32, min_y: f32, max_y: f32 },
}
