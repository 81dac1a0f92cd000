pub mod arena;
pub mod constants;
pub mod contact;
pub mod error;
pub mod fighter;
pub mod hash;
pub mod init;
pub mod input;
pub mod opponent;
pub mod prng;
pub mod replay;
pub mod step;
pub mod types;

pub use arena::clamp_to_ring;
pub use constants::*;
pub use contact::{resolve_attack, within_contact_distance, ContactHit};
pub use error::ConfigError;
pub use fighter::Fighter;
pub use hash::*;
pub use init::*;
pub use input::apply_command;
pub use opponent::{policy_for, BrawlerPolicy, OpponentPolicy, PassivePolicy};
pub use prng::*;
pub use replay::run_replay;
pub use step::step;
pub use types::*;
