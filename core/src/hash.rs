use sha2::{Digest, Sha256};

use crate::types::TickFrame;

/// SHA-256 hash of a full input script.
///
/// Each frame contributes its delta, then each side's command count followed
/// by the command codes, so commands cannot drift between sides or frames
/// without changing the digest.
pub fn hash_transcript(transcript: &[TickFrame]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for frame in transcript {
        hasher.update(frame.delta.to_le_bytes());
        for commands in [&frame.player, &frame.opponent] {
            hasher.update((commands.len() as u32).to_le_bytes());
            hasher.update(commands.iter().map(|c| *c as u8).collect::<Vec<u8>>());
        }
    }
    hasher.finalize().into()
}

/// SHA-256 commitment of the AI seed.
pub fn hash_seed(seed: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
