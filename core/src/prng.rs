/// Mulberry32: small deterministic 32-bit generator for opponent decisions.
/// Pure function: returns (value in [0, 1), next_state), so the state can
/// live inside serializable structs and replays reproduce exactly.
pub fn prng_next(state: u32) -> (f64, u32) {
    let mut t = state.wrapping_add(0x6d2b79f5);
    let next_state = t;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = (t ^ (t >> 14)) as f64 / 4294967296.0;
    (value, next_state)
}

/// Random integer in [min, max] inclusive.
pub fn prng_int_range(state: u32, min: i32, max: i32) -> (i32, u32) {
    let (value, next_state) = prng_next(state);
    let range = (max - min + 1) as f64;
    (min + (value * range).floor() as i32, next_state)
}

/// True with probability `p`.
pub fn prng_chance(state: u32, p: f64) -> (bool, u32) {
    let (value, next_state) = prng_next(state);
    (value < p, next_state)
}
