//! Heartbeat shift and phase offset.
//!
//! ```text
//! heartbeat = seed << 3          (seed * 8, mod 2^64)
//! tap_state = heartbeat + k      (mod 2^64)
//! ```

use fusion_core::constants::HEARTBEAT_SHIFT;

/// Applies the 8-fold heartbeat: a left shift by [`HEARTBEAT_SHIFT`].
///
/// Bits shifted past bit 63 are discarded, which is the same value as
/// `seed.wrapping_mul(8)`.
pub fn heartbeat(seed: u64) -> u64 {
    seed << HEARTBEAT_SHIFT
}

/// Computes the tap state for `seed` and tap parameter `k`.
///
/// The phase offset `k` is added with wraparound. A negative `k` is added in
/// two's complement, i.e. `k` modulo 2^64.
pub fn tap_transform(seed: u64, k: i64) -> u64 {
    heartbeat(seed).wrapping_add(k as u64)
}
