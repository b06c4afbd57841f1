//! ZPE overflow extraction.
//!
//! Below [`OVERFLOW_THRESHOLD`] the extractor is quiet and always yields `0`.
//! From the threshold up it XORs the tap state with the bare heartbeat, which
//! exposes exactly the bits the `+k` phase offset changed, carries included.

use fusion_core::constants::OVERFLOW_THRESHOLD;

use crate::tap::heartbeat;

/// Extracts the ZPE overflow for a tap state.
pub fn extract_overflow(tap_state: u64, seed: u64, k: i64) -> u64 {
    if k < OVERFLOW_THRESHOLD {
        return 0;
    }
    tap_state ^ heartbeat(seed)
}
