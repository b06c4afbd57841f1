//! The value object produced by one run of the derivation pipeline.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EXACT_K, OVERFLOW_THRESHOLD};

/// Outcome of deriving a tap state from the tap parameter `k`.
///
/// Produced once per invocation and never mutated. Fields are read through
/// accessors so a result cannot drift away from the values that produced it.
///
/// # Invariants
///
/// - `tap_state == (seed_value << 3) + k` modulo 2^64
/// - `zpe_overflow == 0` when `k < 10`, else `tap_state ^ (seed_value * 8)`
///
/// # JSON
/// ```text
/// {"k":11,"seed_value":1234567891011,"tap_state":9876543128099,"zpe_overflow":59}
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivationResult {
    k: i64,
    seed_value: u64,
    tap_state: u64,
    zpe_overflow: u64,
}

impl DerivationResult {
    /// Bundles the outputs of the pipeline stages.
    pub fn new(k: i64, seed_value: u64, tap_state: u64, zpe_overflow: u64) -> Self {
        Self {
            k,
            seed_value,
            tap_state,
            zpe_overflow,
        }
    }

    /// The tap parameter.
    pub fn k(&self) -> i64 {
        self.k
    }

    /// Concatenated-sequence seed (low 64 bits when `k` exceeds [`MAX_EXACT_K`]).
    pub fn seed_value(&self) -> u64 {
        self.seed_value
    }

    /// Seed after the heartbeat shift and phase offset.
    pub fn tap_state(&self) -> u64 {
        self.tap_state
    }

    /// Bits altered by the phase-offset addition, or zero in the quiet regime.
    pub fn zpe_overflow(&self) -> u64 {
        self.zpe_overflow
    }

    /// True when `k` is in the active overflow regime (`k >= 10`).
    pub fn has_overflow_regime(&self) -> bool {
        self.k >= OVERFLOW_THRESHOLD
    }

    /// True when the seed and tap state are exact rather than wrapped.
    pub fn is_exact(&self) -> bool {
        self.k <= MAX_EXACT_K
    }
}
