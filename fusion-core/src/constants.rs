//! Fixed design constants of the Binary Fusion Tap pipeline.
//!
//! None of these are configurable at runtime. Only the tap parameter `k`
//! varies between invocations.

// ═══════════════════════════════════════════════════════════════════════════════
// TAP PARAMETER
// ═══════════════════════════════════════════════════════════════════════════════

/// Default tap parameter used when the caller supplies none.
pub const DEFAULT_K: i64 = 11;

/// Largest `k` whose concatenated numeral 1..k fits in a `u64`.
///
/// `k = 14` gives `1234567891011121314` (19 digits). `k = 15` gives a 21-digit
/// numeral, past `u64::MAX`. Above this value the seed and tap state are the
/// low 64 bits of the true values.
pub const MAX_EXACT_K: i64 = 14;

// ═══════════════════════════════════════════════════════════════════════════════
// HEARTBEAT
// ═══════════════════════════════════════════════════════════════════════════════

/// Left-shift applied to the seed (the "8-fold heartbeat").
pub const HEARTBEAT_SHIFT: u32 = 3;

/// Multiplier equivalent to [`HEARTBEAT_SHIFT`].
pub const HEARTBEAT_FACTOR: u64 = 1 << HEARTBEAT_SHIFT;

// ═══════════════════════════════════════════════════════════════════════════════
// ZPE OVERFLOW
// ═══════════════════════════════════════════════════════════════════════════════

/// Smallest `k` for which the overflow extractor is active.
/// Below it the overflow is always zero.
pub const OVERFLOW_THRESHOLD: i64 = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// EXPLORER
// ═══════════════════════════════════════════════════════════════════════════════

/// Tap bit lengths reported as "power of two" by the explorer.
pub const POWER_OF_TWO_BIT_LENGTHS: [u32; 4] = [8, 16, 32, 64];

/// Fibonacci values of `k` highlighted by the explorer.
pub const FIBONACCI_K: [i64; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

/// Width in characters of the longest bar in the bit-length chart.
pub const CHART_WIDTH: usize = 100;

/// Default first `k` of an exploration.
pub const DEFAULT_EXPLORE_START: i64 = 1;

/// Default last `k` (inclusive) of an exploration.
pub const DEFAULT_EXPLORE_END: i64 = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Environment variable overriding [`DEFAULT_K`].
pub const ENV_TAP_K: &str = "FUSION_TAP_K";

/// Environment variable selecting the default checksum algorithm.
pub const ENV_CHECKSUM_ALGORITHM: &str = "FUSION_TAP_CHECKSUM";
