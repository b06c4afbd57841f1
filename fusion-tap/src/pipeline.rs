//! Pipeline orchestration and reporting.
//!
//! ```text
//! k ──► generate_seed ──► tap_transform ──► extract_overflow ──► DerivationResult
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use fusion_core::types::DerivationResult;

use crate::binary::{to_binary, to_prefixed_binary};
use crate::overflow::extract_overflow;
use crate::seed::{generate_seed, SeedSequence};
use crate::tap::tap_transform;

/// Runs the full pipeline for tap parameter `k`.
///
/// Total over every `i64`: non-positive `k` yields a zero seed, and `k`
/// above [`MAX_EXACT_K`](fusion_core::MAX_EXACT_K) wraps modulo 2^64.
#[instrument(level = "debug")]
pub fn derive(k: i64) -> DerivationResult {
    let result = finish(k, generate_seed(k));

    debug!(
        seed_value = result.seed_value(),
        tap_state = result.tap_state(),
        zpe_overflow = result.zpe_overflow(),
        "derived tap state"
    );

    result
}

/// Derives every `k` in `start..=end`, in order.
///
/// Seeds are folded incrementally, so each result matches [`derive`] for the
/// same `k` at a fraction of the cost over long ranges.
pub fn derive_range(start: i64, end: i64) -> impl Iterator<Item = DerivationResult> {
    SeedSequence::new(start, end).map(|(k, seed_value)| finish(k, seed_value))
}

fn finish(k: i64, seed_value: u64) -> DerivationResult {
    let tap_state = tap_transform(seed_value, k);
    let zpe_overflow = extract_overflow(tap_state, seed_value, k);
    DerivationResult::new(k, seed_value, tap_state, zpe_overflow)
}

/// Text report for a [`DerivationResult`], one field per line.
///
/// ```text
/// K Parameter: 11
/// Seed Value: 1234567891011
/// Tap State: 0b10001111101110001111110110000100001000100011
/// ZPE Overflow: 0b111011 (decimal: 59)
/// ```
pub struct Report<'a>(pub &'a DerivationResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "K Parameter: {}", result.k())?;
        writeln!(f, "Seed Value: {}", result.seed_value())?;
        writeln!(f, "Tap State: 0b{}", to_binary(result.tap_state()))?;
        writeln!(
            f,
            "ZPE Overflow: 0b{} (decimal: {})",
            to_binary(result.zpe_overflow()),
            result.zpe_overflow()
        )
    }
}

/// Renders the text report.
pub fn render_report(result: &DerivationResult) -> String {
    Report(result).to_string()
}

/// JSON view of a derivation, with binary renderings alongside the raw values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationView {
    /// The derivation itself
    #[serde(flatten)]
    pub result: DerivationResult,
    /// Seed in binary (`0b...`)
    pub binary_seed: String,
    /// Tap state in binary (`0b...`)
    pub tap_state_binary: String,
    /// ZPE overflow in binary (`0b...`)
    pub zpe_overflow_binary: String,
    /// Whether the values are exact rather than wrapped
    pub exact: bool,
}

impl From<DerivationResult> for DerivationView {
    fn from(result: DerivationResult) -> Self {
        Self {
            binary_seed: to_prefixed_binary(result.seed_value()),
            tap_state_binary: to_prefixed_binary(result.tap_state()),
            zpe_overflow_binary: to_prefixed_binary(result.zpe_overflow()),
            exact: result.is_exact(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_core::constants::{DEFAULT_K, OVERFLOW_THRESHOLD};
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, 0, 0, 0 ; "k zero")]
    #[test_case(1, 1, 9, 0 ; "k one")]
    #[test_case(9, 123456789, 987654321, 0 ; "k nine")]
    #[test_case(11, 1234567891011, 9876543128099, 59 ; "k eleven")]
    fn test_scenarios(k: i64, seed: u64, tap: u64, overflow: u64) {
        let result = derive(k);
        assert_eq!(result.k(), k);
        assert_eq!(result.seed_value(), seed);
        assert_eq!(result.tap_state(), tap);
        assert_eq!(result.zpe_overflow(), overflow);
    }

    #[test]
    fn test_reference_report() {
        let report = render_report(&derive(DEFAULT_K));
        assert_eq!(
            report,
            "K Parameter: 11\n\
             Seed Value: 1234567891011\n\
             Tap State: 0b10001111101110001111110110000100001000100011\n\
             ZPE Overflow: 0b111011 (decimal: 59)\n"
        );
    }

    #[test]
    fn test_zero_report() {
        let report = render_report(&derive(0));
        assert!(report.contains("Tap State: 0b0\n"));
        assert!(report.contains("ZPE Overflow: 0b0 (decimal: 0)\n"));
    }

    #[test]
    fn test_negative_k_is_total() {
        let result = derive(-5);
        assert_eq!(result.seed_value(), 0);
        assert_eq!(result.tap_state(), (-5i64) as u64);
        assert_eq!(result.zpe_overflow(), 0);
    }

    #[test]
    fn test_wrapped_k_still_derives() {
        let result = derive(20);
        assert!(!result.is_exact());
        assert_eq!(result.tap_state(), result.seed_value().wrapping_mul(8).wrapping_add(20));
    }

    #[test]
    fn test_derive_range_matches_derive() {
        let ranged: Vec<_> = derive_range(-3, 40).collect();
        let direct: Vec<_> = (-3..=40).map(derive).collect();
        assert_eq!(ranged, direct);
    }

    #[test]
    fn test_derive_range_empty() {
        assert_eq!(derive_range(10, 9).count(), 0);
    }

    #[test]
    fn test_view_json() {
        let view = DerivationView::from(derive(11));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["k"], 11);
        assert_eq!(json["seed_value"], 1234567891011u64);
        assert_eq!(json["zpe_overflow"], 59);
        assert_eq!(json["zpe_overflow_binary"], "0b111011");
        assert_eq!(json["exact"], true);
    }

    proptest! {
        #[test]
        fn prop_deterministic(k in -50i64..=500) {
            prop_assert_eq!(derive(k), derive(k));
        }

        #[test]
        fn prop_transform_identity(k in -50i64..=500) {
            let result = derive(k);
            let expected = (result.seed_value() << 3).wrapping_add(k as u64);
            prop_assert_eq!(result.tap_state(), expected);
        }

        #[test]
        fn prop_overflow_gating(k in -50i64..=500) {
            let result = derive(k);
            if k < OVERFLOW_THRESHOLD {
                prop_assert_eq!(result.zpe_overflow(), 0);
            } else {
                prop_assert_eq!(
                    result.zpe_overflow(),
                    result.tap_state() ^ result.seed_value().wrapping_mul(8)
                );
            }
        }
    }
}
