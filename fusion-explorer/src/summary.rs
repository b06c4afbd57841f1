//! Per-`k` summary rows.

use serde::{Deserialize, Serialize};

use fusion_core::types::DerivationResult;
use fusion_tap::{bit_length, to_prefixed_binary};

/// One row of an exploration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KSummary {
    /// Tap parameter
    pub k: i64,
    /// Seed (low 64 bits when `exact` is false)
    pub seed_value: u64,
    /// Decimal digits in `seed_value`
    pub seed_length: u32,
    /// Significant bits in `seed_value`
    pub bit_length: u32,
    /// Tap state in binary (`0b...`)
    pub tap_state: String,
    /// Significant bits in the tap state
    pub tap_bit_length: u32,
    /// ZPE overflow in binary (`0b...`)
    pub zpe_overflow: String,
    /// ZPE overflow in decimal
    pub zpe_overflow_decimal: u64,
    /// Whether `k` is in the active overflow regime
    pub has_zpe: bool,
    /// Whether the seed and tap state are exact rather than wrapped
    pub exact: bool,
}

impl From<&DerivationResult> for KSummary {
    fn from(result: &DerivationResult) -> Self {
        Self {
            k: result.k(),
            seed_value: result.seed_value(),
            seed_length: decimal_len(result.seed_value()),
            bit_length: bit_length(result.seed_value()),
            tap_state: to_prefixed_binary(result.tap_state()),
            tap_bit_length: bit_length(result.tap_state()),
            zpe_overflow: to_prefixed_binary(result.zpe_overflow()),
            zpe_overflow_decimal: result.zpe_overflow(),
            has_zpe: result.has_overflow_regime(),
            exact: result.is_exact(),
        }
    }
}

fn decimal_len(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_tap::derive;

    #[test]
    fn test_reference_row() {
        let row = KSummary::from(&derive(11));
        assert_eq!(row.k, 11);
        assert_eq!(row.seed_value, 1234567891011);
        assert_eq!(row.seed_length, 13);
        assert_eq!(row.bit_length, 41);
        assert_eq!(row.tap_state, "0b10001111101110001111110110000100001000100011");
        assert_eq!(row.tap_bit_length, 44);
        assert_eq!(row.zpe_overflow, "0b111011");
        assert_eq!(row.zpe_overflow_decimal, 59);
        assert!(row.has_zpe);
        assert!(row.exact);
    }

    #[test]
    fn test_quiet_row() {
        let row = KSummary::from(&derive(1));
        assert_eq!(row.seed_length, 1);
        assert_eq!(row.bit_length, 1);
        assert_eq!(row.tap_state, "0b1001");
        assert_eq!(row.tap_bit_length, 4);
        assert_eq!(row.zpe_overflow, "0b0");
        assert!(!row.has_zpe);
    }

    #[test]
    fn test_wrapped_row_is_flagged() {
        let row = KSummary::from(&derive(16));
        assert!(!row.exact);
        assert!(row.tap_bit_length <= 64);
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(1234567891011), 13);
        assert_eq!(decimal_len(u64::MAX), 20);
    }
}
