//! Notable rows of an exploration.

use serde::{Deserialize, Serialize};

use fusion_core::constants::{FIBONACCI_K, POWER_OF_TWO_BIT_LENGTHS};

use crate::summary::KSummary;

/// Rows worth calling out in an exploration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialValues {
    /// First row in the active overflow regime
    pub first_zpe: Option<KSummary>,
    /// Row with the largest overflow (earliest wins on ties)
    pub max_zpe: Option<KSummary>,
    /// Rows whose tap state is exactly 8, 16, 32, or 64 bits long
    pub power_of_two_bits: Vec<KSummary>,
    /// Rows whose `k` is a Fibonacci number
    pub fibonacci_k: Vec<KSummary>,
}

impl SpecialValues {
    /// True when nothing notable was found.
    pub fn is_empty(&self) -> bool {
        self.first_zpe.is_none()
            && self.max_zpe.is_none()
            && self.power_of_two_bits.is_empty()
            && self.fibonacci_k.is_empty()
    }
}

/// Scans summaries for notable rows.
pub fn find_special(summaries: &[KSummary]) -> SpecialValues {
    let mut special = SpecialValues::default();

    for row in summaries {
        if row.has_zpe {
            if special.first_zpe.is_none() {
                special.first_zpe = Some(row.clone());
            }

            let is_new_max = special
                .max_zpe
                .as_ref()
                .map_or(true, |max| row.zpe_overflow_decimal > max.zpe_overflow_decimal);
            if is_new_max {
                special.max_zpe = Some(row.clone());
            }
        }

        if POWER_OF_TWO_BIT_LENGTHS.contains(&row.tap_bit_length) {
            special.power_of_two_bits.push(row.clone());
        }

        if FIBONACCI_K.contains(&row.k) {
            special.fibonacci_k.push(row.clone());
        }
    }

    special
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{explore, ExplorerConfig};

    fn rows(start: i64, end: i64) -> Vec<KSummary> {
        explore(&ExplorerConfig::new().range(start, end)).unwrap()
    }

    #[test]
    fn test_quiet_range_has_no_zpe() {
        let special = find_special(&rows(1, 9));
        assert!(special.first_zpe.is_none());
        assert!(special.max_zpe.is_none());
    }

    #[test]
    fn test_first_zpe_is_threshold() {
        let special = find_special(&rows(1, 20));
        assert_eq!(special.first_zpe.as_ref().map(|r| r.k), Some(10));
    }

    #[test]
    fn test_max_zpe_is_largest() {
        let summaries = rows(1, 30);
        let special = find_special(&summaries);
        let max = special.max_zpe.unwrap();
        assert!(summaries.iter().all(|r| r.zpe_overflow_decimal <= max.zpe_overflow_decimal));
        assert_eq!((max.k, max.zpe_overflow_decimal), (23, 4087));
    }

    #[test]
    fn test_max_zpe_tie_keeps_earliest() {
        let mut a = rows(11, 11).remove(0);
        let mut b = a.clone();
        a.k = 100;
        b.k = 200;
        let special = find_special(&[a, b]);
        assert_eq!(special.max_zpe.map(|r| r.k), Some(100));
    }

    #[test]
    fn test_fibonacci_rows() {
        let special = find_special(&rows(1, 20));
        let ks: Vec<i64> = special.fibonacci_k.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_power_of_two_rows() {
        let summaries = rows(1, 20);
        let special = find_special(&summaries);
        assert!(special
            .power_of_two_bits
            .iter()
            .all(|r| POWER_OF_TWO_BIT_LENGTHS.contains(&r.tap_bit_length)));

        let ks: Vec<i64> = special.power_of_two_bits.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![14, 15, 18]);
    }

    #[test]
    fn test_empty_input() {
        assert!(find_special(&[]).is_empty());
    }
}
