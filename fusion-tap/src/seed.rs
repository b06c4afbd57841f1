//! Concatenated-sequence seeding.
//!
//! The seed for `k` is the decimal numeral formed by writing `1, 2, ..., k`
//! one after another and reading the result in base 10:
//!
//! ```text
//! k = 11  ->  "1234567891011"  ->  1234567891011
//! ```
//!
//! ## Precision
//!
//! The numeral outgrows `u64` after [`MAX_EXACT_K`]. Past that point
//! [`generate_seed`] returns the low 64 bits of the true value (the numeral
//! modulo 2^64) instead of failing. Callers that need to know whether the
//! value is exact should use [`checked_seed`] or [`is_exact`].

use fusion_core::constants::MAX_EXACT_K;

/// Derives the seed for tap parameter `k`.
///
/// Non-positive `k` concatenates nothing, and the empty numeral is defined
/// as `0`. For `k > MAX_EXACT_K` the result wraps modulo 2^64.
///
/// The numeral is folded one term at a time (`seed * 10^digits(i) + i`)
/// rather than built as text and parsed, so the wrapped value is the exact
/// residue of the full numeral.
pub fn generate_seed(k: i64) -> u64 {
    if k <= 0 {
        return 0;
    }

    (1..=k as u64).fold(0u64, |seed, i| {
        seed.wrapping_mul(decimal_shift(i)).wrapping_add(i)
    })
}

/// Derives the seed for `k`, or `None` if the numeral does not fit in a `u64`.
pub fn checked_seed(k: i64) -> Option<u64> {
    if k <= 0 {
        return Some(0);
    }

    (1..=k as u64).try_fold(0u64, |seed, i| {
        seed.checked_mul(decimal_shift(i))?.checked_add(i)
    })
}

/// True when the seed for `k` is exact rather than wrapped.
pub fn is_exact(k: i64) -> bool {
    k <= MAX_EXACT_K
}

/// Returns the concatenated decimal numeral for `k` as text.
///
/// Empty for `k <= 0`. The buffer is sized from the total digit count of
/// `1..=k`, so the text grows with `k` without a fixed cap. Intended for
/// display of small ranges; the length is roughly `k * log10(k)` bytes.
pub fn concat_numeral(k: i64) -> String {
    if k <= 0 {
        return String::new();
    }

    let mut numeral = String::with_capacity(numeral_len(k));
    numeral.extend((1..=k).map(|i| i.to_string()));
    numeral
}

/// Total number of decimal digits in the numeral for `k`.
pub fn numeral_len(k: i64) -> usize {
    if k <= 0 {
        return 0;
    }

    let k = k as u64;
    let mut total: u64 = 0;
    let mut band_start: u64 = 1;
    let mut digits: u64 = 1;

    // Numbers with the same digit count form bands: 1-9, 10-99, 100-999, ...
    while band_start <= k {
        let band_end = band_start.saturating_mul(10).saturating_sub(1).min(k);
        total = total.saturating_add((band_end - band_start + 1).saturating_mul(digits));
        if band_end == k {
            break;
        }
        band_start = band_end + 1;
        digits += 1;
    }

    usize::try_from(total).unwrap_or(usize::MAX)
}

/// Seeds for consecutive `k`, each folded from the previous one.
///
/// Yields `(k, generate_seed(k))` for every `k` in `start..=end`. Walking a
/// range this way costs one fold step per `k` instead of one per digit group
/// of every numeral.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    next_k: Option<i64>,
    end: i64,
    seed: u64,
}

impl SeedSequence {
    /// Creates a sequence over `start..=end` (empty when `end < start`).
    pub fn new(start: i64, end: i64) -> Self {
        let seed = match start.checked_sub(1) {
            Some(prev) => generate_seed(prev),
            None => 0,
        };
        Self {
            next_k: Some(start),
            end,
            seed,
        }
    }
}

impl Iterator for SeedSequence {
    type Item = (i64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.next_k.filter(|&k| k <= self.end)?;

        if k > 0 {
            let i = k as u64;
            self.seed = self.seed.wrapping_mul(decimal_shift(i)).wrapping_add(i);
        }
        self.next_k = k.checked_add(1);

        Some((k, self.seed))
    }
}

/// Decimal digit count of a positive integer.
fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// `10^digits(n)`. At most `10^19`, which fits in a `u64`.
fn decimal_shift(n: u64) -> u64 {
    10u64.pow(digit_count(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, 0 ; "zero")]
    #[test_case(-1, 0 ; "negative one")]
    #[test_case(i64::MIN, 0 ; "most negative")]
    #[test_case(1, 1 ; "one")]
    #[test_case(9, 123456789 ; "nine")]
    #[test_case(10, 12345678910 ; "ten")]
    #[test_case(11, 1234567891011 ; "eleven")]
    #[test_case(14, 1234567891011121314 ; "last exact")]
    fn test_generate_seed(k: i64, expected: u64) {
        assert_eq!(generate_seed(k), expected);
    }

    #[test]
    fn test_empty_numeral_is_zero() {
        assert_eq!(concat_numeral(0), "");
        assert_eq!(concat_numeral(-7), "");
        assert_eq!(generate_seed(0), 0);
        assert_eq!(checked_seed(0), Some(0));
    }

    #[test]
    fn test_seed_wraps_past_exact_range() {
        // 123456789101112131415 mod 2^64
        let full: u128 = 123456789101112131415;
        let expected = (full % (1u128 << 64)) as u64;
        assert_eq!(generate_seed(15), expected);
    }

    #[test]
    fn test_seed_wraps_for_larger_k() {
        // 12345678910111213141516 mod 2^64
        let full: u128 = 12345678910111213141516;
        let expected = (full % (1u128 << 64)) as u64;
        assert_eq!(generate_seed(16), expected);
    }

    #[test]
    fn test_checked_seed_boundary() {
        assert_eq!(checked_seed(MAX_EXACT_K), Some(1234567891011121314));
        assert_eq!(checked_seed(MAX_EXACT_K + 1), None);
        assert!(is_exact(MAX_EXACT_K));
        assert!(!is_exact(MAX_EXACT_K + 1));
    }

    #[test]
    fn test_concat_numeral() {
        assert_eq!(concat_numeral(1), "1");
        assert_eq!(concat_numeral(11), "1234567891011");
        assert_eq!(concat_numeral(15), "123456789101112131415");
    }

    #[test_case(0, 0)]
    #[test_case(9, 9)]
    #[test_case(10, 11)]
    #[test_case(99, 189)]
    #[test_case(100, 192)]
    #[test_case(1000, 2893)]
    fn test_numeral_len(k: i64, expected: usize) {
        assert_eq!(numeral_len(k), expected);
    }

    #[test]
    fn test_numeral_len_does_not_overflow_at_max() {
        assert!(numeral_len(i64::MAX) > 0);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_seed_sequence_matches_generate_seed() {
        let seeds: Vec<_> = SeedSequence::new(-2, 30).collect();
        assert_eq!(seeds.len(), 33);
        for (k, seed) in seeds {
            assert_eq!(seed, generate_seed(k), "k = {}", k);
        }
    }

    #[test]
    fn test_seed_sequence_starting_mid_range() {
        let mut seq = SeedSequence::new(11, 12);
        assert_eq!(seq.next(), Some((11, 1234567891011)));
        assert_eq!(seq.next(), Some((12, 123456789101112)));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_seed_sequence_empty_and_terminal() {
        assert_eq!(SeedSequence::new(5, 4).count(), 0);
        assert_eq!(SeedSequence::new(i64::MIN, i64::MIN).collect::<Vec<_>>(), vec![(i64::MIN, 0)]);

        // Stops at i64::MAX without overflowing the counter.
        let mut seq = SeedSequence {
            next_k: Some(i64::MAX),
            end: i64::MAX,
            seed: 0,
        };
        assert!(seq.next().is_some());
        assert!(seq.next().is_none());
    }

    proptest! {
        #[test]
        fn prop_seed_matches_text_parse_in_exact_range(k in 1i64..=MAX_EXACT_K) {
            let parsed: u64 = concat_numeral(k).parse().unwrap();
            prop_assert_eq!(generate_seed(k), parsed);
            prop_assert_eq!(checked_seed(k), Some(parsed));
        }

        #[test]
        fn prop_seed_is_low_bits_of_numeral(k in 1i64..=300) {
            // Reduce the decimal text modulo 2^64 digit by digit.
            let expected = concat_numeral(k)
                .bytes()
                .fold(0u64, |acc, b| acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0')));
            prop_assert_eq!(generate_seed(k), expected);
        }

        #[test]
        fn prop_numeral_len_matches_text(k in -5i64..=2000) {
            prop_assert_eq!(numeral_len(k), concat_numeral(k).len());
        }
    }
}
