//! Minimal binary rendering of `u64` values.

/// Renders `n` in binary, most-significant bit first, with no leading zeros.
///
/// Zero renders as `"0"`. Bits are peeled off least-significant first and
/// then reversed.
pub fn to_binary(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(bit_length(n) as usize);
    let mut rest = n;
    while rest > 0 {
        digits.push(if rest & 1 == 1 { '1' } else { '0' });
        rest >>= 1;
    }
    digits.iter().rev().collect()
}

/// Renders `n` in binary with a `0b` prefix.
pub fn to_prefixed_binary(n: u64) -> String {
    format!("0b{}", to_binary(n))
}

/// Number of significant bits in `n`; `0` for `n == 0`.
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, "0" ; "zero")]
    #[test_case(1, "1" ; "one")]
    #[test_case(2, "10" ; "two")]
    #[test_case(9, "1001" ; "nine")]
    #[test_case(59, "111011" ; "reference overflow")]
    #[test_case(9876543128099, "10001111101110001111110110000100001000100011" ; "reference tap state")]
    fn test_to_binary(n: u64, expected: &str) {
        assert_eq!(to_binary(n), expected);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(to_binary(u64::MAX), "1".repeat(64));
        assert_eq!(to_binary(1 << 63), format!("1{}", "0".repeat(63)));
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(to_prefixed_binary(0), "0b0");
        assert_eq!(to_prefixed_binary(59), "0b111011");
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    proptest! {
        #[test]
        fn prop_round_trip(n in any::<u64>()) {
            let text = to_binary(n);
            prop_assert_eq!(u64::from_str_radix(&text, 2).unwrap(), n);
        }

        #[test]
        fn prop_no_leading_zero(n in 1u64..=u64::MAX) {
            let text = to_binary(n);
            prop_assert!(text.starts_with('1'));
            prop_assert_eq!(text.len() as u32, bit_length(n));
        }

        #[test]
        fn prop_matches_std_formatting(n in any::<u64>()) {
            prop_assert_eq!(to_binary(n), format!("{:b}", n));
        }
    }
}
