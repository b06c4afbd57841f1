//! Text rendering of exploration results.
//!
//! Every renderer returns a `String` ending in a newline; printing is left to
//! the caller.

use fusion_core::constants::{CHART_WIDTH, MAX_EXACT_K, OVERFLOW_THRESHOLD};
use fusion_tap::concat_numeral;

use crate::special::SpecialValues;
use crate::summary::KSummary;

const WIDE_RULE_LEN: usize = 100;
const NARROW_RULE_LEN: usize = 80;

fn rule(ch: char, len: usize) -> String {
    std::iter::repeat(ch).take(len).collect()
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn zpe_display(row: &KSummary) -> String {
    if row.has_zpe {
        row.zpe_overflow_decimal.to_string()
    } else {
        "N/A".to_string()
    }
}

/// Summary table, one line per `k`.
///
/// Seeds past the exact-precision limit are marked with `*` and explained in
/// a footnote.
pub fn render_summary_table(rows: &[KSummary]) -> String {
    let mut lines = vec![
        rule('=', WIDE_RULE_LEN),
        "BINARY FUSION TAP - K-VALUE EXPLORER".to_string(),
        rule('=', WIDE_RULE_LEN),
        String::new(),
        format!(
            "{:<4} {:<18} {:<10} {:<6} {:<9} {:<15}",
            "K", "Seed Value", "Seed Len", "Bits", "Tap Bits", "ZPE Overflow"
        )
        .trim_end()
        .to_string(),
        rule('-', WIDE_RULE_LEN),
    ];

    for row in rows {
        let seed = if row.exact {
            row.seed_value.to_string()
        } else {
            format!("{}*", row.seed_value)
        };
        lines.push(
            format!(
                "{:<4} {:<18} {:<10} {:<6} {:<9} {:<15}",
                row.k,
                seed,
                row.seed_length,
                row.bit_length,
                row.tap_bit_length,
                zpe_display(row)
            )
            .trim_end()
            .to_string(),
        );
    }

    lines.push(rule('-', WIDE_RULE_LEN));
    lines.push(format!("Total k values explored: {}", rows.len()));
    if rows.iter().any(|row| !row.exact) {
        lines.push(format!(
            "* low 64 bits only: the seed numeral exceeds u64 for k > {}",
            MAX_EXACT_K
        ));
    }
    lines.push(rule('=', WIDE_RULE_LEN));

    finish(lines)
}

/// One detailed block per `k`.
///
/// Includes the full seed numeral, which grows with `k`; meant for short
/// ranges.
pub fn render_detailed(rows: &[KSummary]) -> String {
    let mut lines = Vec::new();

    for row in rows {
        lines.push(rule('=', NARROW_RULE_LEN));
        lines.push(format!("K = {}", row.k));
        lines.push(rule('=', NARROW_RULE_LEN));
        lines.push(format!("Seed Value: {}", row.seed_value));
        lines.push(format!("Seed String: {}", concat_numeral(row.k)));
        lines.push(format!("Tap State: {}", row.tap_state));
        lines.push(format!(
            "Bit Length: {} → {} (after 8-fold heartbeat)",
            row.bit_length, row.tap_bit_length
        ));

        if row.has_zpe {
            lines.push(format!(
                "ZPE Overflow: {} (decimal: {})",
                row.zpe_overflow, row.zpe_overflow_decimal
            ));
        } else {
            lines.push(format!("ZPE Overflow: N/A (k < {})", OVERFLOW_THRESHOLD));
        }

        if !row.exact {
            lines.push("Precision: wrapped modulo 2^64".to_string());
        }

        lines.push(rule('=', NARROW_RULE_LEN));
    }

    if lines.is_empty() {
        return String::new();
    }
    finish(lines)
}

/// Horizontal bar chart of tap bit length per `k`, scaled so the longest bar
/// is [`CHART_WIDTH`] characters.
pub fn render_chart(rows: &[KSummary]) -> String {
    let max_bits = rows.iter().map(|row| row.tap_bit_length).max().unwrap_or(0);
    let scale = if max_bits > 0 {
        CHART_WIDTH as f64 / f64::from(max_bits)
    } else {
        1.0
    };

    let mut lines = vec![
        rule('=', WIDE_RULE_LEN),
        "BIT LENGTH GROWTH CHART".to_string(),
        rule('=', WIDE_RULE_LEN),
    ];

    for row in rows {
        let bar_len = (f64::from(row.tap_bit_length) * scale) as usize;
        lines.push(format!(
            "k={:2} [{:3} bits] {}",
            row.k,
            row.tap_bit_length,
            rule('█', bar_len)
        ));
    }

    lines.push(rule('=', WIDE_RULE_LEN));
    finish(lines)
}

/// Report of notable rows.
pub fn render_special(special: &SpecialValues) -> String {
    let mut lines = vec![
        rule('=', WIDE_RULE_LEN),
        "SPECIAL K VALUES".to_string(),
        rule('=', WIDE_RULE_LEN),
    ];

    if let Some(first) = &special.first_zpe {
        lines.push(String::new());
        lines.push(format!("First ZPE Overflow (k={}):", first.k));
        lines.push(format!("  Decimal: {}", first.zpe_overflow_decimal));
        lines.push(format!("  Binary:  {}", first.zpe_overflow));
    }

    if let Some(max) = &special.max_zpe {
        lines.push(String::new());
        lines.push(format!("Maximum ZPE Overflow (k={}):", max.k));
        lines.push(format!("  Decimal: {}", max.zpe_overflow_decimal));
        lines.push(format!("  Binary:  {}", max.zpe_overflow));
    }

    if !special.fibonacci_k.is_empty() {
        lines.push(String::new());
        lines.push("Fibonacci K Values:".to_string());
        for row in &special.fibonacci_k {
            lines.push(format!(
                "  k={:2}: {} bits, ZPE={}",
                row.k,
                row.tap_bit_length,
                zpe_display(row)
            ));
        }
    }

    if !special.power_of_two_bits.is_empty() {
        lines.push(String::new());
        lines.push("Power-of-2 Bit Lengths:".to_string());
        for row in &special.power_of_two_bits {
            lines.push(format!("  k={:2}: {} bits", row.k, row.tap_bit_length));
        }
    }

    lines.push(rule('=', WIDE_RULE_LEN));
    finish(lines)
}
