//! Centralized number formatting utilities.
//!
//! All numeric display formatting goes through this module to keep the three
//! zoo tables and their summary cards consistent. Canonical in-memory values
//! are raw fractions for percentages (0.124, not 12.4) and plain ratios for
//! everything else; the formatter is the only place scaling happens.

/// Format a fraction as a percentage with the given decimal precision.
///
/// # Examples
/// ```
/// use zoo_types::formatting::format_pct;
/// assert_eq!(format_pct(0.124, 2), "12.40%");
/// assert_eq!(format_pct(-0.032, 2), "-3.20%");
/// assert_eq!(format_pct(0.081, 1), "8.1%");
/// ```
pub fn format_pct(fraction: f64, decimals: usize) -> String {
    format!("{:.prec$}%", fraction * 100.0, prec = decimals)
}

/// Format a fraction as a percentage with an explicit leading `+` for
/// positive values (excess-return columns).
///
/// # Examples
/// ```
/// use zoo_types::formatting::format_signed_pct;
/// assert_eq!(format_signed_pct(0.052, 2), "+5.20%");
/// assert_eq!(format_signed_pct(-0.015, 2), "-1.50%");
/// assert_eq!(format_signed_pct(0.0, 2), "0.00%");
/// ```
pub fn format_signed_pct(fraction: f64, decimals: usize) -> String {
    let pct = fraction * 100.0;
    if pct > 0.0 {
        format!("+{:.prec$}%", pct, prec = decimals)
    } else {
        format!("{:.prec$}%", pct, prec = decimals)
    }
}

/// Format a plain ratio (Sharpe, IC, IR, loss) with the given precision.
///
/// # Examples
/// ```
/// use zoo_types::formatting::format_ratio;
/// assert_eq!(format_ratio(1.8, 2), "1.80");
/// assert_eq!(format_ratio(0.081, 3), "0.081");
/// ```
pub fn format_ratio(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a turnover-style multiple with an `x` suffix.
///
/// # Examples
/// ```
/// use zoo_types::formatting::format_multiple;
/// assert_eq!(format_multiple(2.5), "2.50x");
/// assert_eq!(format_multiple(0.8), "0.80x");
/// ```
pub fn format_multiple(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Format an inference latency in milliseconds.
///
/// # Examples
/// ```
/// use zoo_types::formatting::format_millis;
/// assert_eq!(format_millis(1.2), "1.2ms");
/// assert_eq!(format_millis(9.5), "9.5ms");
/// ```
pub fn format_millis(value: f64) -> String {
    format!("{:.1}ms", value)
}

/// Parse a formatted display value back to its canonical numeric form.
///
/// Strips unit glyphs (`%`, `x`, `倍`, `ms`), thousands commas, an explicit
/// leading `+`, and whitespace. Percentages come back as raw fractions so
/// `parse_display(&format_pct(v, d))` recovers `v` at `d` decimals.
///
/// Returns `None` when nothing numeric remains.
///
/// # Examples
/// ```
/// use zoo_types::formatting::parse_display;
/// assert_eq!(parse_display("12.40%"), Some(0.124));
/// assert_eq!(parse_display("+5.20%"), Some(0.052));
/// assert_eq!(parse_display("2.50x"), Some(2.5));
/// assert_eq!(parse_display("1,234.5"), Some(1234.5));
/// assert_eq!(parse_display("n/a"), None);
/// ```
pub fn parse_display(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let is_pct = trimmed.ends_with('%');
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '%' | 'x' | '倍' | ',' | '+' | 'm' | 's') && !c.is_whitespace())
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    Some(if is_pct { value / 100.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.124, 2), "12.40%");
        assert_eq!(format_pct(0.0, 2), "0.00%");
        assert_eq!(format_pct(-0.054, 2), "-5.40%");
        assert_eq!(format_pct(0.85, 1), "85.0%");
    }

    #[test]
    fn test_format_signed_pct() {
        assert_eq!(format_signed_pct(0.052, 2), "+5.20%");
        assert_eq!(format_signed_pct(-0.015, 2), "-1.50%");
        assert_eq!(format_signed_pct(0.0, 2), "0.00%");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(1.8, 2), "1.80");
        assert_eq!(format_ratio(-0.5, 2), "-0.50");
        assert_eq!(format_ratio(0.045, 3), "0.045");
    }

    #[test]
    fn test_format_multiple_and_millis() {
        assert_eq!(format_multiple(4.1), "4.10x");
        assert_eq!(format_millis(5.8), "5.8ms");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12.40%"), Some(0.124));
        assert_eq!(parse_display("-3.20%"), Some(-0.032));
        assert_eq!(parse_display("2.50x"), Some(2.5));
        assert_eq!(parse_display("3.0倍"), Some(3.0));
        assert_eq!(parse_display("1.2ms"), Some(1.2));
        assert_eq!(parse_display("  55.00 % "), Some(0.55));
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("--"), None);
    }

    #[test]
    fn test_round_trip_at_precision() {
        for &v in &[0.124_f64, -0.054, 0.0, 0.0812] {
            let parsed = parse_display(&format_pct(v, 2)).unwrap();
            assert!((parsed - v).abs() < 5e-5, "fraction {v} drifted to {parsed}");
        }
        for &v in &[1.8_f64, 0.61, -1.2] {
            let parsed = parse_display(&format_ratio(v, 2)).unwrap();
            assert!((parsed - v).abs() < 5e-3);
        }
        assert_eq!(parse_display(&format_multiple(2.5)), Some(2.5));
    }
}
