//! Presentational display formatting
//!
//! Turns the engine's exact display text into a grouped numeral for
//! rendering: grouping separators, at most six fractional digits, and the
//! trailing-zero run the rounding stripped put back (so an entered
//! `"3.100"` still reads `3.100`, not `3.1`). Strictly one-way — nothing
//! here ever feeds back into [`CalculatorState`](crate::CalculatorState).
//! Locale knowledge (which separators to use) lives entirely in this
//! module; the engine never sees it.

/// Locale-separator-aware formatter for the calculator display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormatter {
    group_sep: char,
    decimal_sep: char,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayFormatter {
    /// Creates a formatter with `en-US` separators (`1,234.5`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            group_sep: ',',
            decimal_sep: '.',
        }
    }

    /// Creates a formatter with explicit separators, e.g. `('.', ',')`
    /// for `1.234,5`.
    #[must_use]
    pub fn with_separators(group_sep: char, decimal_sep: char) -> Self {
        Self {
            group_sep,
            decimal_sep,
        }
    }

    /// Formats an engine display string for presentation.
    ///
    /// The numeric value is grouped and capped at six fractional digits;
    /// then the raw display's decimal tail is consulted: a tail holding a
    /// nonzero digit re-contributes its trailing-zero run, while an
    /// all-zero (or bare-dot) tail is appended whole. That keeps partial
    /// entries like `"3."` and deliberate zeros like `"3.100"` visible.
    #[must_use]
    pub fn format(&self, display: &str) -> String {
        let value: f64 = display.parse().unwrap_or(f64::NAN);
        let mut formatted = self.localize(value);

        if let Some(dot) = display.find('.') {
            let tail = &display[dot..];
            if tail.chars().any(|c| matches!(c, '1'..='9')) {
                let zeros = tail.chars().rev().take_while(|&c| c == '0').count();
                for _ in 0..zeros {
                    formatted.push('0');
                }
            } else {
                formatted.push(self.decimal_sep);
                formatted.push_str(&tail[1..]);
            }
        }

        formatted
    }

    /// Grouped, rounded rendition of the numeric value alone.
    fn localize(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value == f64::INFINITY {
            return "\u{221e}".to_string();
        }
        if value == f64::NEG_INFINITY {
            return "-\u{221e}".to_string();
        }

        let rounded = format!("{value:.6}");
        let rounded = rounded.trim_end_matches('0').trim_end_matches('.');
        let (sign, magnitude) = match rounded.strip_prefix('-') {
            Some(magnitude) => ("-", magnitude),
            None => ("", rounded),
        };
        let (int_part, frac_part) = match magnitude.find('.') {
            Some(dot) => (&magnitude[..dot], Some(&magnitude[dot + 1..])),
            None => (magnitude, None),
        };

        let mut out = String::with_capacity(rounded.len() + int_part.len() / 3);
        out.push_str(sign);
        group_digits(int_part, self.group_sep, &mut out);
        if let Some(frac) = frac_part {
            out.push(self.decimal_sep);
            out.push_str(frac);
        }
        out
    }
}

/// Inserts a separator every three digits, counting from the right.
fn group_digits(digits: &str, sep: char, out: &mut String) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(display: &str) -> String {
        DisplayFormatter::new().format(display)
    }

    // ===== Grouping tests =====

    #[test]
    fn test_format_small_integer_ungrouped() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("123"), "123");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(fmt("1234"), "1,234");
        assert_eq!(fmt("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_groups_negative() {
        assert_eq!(fmt("-1234567"), "-1,234,567");
    }

    #[test]
    fn test_format_groups_integer_part_only() {
        assert_eq!(fmt("1234.5"), "1,234.5");
    }

    // ===== Fractional digit cap tests =====

    #[test]
    fn test_format_caps_at_six_fraction_digits() {
        assert_eq!(fmt("0.1234567"), "0.123457");
    }

    #[test]
    fn test_format_trims_float_noise() {
        // Engine result of 0.1 + 0.2 renders clean for presentation.
        assert_eq!(fmt("0.30000000000000004"), "0.3");
    }

    // ===== Trailing-zero restoration tests =====

    #[test]
    fn test_format_restores_trailing_zeros() {
        assert_eq!(fmt("3.100"), "3.100");
    }

    #[test]
    fn test_format_keeps_all_zero_tail() {
        assert_eq!(fmt("3.000"), "3.000");
    }

    #[test]
    fn test_format_keeps_bare_dot() {
        assert_eq!(fmt("3."), "3.");
    }

    #[test]
    fn test_format_percent_result() {
        assert_eq!(fmt("0.50"), "0.50");
    }

    #[test]
    fn test_format_no_restoration_without_trailing_zeros() {
        assert_eq!(fmt("3.25"), "3.25");
    }

    // ===== Non-finite tests =====

    #[test]
    fn test_format_infinity() {
        assert_eq!(fmt("Infinity"), "\u{221e}");
        assert_eq!(fmt("-Infinity"), "-\u{221e}");
    }

    #[test]
    fn test_format_nan() {
        assert_eq!(fmt("NaN"), "NaN");
    }

    #[test]
    fn test_format_unparseable_partial_as_nan() {
        assert_eq!(fmt("-"), "NaN");
    }

    // ===== Separator configuration tests =====

    #[test]
    fn test_format_with_european_separators() {
        let f = DisplayFormatter::with_separators('.', ',');
        assert_eq!(f.format("1234.5"), "1.234,5");
        assert_eq!(f.format("1234.50"), "1.234,50");
        assert_eq!(f.format("3.000"), "3,000");
    }

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(DisplayFormatter::default(), DisplayFormatter::new());
    }
}
