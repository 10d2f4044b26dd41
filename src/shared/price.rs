//! Price string parsing for Steam's display-formatted amounts.
//!
//! Steam renders prices in the wallet's locale: `"$0.03"`, `"1.234,56€"`,
//! `"12,--€"`, `"CDN$ 5.00"`. [`parse_price`] reduces them to an `f64`.
//!
//! The comma/dot heuristic is lossy. Without locale context `"1.234"` cannot be
//! told apart from one-thousand-two-hundred-thirty-four, and is read as `1.234`.
//! A US-style `"$1,234.56"` has both separators, so it is read the European way
//! as `1.23456`.

/// Parse a Steam price string into a number.
///
/// - Everything except digits, `,`, `.` and `-` is stripped.
/// - Both `,` and `.` present: `.` is a thousands separator, `,` the decimal point.
/// - Only `,` present: `,` is the decimal point.
/// - Otherwise the string is read as-is.
///
/// The longest leading numeric prefix is parsed, so trailing garbage such as the
/// `--` in `"12,--€"` is ignored. Returns `None` when no number can be read.
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let has_comma = cleaned.contains(',');
    let has_dot = cleaned.contains('.');
    let normalized = if has_comma && has_dot {
        cleaned.replace('.', "").replace(',', ".")
    } else if has_comma {
        cleaned.replace(',', ".")
    } else {
        cleaned
    };

    let value: f64 = leading_number(&normalized)?.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a volume label (`"1,234"`, `"15 sold"`) as an unsigned count.
///
/// Non-digits are dropped; anything unreadable counts as zero.
pub fn parse_volume(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Longest prefix of the form `-?digits*(.digits*)?` containing at least one digit.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if bytes.first() == Some(&b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        let mut frac_digits = 0;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            frac_digits += 1;
        }
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    (digits > 0).then(|| s[..end].trim_end_matches('.'))
}
