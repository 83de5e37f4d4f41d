//! Short human-readable number rendering

/// Abbreviate a number with K/M/B suffixes.
///
/// Precision narrows as magnitude grows: up to three decimals in the
/// billions, two in the millions, one in the thousands; trailing zeros
/// are trimmed. Below a thousand, `with_decimals` selects between two
/// decimals and a whole number.
///
/// # Examples
///
/// ```rust
/// use corekit_util::numfmt::short_format;
///
/// assert_eq!(short_format(1_500_000_000.0, false), "1.5B");
/// assert_eq!(short_format(-2_340_000.0, false), "-2.34M");
/// assert_eq!(short_format(1_000.0, false), "1K");
/// assert_eq!(short_format(123.456, true), "123.46");
/// assert_eq!(short_format(123.456, false), "123");
/// ```
pub fn short_format(value: f64, with_decimals: bool) -> String {
    if value.abs() > 999_999_999.0 {
        format!("{}B", trimmed(value / 1e9, 3))
    } else if value.abs() > 999_999.0 {
        format!("{}M", trimmed(value / 1e6, 2))
    } else if value.abs() > 999.0 {
        format!("{}K", trimmed(value / 1e3, 1))
    } else if with_decimals {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}

fn trimmed(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
