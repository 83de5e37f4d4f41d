//! String helpers

use std::borrow::Cow;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Truncate to the first `count` characters, appending `...`.
///
/// Strings shorter than `count` come back unchanged (and unallocated).
/// Counting is by character, so multi-byte input never splits a
/// boundary.
///
/// # Examples
///
/// ```rust
/// use corekit_util::text::truncate_at;
///
/// assert_eq!(truncate_at("observable", 6), "observ...");
/// assert_eq!(truncate_at("short", 10), "short");
/// ```
pub fn truncate_at(input: &str, count: usize) -> Cow<'_, str> {
    if input.chars().count() < count {
        Cow::Borrowed(input)
    } else {
        let prefix: String = input.chars().take(count).collect();
        Cow::Owned(format!("{prefix}..."))
    }
}

/// Case-insensitive substring test.
///
/// An empty `source` or `needle` counts as a match.
pub fn contains_ignore_case(source: &str, needle: &str) -> bool {
    if source.is_empty() || needle.is_empty() {
        return true;
    }
    source.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse with a fallback: the default is returned whenever `value` does
/// not parse.
///
/// # Examples
///
/// ```rust
/// use corekit_util::text::parse_or;
///
/// assert_eq!(parse_or("42", 0i32), 42);
/// assert_eq!(parse_or("forty-two", 0i32), 0);
/// ```
pub fn parse_or<T: FromStr>(value: &str, default: T) -> T {
    value.parse().unwrap_or(default)
}

/// Read a packed julian date of the form `year * 1000 + month ordinal`
/// (e.g. `"2023005"` is May 2023) as the first day of that month.
///
/// Ordinals past 12 roll over into later years, and an ordinal of zero
/// rolls back to December of the previous year.
pub fn parse_julian_date(value: &str) -> Result<NaiveDate> {
    let packed: i32 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidJulianDate(value.to_string()))?;

    // Months relative to January of the packed year.
    let offset = packed % 1000 - 1;
    let year = packed / 1000 + offset.div_euclid(12);
    let month = (offset.rem_euclid(12) + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidJulianDate(value.to_string()))
}
