//! Calendar range computation and duration rendering

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How wide a calendar range to compute around a base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

/// Whether a month-based range looks backward or forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tense {
    Rolling,
    Future,
}

/// The calendar range containing `base` for the given frequency.
///
/// Weeks start on Sunday; months, quarters, and years snap to their
/// calendar boundaries. `None` and `Daily` collapse to the base date
/// itself.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use corekit_util::date::{date_range, Frequency};
///
/// let wed = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// let (begin, end) = date_range(wed, Frequency::Weekly);
/// assert_eq!(begin, NaiveDate::from_ymd_opt(2026, 8, 2).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
/// ```
pub fn date_range(base: NaiveDate, frequency: Frequency) -> (NaiveDate, NaiveDate) {
    match frequency {
        Frequency::None | Frequency::Daily => (base, base),
        Frequency::Weekly => {
            let begin = base - Duration::days(i64::from(base.weekday().num_days_from_sunday()));
            (begin, begin + Duration::days(6))
        }
        Frequency::Monthly => (
            first_of_month(base.year(), base.month()),
            end_of_month(base.year(), base.month()),
        ),
        Frequency::Quarterly => {
            let quarter = base.month0() / 3 + 1;
            (
                first_of_month(base.year(), 3 * quarter - 2),
                end_of_month(base.year(), 3 * quarter),
            )
        }
        Frequency::Annually => (
            first_of_month(base.year(), 1),
            end_of_month(base.year(), 12),
        ),
    }
}

/// A month-based range anchored at `base`: `Rolling` reaches `months`
/// back, `Future` reaches `months` ahead. Saturates at the representable
/// calendar range.
pub fn date_range_by_month(base: NaiveDate, tense: Tense, months: u32) -> (NaiveDate, NaiveDate) {
    match tense {
        Tense::Rolling => (
            base.checked_sub_months(Months::new(months))
                .unwrap_or(NaiveDate::MIN),
            base,
        ),
        Tense::Future => (
            base,
            base.checked_add_months(Months::new(months))
                .unwrap_or(NaiveDate::MAX),
        ),
    }
}

/// Render an elapsed duration in the largest sensible unit, floored:
/// "1 second" through "n days". Durations under a second count as one
/// second.
pub fn humanize(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(1);
    let (value, unit) = if seconds < 60 {
        (seconds, "second")
    } else if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else {
        (seconds / 86_400, "day")
    };

    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.pred_opt().unwrap_or(NaiveDate::MIN)
}
