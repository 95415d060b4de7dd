//! Common calendar utility functions.
use crate::pattern::PatternValueType;
use chrono::{Datelike, NaiveDate, Weekday};

/// Month mnemonics, January first.
pub(crate) const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Day of week mnemonics, Monday first.
pub(crate) const DAYS_OF_WEEK: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Looks up mnemonic value (case-insensitive) and returns its 1-based position in `values`.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<PatternValueType> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|x| x.eq_ignore_ascii_case(input))
            .map(|i| i as PatternValueType + 1)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month, `None` for an invalid month.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Returns `true` if `date` is the last day of its month.
pub(crate) fn is_last_day_of_month(date: NaiveDate) -> bool {
    days_in_month(date.year(), date.month()) == Some(date.day())
}

/// Returns the business day nearest to the `day` of the month of `date`.
///
/// Saturday moves one day back and Sunday one day forward, even across the month boundary.
/// Returns `None` if the month has no such day.
pub(crate) fn nearest_weekday(date: NaiveDate, day: PatternValueType) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(date.year(), date.month(), day)?;

    match base.weekday() {
        Weekday::Sat => base.pred_opt(),
        Weekday::Sun => base.succ_opt(),
        _ => Some(base),
    }
}

/// Returns day of the month of the `nth` occurrence of the day of week `dow` (0 is Sunday, taken modulo 7).
///
/// Returns `None` if such occurrence falls outside the month.
pub(crate) fn nth_dow(year: i32, month: u32, dow: PatternValueType, nth: PatternValueType) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (dow % 7 + 7 - first.weekday().num_days_from_sunday()) % 7;
    let day = 1 + i64::from(offset) + 7 * (i64::from(nth) - 1);

    if day < 1 || day > i64::from(days_in_month(year, month)?) {
        None
    } else {
        u32::try_from(day).ok()
    }
}
