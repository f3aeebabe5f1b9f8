//! Date utilities: weekend shifting and paycheck dates.
//!
//! Bills that fall on a weekend are payable the following Monday, and
//! paychecks land on a fixed weekday repeating on a fixed cycle.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::PaycheckSchedule;

/// English weekday names indexed by days from Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Moves a weekend date forward to the following Monday.
///
/// Saturdays advance by two days, Sundays by one; every other date is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::shift_if_weekend;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2025, 4, 6).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 4, 7).unwrap();
///
/// assert_eq!(shift_if_weekend(saturday), monday);
/// assert_eq!(shift_if_weekend(sunday), monday);
/// assert_eq!(shift_if_weekend(monday), monday);
/// ```
pub fn shift_if_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Returns the next paycheck strictly after `date` on the default schedule
/// (every 14 days on a Tuesday).
///
/// # Example
///
/// ```
/// use baln_engine::calculation::next_paycheck_after;
/// use chrono::NaiveDate;
///
/// // 2025-04-01 is itself a Tuesday, so the next paycheck is a cycle later.
/// let tuesday = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// assert_eq!(next_paycheck_after(tuesday), NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
///
/// let wednesday = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
/// assert_eq!(next_paycheck_after(wednesday), NaiveDate::from_ymd_opt(2025, 4, 8).unwrap());
/// ```
pub fn next_paycheck_after(date: NaiveDate) -> NaiveDate {
    next_paycheck_on(date, &PaycheckSchedule::default())
}

/// Returns the next paycheck strictly after `date` on the given schedule.
///
/// The candidate is the nearest occurrence of the paycheck weekday on or
/// after `date`; a candidate that is not strictly later is pushed forward by
/// whole cycles. The result is always greater than `date`.
pub fn next_paycheck_on(date: NaiveDate, schedule: &PaycheckSchedule) -> NaiveDate {
    let target = i64::from(schedule.weekday.num_days_from_monday());
    let current = i64::from(date.weekday().num_days_from_monday());
    let offset = (target - current + 7) % 7;

    let mut candidate = date + Duration::days(offset);
    while candidate <= date {
        candidate += Duration::days(i64::from(schedule.cycle_days));
    }
    candidate
}

/// Looks up the weekday name of `date` by its day index.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Produces the weekday name of `date` through calendar formatting.
pub fn formatted_weekday(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
