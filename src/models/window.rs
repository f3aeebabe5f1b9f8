//! Obligation window model.
//!
//! This module contains the [`ObligationWindow`] type: the inclusive date
//! range from a reference date through the day before the next paycheck.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The inclusive range of dates whose obligations must be covered before the
/// next paycheck arrives.
///
/// # Example
///
/// ```
/// use baln_engine::models::ObligationWindow;
/// use chrono::NaiveDate;
///
/// let window = ObligationWindow {
///     start: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
///     next_paycheck: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
/// };
///
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())); // start
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 4, 14).unwrap())); // end
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())); // payday
/// assert_eq!(window.len_days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationWindow {
    /// The reference date (inclusive).
    pub start: NaiveDate,
    /// The day before the next paycheck (inclusive).
    pub end: NaiveDate,
    /// The next paycheck date, one day after `end`.
    pub next_paycheck: NaiveDate,
}

impl ObligationWindow {
    /// Checks if a given date falls within the window, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered by the window.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every date in the window in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}
