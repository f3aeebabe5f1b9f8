//! Weekly haircut scheduling.
//!
//! The haircut is booked on the first Friday found scanning forward from the
//! reference date, provided that Friday is inside the window.

use chrono::{Datelike, Duration, Weekday};
use tracing::debug;

use crate::config::HaircutConfig;
use crate::models::{AuditStep, IncludedItem, ItemKind, ObligationWindow};

/// The weekday haircuts are booked on.
pub const HAIRCUT_WEEKDAY: Weekday = Weekday::Fri;

/// Number of days scanned from the reference date (the date itself plus the
/// following seven).
pub const HAIRCUT_SCAN_DAYS: i64 = 8;

/// The result of scheduling the haircut.
#[derive(Debug, Clone)]
pub struct HaircutResult {
    /// The haircut, if a Friday inside the window was found.
    pub item: Option<IncludedItem>,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Schedules at most one haircut inside the window.
///
/// No weekend shift applies: a Friday is never on a weekend.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::schedule_haircut;
/// use baln_engine::config::HaircutConfig;
/// use baln_engine::models::ObligationWindow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let haircut = HaircutConfig { name: "Haircut".to_string(), amount: Decimal::new(5000, 2) };
/// let window = ObligationWindow {
///     start: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
///     next_paycheck: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
/// };
///
/// let result = schedule_haircut(&haircut, &window, 1);
/// let item = result.item.unwrap();
/// assert_eq!(item.due_date, NaiveDate::from_ymd_opt(2025, 4, 4).unwrap());
/// assert!(!item.shifted);
/// ```
pub fn schedule_haircut(
    haircut: &HaircutConfig,
    window: &ObligationWindow,
    step_number: u32,
) -> HaircutResult {
    let found = (0..HAIRCUT_SCAN_DAYS)
        .map(|i| window.start + Duration::days(i))
        .find(|d| d.weekday() == HAIRCUT_WEEKDAY && window.contains(*d));

    debug!(found = ?found, "Scanned for haircut Friday");

    let reasoning = match found {
        Some(date) => format!("First Friday from {} is {}, inside the window", window.start, date),
        None => format!(
            "No Friday between {} and {} within {} days of the reference date",
            window.start, window.end, HAIRCUT_SCAN_DAYS
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "haircut".to_string(),
        rule_name: "Weekly Haircut".to_string(),
        input: serde_json::json!({
            "name": haircut.name,
            "amount": haircut.amount.to_string(),
            "scan_from": window.start.to_string(),
            "scan_days": HAIRCUT_SCAN_DAYS
        }),
        output: serde_json::json!({
            "due_date": found.map(|d| d.to_string()),
            "included": found.is_some()
        }),
        reasoning,
    };

    let item = found.map(|date| {
        IncludedItem::new(
            haircut.name.clone(),
            haircut.amount,
            date,
            date,
            ItemKind::Haircut,
        )
    });

    HaircutResult { item, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn haircut() -> HaircutConfig {
        HaircutConfig {
            name: "Haircut".to_string(),
            amount: Decimal::new(5000, 2),
        }
    }

    fn window(start: NaiveDate, end: NaiveDate) -> ObligationWindow {
        ObligationWindow {
            start,
            end,
            next_paycheck: end + Duration::days(1),
        }
    }

    /// HC-001: Friday inside a Wednesday-to-Monday window
    #[test]
    fn test_haircut_found_mid_window() {
        let result = schedule_haircut(&haircut(), &window(date(2025, 4, 2), date(2025, 4, 7)), 1);
        let item = result.item.unwrap();
        assert_eq!(item.due_date, date(2025, 4, 4));
        assert_eq!(item.kind, ItemKind::Haircut);
        assert_eq!(result.audit_step.output["included"], true);
    }

    /// HC-002: reference date is itself a Friday
    #[test]
    fn test_haircut_on_reference_friday() {
        let result = schedule_haircut(&haircut(), &window(date(2025, 4, 4), date(2025, 4, 7)), 1);
        assert_eq!(result.item.unwrap().due_date, date(2025, 4, 4));
    }

    /// HC-003: a Saturday-to-Monday window holds no Friday
    #[test]
    fn test_haircut_missing_when_window_has_no_friday() {
        let result = schedule_haircut(&haircut(), &window(date(2025, 4, 5), date(2025, 4, 7)), 1);
        assert!(result.item.is_none());
        assert_eq!(result.audit_step.output["included"], false);
        assert!(result.audit_step.output["due_date"].is_null());
    }

    /// HC-004: only one haircut even when the window spans two Fridays
    #[test]
    fn test_only_first_friday_is_booked() {
        let result = schedule_haircut(&haircut(), &window(date(2025, 4, 1), date(2025, 4, 14)), 1);
        assert_eq!(result.item.unwrap().due_date, date(2025, 4, 4));
    }
}
