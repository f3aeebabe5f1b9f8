//! Ledger validation.
//!
//! Critical bills are cross-checked against a second, independent derivation
//! of which bills are payable in the window. Instead of shifting each natural
//! due date forward, the validator walks the window's payable days and asks
//! which natural dates settle on each one: a weekday settles itself, and a
//! Monday also settles the weekend before it. A critical bill found that way
//! but absent from the ledger is reported.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::config::{ExpenseRule, LedgerConfig};
use crate::models::{AuditStep, IncludedItem, ItemKind, ObligationWindow, ValidationError};

/// The result of validating a ledger.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Every error found, critical omissions first.
    pub errors: Vec<ValidationError>,
    /// The audit step recording the validation.
    pub audit_step: AuditStep,
}

/// Natural dates whose payment lands on `payable`.
fn settled_on(payable: NaiveDate) -> Vec<NaiveDate> {
    match payable.weekday() {
        Weekday::Sat | Weekday::Sun => Vec::new(),
        Weekday::Mon => vec![
            payable,
            payable - Duration::days(1),
            payable - Duration::days(2),
        ],
        _ => vec![payable],
    }
}

/// Finds the payable date of `rule` inside the window, if any.
///
/// Only natural dates in the window start's month count, matching the
/// monthly rule semantics.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::expected_payable_date;
/// use baln_engine::config::ExpenseRule;
/// use baln_engine::models::ObligationWindow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let insurance = ExpenseRule {
///     name: "Life Insurance".to_string(),
///     amount: Decimal::new(12300, 2),
///     due_day: 6,
///     critical: true,
/// };
/// let window = ObligationWindow {
///     start: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///     next_paycheck: NaiveDate::from_ymd_opt(2025, 4, 8).unwrap(),
/// };
///
/// assert_eq!(
///     expected_payable_date(&insurance, &window),
///     NaiveDate::from_ymd_opt(2025, 4, 7)
/// );
/// ```
pub fn expected_payable_date(rule: &ExpenseRule, window: &ObligationWindow) -> Option<NaiveDate> {
    let (year, month) = (window.start.year(), window.start.month());
    window.days().find(|payable| {
        settled_on(*payable)
            .iter()
            .any(|n| n.year() == year && n.month() == month && n.day() == rule.due_day)
    })
}

/// Reports every critical bill payable in the window but missing from `items`.
pub fn check_critical_bills(
    rules: &[ExpenseRule],
    window: &ObligationWindow,
    items: &[IncludedItem],
) -> Vec<ValidationError> {
    rules
        .iter()
        .filter(|rule| rule.critical)
        .filter_map(|rule| {
            let expected = expected_payable_date(rule, window)?;
            let present = items.iter().any(|item| {
                item.kind == ItemKind::FixedBill
                    && item.name == rule.name
                    && item.due_date == expected
            });
            (!present).then(|| ValidationError::CriticalOmitted {
                name: rule.name.clone(),
                expected,
            })
        })
        .collect()
}

/// Validates the included items against the configuration.
///
/// Errors are accumulated, never short-circuited: critical omissions are
/// listed first, followed by a missing haircut.
pub fn validate_ledger(
    config: &LedgerConfig,
    window: &ObligationWindow,
    items: &[IncludedItem],
    step_number: u32,
) -> ValidationResult {
    let mut errors = check_critical_bills(config.expenses(), window, items);

    let haircut_booked = items.iter().any(|item| item.kind == ItemKind::Haircut);
    if !haircut_booked {
        errors.push(ValidationError::HaircutMissing {
            name: config.haircut().name.clone(),
        });
    }

    for error in &errors {
        warn!(error = %error, "Ledger validation error");
    }

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    let critical: Vec<&str> = config
        .expenses()
        .iter()
        .filter(|rule| rule.critical)
        .map(|rule| rule.name.as_str())
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "ledger_validation".to_string(),
        rule_name: "Ledger Validation".to_string(),
        input: serde_json::json!({
            "critical": critical,
            "included": items.len(),
            "haircut_booked": haircut_booked
        }),
        output: serde_json::json!({
            "passed": errors.is_empty(),
            "errors": messages
        }),
        reasoning: if errors.is_empty() {
            "All critical bills present and haircut booked".to_string()
        } else {
            format!("{} validation error(s); ledger withheld", errors.len())
        },
    };

    ValidationResult { errors, audit_step }
}
