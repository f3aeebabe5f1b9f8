//! Fixed monthly bill inclusion.
//!
//! Each [`ExpenseRule`] has one natural due date per month, built from the
//! reference date's year and month. The weekend-shifted date decides whether
//! the bill lands in the window.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::config::ExpenseRule;
use crate::models::{AuditStep, AuditWarning, IncludedItem, ItemKind, ObligationWindow};

use super::date_utils::shift_if_weekend;

/// The result of evaluating every fixed monthly bill against a window.
#[derive(Debug, Clone, Default)]
pub struct FixedBillsResult {
    /// Bills whose shifted due date lies in the window, in rule order.
    pub items: Vec<IncludedItem>,
    /// One audit step per rule.
    pub audit_steps: Vec<AuditStep>,
    /// Rules skipped because their due day does not exist this month.
    pub warnings: Vec<AuditWarning>,
}

/// Builds the natural due date of a rule in the month of `reference`.
///
/// Returns `None` when the due day does not exist in that month (e.g. day 31
/// in April); such a rule has no occurrence that month.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::natural_due_date;
/// use baln_engine::config::ExpenseRule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rent = ExpenseRule {
///     name: "Rent".to_string(),
///     amount: Decimal::new(90000, 2),
///     due_day: 31,
///     critical: false,
/// };
/// let april = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
/// let may = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
///
/// assert_eq!(natural_due_date(&rent, april), None);
/// assert_eq!(natural_due_date(&rent, may), NaiveDate::from_ymd_opt(2025, 5, 31));
/// ```
pub fn natural_due_date(rule: &ExpenseRule, reference: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), rule.due_day)
}

/// Includes every fixed monthly bill whose shifted due date lies in the window.
///
/// # Arguments
///
/// * `rules` - The configured fixed-day bills
/// * `window` - The obligation window; its start supplies the year and month
/// * `first_step` - The step number of the first audit step produced
///
/// # Example
///
/// ```
/// use baln_engine::calculation::include_fixed_bills;
/// use baln_engine::config::ExpenseRule;
/// use baln_engine::models::ObligationWindow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = vec![ExpenseRule {
///     name: "Life Insurance".to_string(),
///     amount: Decimal::new(12300, 2),
///     due_day: 6,
///     critical: false,
/// }];
/// let window = ObligationWindow {
///     start: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
///     next_paycheck: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
/// };
///
/// let result = include_fixed_bills(&rules, &window, 1);
/// assert_eq!(result.items.len(), 1);
/// // Sunday the 6th is payable Monday the 7th
/// assert_eq!(result.items[0].due_date, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
/// assert!(result.items[0].shifted);
/// ```
pub fn include_fixed_bills(
    rules: &[ExpenseRule],
    window: &ObligationWindow,
    first_step: u32,
) -> FixedBillsResult {
    let mut result = FixedBillsResult::default();

    for (offset, rule) in rules.iter().enumerate() {
        let step_number = first_step + offset as u32;

        let Some(natural) = natural_due_date(rule, window.start) else {
            let month = window.start.format("%Y-%m").to_string();
            warn!(
                rule = %rule.name,
                due_day = rule.due_day,
                month = %month,
                "Due day does not exist this month; rule skipped"
            );
            result.warnings.push(AuditWarning {
                code: "due_day_out_of_month".to_string(),
                message: format!(
                    "{} due_day {} does not exist in {}",
                    rule.name, rule.due_day, month
                ),
                severity: (if rule.critical { "high" } else { "medium" }).to_string(),
            });
            result.audit_steps.push(AuditStep {
                step_number,
                rule_id: "fixed_bill".to_string(),
                rule_name: "Fixed Monthly Bill".to_string(),
                input: serde_json::json!({
                    "name": rule.name,
                    "due_day": rule.due_day,
                    "month": month
                }),
                output: serde_json::json!({ "included": false }),
                reasoning: format!(
                    "{} has no day {} in {}; no occurrence this month",
                    rule.name, rule.due_day, month
                ),
            });
            continue;
        };

        let shifted = shift_if_weekend(natural);
        let included = window.contains(shifted);

        debug!(
            rule = %rule.name,
            natural = %natural,
            shifted = %shifted,
            included,
            "Evaluated fixed bill"
        );

        let reasoning = match (included, shifted != natural) {
            (true, true) => format!(
                "{} falls on a weekend ({}), payable {} inside the window",
                rule.name, natural, shifted
            ),
            (true, false) => format!("{} due {} inside the window", rule.name, natural),
            (false, _) => format!(
                "{} payable {} is outside {} to {}",
                rule.name, shifted, window.start, window.end
            ),
        };

        result.audit_steps.push(AuditStep {
            step_number,
            rule_id: "fixed_bill".to_string(),
            rule_name: "Fixed Monthly Bill".to_string(),
            input: serde_json::json!({
                "name": rule.name,
                "amount": rule.amount.to_string(),
                "due_day": rule.due_day,
                "critical": rule.critical
            }),
            output: serde_json::json!({
                "natural_date": natural.to_string(),
                "due_date": shifted.to_string(),
                "included": included
            }),
            reasoning,
        });

        if included {
            result.items.push(IncludedItem::new(
                rule.name.clone(),
                rule.amount,
                natural,
                shifted,
                ItemKind::FixedBill,
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(name: &str, amount: &str, due_day: u32, critical: bool) -> ExpenseRule {
        ExpenseRule {
            name: name.to_string(),
            amount: dec(amount),
            due_day,
            critical,
        }
    }

    fn canonical_rules() -> Vec<ExpenseRule> {
        vec![
            rule("Mortgage", "2328.00", 1, true),
            rule("Auto Payment", "521.34", 23, true),
            rule("Spotify", "19.99", 3, false),
            rule("Google Workspace", "13.01", 3, false),
            rule("Life Insurance", "123.00", 6, false),
        ]
    }

    fn window(start: NaiveDate, end: NaiveDate) -> ObligationWindow {
        ObligationWindow {
            start,
            end,
            next_paycheck: end + chrono::Duration::days(1),
        }
    }

    /// FB-001: Mortgage on the 1st of April 2025 (a Tuesday) is included unshifted
    #[test]
    fn test_mortgage_included_without_shift() {
        let result = include_fixed_bills(
            &canonical_rules(),
            &window(date(2025, 4, 1), date(2025, 4, 14)),
            1,
        );

        let mortgage = result.items.iter().find(|i| i.name == "Mortgage").unwrap();
        assert_eq!(mortgage.due_date, date(2025, 4, 1));
        assert!(!mortgage.shifted);
        assert_eq!(mortgage.amount, dec("2328.00"));
    }

    /// FB-002: only in-window bills are included, in rule order
    #[test]
    fn test_included_bills_for_april_first() {
        let result = include_fixed_bills(
            &canonical_rules(),
            &window(date(2025, 4, 1), date(2025, 4, 14)),
            1,
        );

        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mortgage", "Spotify", "Google Workspace", "Life Insurance"]
        );
        assert_eq!(result.audit_steps.len(), 5);
        assert!(result.warnings.is_empty());
    }

    /// FB-003: weekend due date is shifted and flagged
    #[test]
    fn test_sunday_bill_is_shifted() {
        let result = include_fixed_bills(
            &canonical_rules(),
            &window(date(2025, 4, 2), date(2025, 4, 7)),
            1,
        );

        let insurance = result
            .items
            .iter()
            .find(|i| i.name == "Life Insurance")
            .unwrap();
        assert_eq!(insurance.natural_date, date(2025, 4, 6));
        assert_eq!(insurance.due_date, date(2025, 4, 7));
        assert!(insurance.shifted);
    }

    /// FB-004: a shift can push a bill out of the window
    #[test]
    fn test_shift_pushes_bill_out_of_window() {
        let rules = vec![rule("Gym", "40.00", 5, false)]; // Saturday 2025-04-05
        let result = include_fixed_bills(&rules, &window(date(2025, 4, 2), date(2025, 4, 6)), 1);

        assert!(result.items.is_empty());
        assert_eq!(result.audit_steps[0].output["due_date"], "2025-04-07");
        assert_eq!(result.audit_steps[0].output["included"], false);
    }

    /// FB-005: bills from earlier in the month are not carried into next month
    #[test]
    fn test_only_reference_month_is_considered() {
        let result = include_fixed_bills(
            &canonical_rules(),
            &window(date(2025, 4, 22), date(2025, 5, 5)),
            1,
        );

        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Auto Payment"]);
    }

    /// FB-006: a due day missing from the month is skipped with a warning
    #[test]
    fn test_due_day_31_in_april_is_skipped() {
        let rules = vec![rule("Rent", "900.00", 31, true)];
        let result = include_fixed_bills(&rules, &window(date(2025, 4, 29), date(2025, 5, 5)), 1);

        assert!(result.items.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "due_day_out_of_month");
        assert_eq!(result.warnings[0].severity, "high");
        assert_eq!(
            result.warnings[0].message,
            "Rent due_day 31 does not exist in 2025-04"
        );
        assert_eq!(result.audit_steps[0].output["included"], false);
    }

    #[test]
    fn test_leap_day_exists_in_leap_year() {
        let rules = vec![rule("Leap", "1.00", 29, false)];
        let result = include_fixed_bills(&rules, &window(date(2024, 2, 27), date(2024, 3, 4)), 1);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].due_date, date(2024, 2, 29));
    }

    #[test]
    fn test_audit_steps_are_numbered_from_first_step() {
        let result = include_fixed_bills(
            &canonical_rules(),
            &window(date(2025, 4, 1), date(2025, 4, 14)),
            4,
        );
        let numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![4, 5, 6, 7, 8]);
    }
}
