//! Configuration types for ledger computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the validated
//! [`LedgerConfig`] aggregate handed to every computation.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of days between paychecks and between anchored occurrences
/// unless configured otherwise.
pub const DEFAULT_CYCLE_DAYS: u32 = 14;

/// Display name used for the weekly haircut when none is configured.
pub const DEFAULT_HAIRCUT_NAME: &str = "Haircut";

fn default_cycle_days() -> u32 {
    DEFAULT_CYCLE_DAYS
}

fn default_haircut_name() -> String {
    DEFAULT_HAIRCUT_NAME.to_string()
}

fn default_paycheck_weekday() -> Weekday {
    Weekday::Tue
}

/// A fixed-day monthly recurring bill.
///
/// # Example
///
/// ```
/// use baln_engine::config::ExpenseRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mortgage = ExpenseRule {
///     name: "Mortgage".to_string(),
///     amount: Decimal::from_str("2328.00").unwrap(),
///     due_day: 1,
///     critical: true,
/// };
/// assert!(mortgage.critical);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRule {
    /// The name shown in the ledger (e.g., "Mortgage").
    pub name: String,
    /// The amount due each month.
    pub amount: Decimal,
    /// Day of the month the bill is due (1-31).
    pub due_day: u32,
    /// Whether omitting this bill from an in-window ledger is a validation error.
    #[serde(default)]
    pub critical: bool,
}

/// An anchor-based recurrence: one start date plus a constant period.
///
/// Every occurrence `anchor + k * period_days` is independently subject to
/// weekend shifting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringAnchor {
    /// The name shown in the ledger (e.g., "Housekeeping").
    pub name: String,
    /// The first occurrence of the sequence.
    pub anchor: NaiveDate,
    /// Days between occurrences.
    #[serde(default = "default_cycle_days")]
    pub period_days: u32,
    /// The amount due per occurrence.
    pub amount: Decimal,
}

/// The weekly haircut, paid on the first Friday of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaircutConfig {
    /// The name shown in the ledger.
    #[serde(default = "default_haircut_name")]
    pub name: String,
    /// The amount paid per haircut.
    pub amount: Decimal,
}

/// When paychecks land: a fixed weekday repeating every `cycle_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckSchedule {
    /// The weekday every paycheck lands on.
    #[serde(default = "default_paycheck_weekday")]
    pub weekday: Weekday,
    /// Days between paychecks.
    #[serde(default = "default_cycle_days")]
    pub cycle_days: u32,
}

impl Default for PaycheckSchedule {
    fn default() -> Self {
        Self {
            weekday: default_paycheck_weekday(),
            cycle_days: DEFAULT_CYCLE_DAYS,
        }
    }
}

/// Layout of `expenses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpensesConfig {
    /// The fixed-day monthly bills.
    pub expenses: Vec<ExpenseRule>,
}

/// Layout of `recurring.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecurringConfig {
    /// The biweekly housekeeping anchor.
    pub housekeeping: RecurringAnchor,
    /// The weekly haircut.
    pub haircut: HaircutConfig,
}

/// Layout of `paycheck.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaycheckConfig {
    /// The paycheck schedule.
    #[serde(default)]
    pub paycheck: PaycheckSchedule,
}

/// The complete, validated ledger configuration.
///
/// Immutable once built; every computation borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    expenses: Vec<ExpenseRule>,
    housekeeping: RecurringAnchor,
    haircut: HaircutConfig,
    paycheck: PaycheckSchedule,
}

impl LedgerConfig {
    /// Creates a new LedgerConfig, validating every rule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRule`] if any expense has an empty or
    /// duplicate name, a due day outside 1..=31 or a negative amount, or if
    /// an amount or period elsewhere in the configuration is out of range.
    pub fn new(
        expenses: Vec<ExpenseRule>,
        housekeeping: RecurringAnchor,
        haircut: HaircutConfig,
        paycheck: PaycheckSchedule,
    ) -> EngineResult<Self> {
        let config = Self {
            expenses,
            housekeeping,
            haircut,
            paycheck,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for rule in &self.expenses {
            if rule.name.trim().is_empty() {
                return Err(invalid_rule(&rule.name, "name must not be empty"));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(invalid_rule(&rule.name, "duplicate expense name"));
            }
            if !(1..=31).contains(&rule.due_day) {
                return Err(invalid_rule(
                    &rule.name,
                    &format!("due_day {} is outside 1..=31", rule.due_day),
                ));
            }
            check_amount(&rule.name, rule.amount)?;
        }

        check_amount(&self.housekeeping.name, self.housekeeping.amount)?;
        if self.housekeeping.period_days == 0 {
            return Err(invalid_rule(
                &self.housekeeping.name,
                "period_days must be positive",
            ));
        }

        check_amount(&self.haircut.name, self.haircut.amount)?;

        if self.paycheck.cycle_days == 0 {
            return Err(invalid_rule("paycheck", "cycle_days must be positive"));
        }

        Ok(())
    }

    /// Returns the fixed-day monthly bills.
    pub fn expenses(&self) -> &[ExpenseRule] {
        &self.expenses
    }

    /// Returns the biweekly housekeeping anchor.
    pub fn housekeeping(&self) -> &RecurringAnchor {
        &self.housekeeping
    }

    /// Returns the haircut configuration.
    pub fn haircut(&self) -> &HaircutConfig {
        &self.haircut
    }

    /// Returns the paycheck schedule.
    pub fn paycheck(&self) -> &PaycheckSchedule {
        &self.paycheck
    }
}

fn invalid_rule(name: &str, message: &str) -> EngineError {
    EngineError::InvalidRule {
        name: name.to_string(),
        message: message.to_string(),
    }
}

fn check_amount(name: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(invalid_rule(
            name,
            &format!("amount {} must not be negative", amount),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rule(name: &str, amount: &str, due_day: u32) -> ExpenseRule {
        ExpenseRule {
            name: name.to_string(),
            amount: dec(amount),
            due_day,
            critical: false,
        }
    }

    fn housekeeping() -> RecurringAnchor {
        RecurringAnchor {
            name: "Housekeeping".to_string(),
            anchor: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            period_days: 14,
            amount: dec("150.00"),
        }
    }

    fn haircut() -> HaircutConfig {
        HaircutConfig {
            name: "Haircut".to_string(),
            amount: dec("50.00"),
        }
    }

    fn build(expenses: Vec<ExpenseRule>) -> EngineResult<LedgerConfig> {
        LedgerConfig::new(
            expenses,
            housekeeping(),
            haircut(),
            PaycheckSchedule::default(),
        )
    }

    #[test]
    fn test_valid_config_is_accepted() {
        let config = build(vec![rule("Mortgage", "2328.00", 1), rule("Spotify", "19.99", 3)])
            .unwrap();
        assert_eq!(config.expenses().len(), 2);
        assert_eq!(config.paycheck().weekday, Weekday::Tue);
        assert_eq!(config.paycheck().cycle_days, 14);
    }

    #[test]
    fn test_due_day_zero_is_rejected() {
        let result = build(vec![rule("Broken", "1.00", 0)]);
        match result {
            Err(EngineError::InvalidRule { name, message }) => {
                assert_eq!(name, "Broken");
                assert!(message.contains("due_day 0"));
            }
            _ => panic!("Expected InvalidRule error"),
        }
    }

    #[test]
    fn test_due_day_32_is_rejected() {
        assert!(build(vec![rule("Broken", "1.00", 32)]).is_err());
    }

    #[test]
    fn test_due_day_31_is_accepted() {
        assert!(build(vec![rule("Rent", "900.00", 31)]).is_ok());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = build(vec![rule("Refund", "-5.00", 10)]);
        assert!(matches!(result, Err(EngineError::InvalidRule { .. })));
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        assert!(build(vec![rule("Free Trial", "0.00", 10)]).is_ok());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = build(vec![rule("Spotify", "19.99", 3), rule("Spotify", "9.99", 4)]);
        match result {
            Err(EngineError::InvalidRule { message, .. }) => {
                assert_eq!(message, "duplicate expense name");
            }
            _ => panic!("Expected InvalidRule error"),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(build(vec![rule("  ", "1.00", 3)]).is_err());
    }

    #[test]
    fn test_zero_housekeeping_period_is_rejected() {
        let mut anchor = housekeeping();
        anchor.period_days = 0;
        let result = LedgerConfig::new(vec![], anchor, haircut(), PaycheckSchedule::default());
        assert!(matches!(result, Err(EngineError::InvalidRule { .. })));
    }

    #[test]
    fn test_zero_paycheck_cycle_is_rejected() {
        let schedule = PaycheckSchedule {
            weekday: Weekday::Tue,
            cycle_days: 0,
        };
        let result = LedgerConfig::new(vec![], housekeeping(), haircut(), schedule);
        assert!(matches!(result, Err(EngineError::InvalidRule { .. })));
    }

    #[test]
    fn test_deserialize_expense_rule_defaults_critical_to_false() {
        let yaml = "name: Spotify\namount: \"19.99\"\ndue_day: 3\n";
        let rule: ExpenseRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.amount, dec("19.99"));
        assert!(!rule.critical);
    }

    #[test]
    fn test_deserialize_anchor_defaults_period() {
        let yaml = "name: Housekeeping\nanchor: 2025-04-07\namount: \"150.00\"\n";
        let anchor: RecurringAnchor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(anchor.period_days, 14);
        assert_eq!(anchor.anchor, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
    }

    #[test]
    fn test_deserialize_paycheck_schedule_weekday() {
        let yaml = "weekday: Mon\ncycle_days: 7\n";
        let schedule: PaycheckSchedule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schedule.weekday, Weekday::Mon);
        assert_eq!(schedule.cycle_days, 7);
    }
}
