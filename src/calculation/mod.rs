//! Calculation logic for the BALN ledger engine.
//!
//! This module contains the date utilities (weekend shifting, paycheck
//! dates), the obligation window calculator, the inclusion rules for fixed
//! monthly bills, the weekly haircut and anchored recurrences, the ledger
//! validator, and [`compute_ledger`], which runs them in that order.

mod date_utils;
mod fixed_bills;
mod haircut;
mod housekeeping;
mod ledger;
mod validator;
mod window;

pub use date_utils::{
    WEEKDAY_NAMES, formatted_weekday, next_paycheck_after, next_paycheck_on, shift_if_weekend,
    weekday_name,
};
pub use fixed_bills::{FixedBillsResult, include_fixed_bills, natural_due_date};
pub use haircut::{HAIRCUT_SCAN_DAYS, HAIRCUT_WEEKDAY, HaircutResult, schedule_haircut};
pub use housekeeping::{AnchoredResult, include_anchored};
pub use ledger::compute_ledger;
pub use validator::{
    ValidationResult, check_critical_bills, expected_payable_date, validate_ledger,
};
pub use window::{WindowResult, calculate_window, verify_weekday};
