//! Ledger report models.
//!
//! This module contains the [`LedgerReport`] type produced by a ledger
//! computation. Its [`LedgerOutcome`] is either a full ledger or the list of
//! validation errors, never both.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AuditTrace, IncludedItem, ObligationWindow, ValidationError};

/// Whether the ledger passed validation, and what it carries as a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum LedgerOutcome {
    /// Validation passed: the sorted ledger and its total.
    #[serde(rename = "PASS")]
    Pass {
        /// Sum of all included amounts.
        total: Decimal,
        /// Included items sorted by due date.
        expenses: Vec<IncludedItem>,
    },
    /// Validation failed: the ledger is withheld entirely.
    #[serde(rename = "FAIL")]
    Fail {
        /// Every validation error found, in detection order.
        errors: Vec<ValidationError>,
    },
}

/// The result of computing a ledger for one reference date.
///
/// # Example
///
/// ```
/// use baln_engine::models::{AuditTrace, LedgerOutcome, LedgerReport, ObligationWindow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let report = LedgerReport {
///     date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///     weekday: "Monday".to_string(),
///     window: ObligationWindow {
///         start: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///         end: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///         next_paycheck: NaiveDate::from_ymd_opt(2025, 4, 8).unwrap(),
///     },
///     outcome: LedgerOutcome::Pass {
///         total: Decimal::ZERO,
///         expenses: vec![],
///     },
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(report.is_pass());
/// assert_eq!(report.total(), Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerReport {
    /// The reference date.
    pub date: NaiveDate,
    /// The full English weekday name of the reference date.
    pub weekday: String,
    /// The obligation window.
    pub window: ObligationWindow,
    /// Pass with a ledger, or fail with errors.
    #[serde(flatten)]
    pub outcome: LedgerOutcome,
    /// Every inclusion decision made while computing the ledger.
    pub audit_trace: AuditTrace,
}

impl LedgerReport {
    /// Returns true if validation passed.
    pub fn is_pass(&self) -> bool {
        matches!(self.outcome, LedgerOutcome::Pass { .. })
    }

    /// The ledger total, if validation passed.
    pub fn total(&self) -> Option<Decimal> {
        match &self.outcome {
            LedgerOutcome::Pass { total, .. } => Some(*total),
            LedgerOutcome::Fail { .. } => None,
        }
    }

    /// The sorted ledger items; empty when validation failed.
    pub fn items(&self) -> &[IncludedItem] {
        match &self.outcome {
            LedgerOutcome::Pass { expenses, .. } => expenses.as_slice(),
            LedgerOutcome::Fail { .. } => &[],
        }
    }

    /// The validation errors; empty when validation passed.
    pub fn errors(&self) -> &[ValidationError] {
        match &self.outcome {
            LedgerOutcome::Pass { .. } => &[],
            LedgerOutcome::Fail { errors } => errors.as_slice(),
        }
    }
}
