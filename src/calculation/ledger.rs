//! Ledger computation.
//!
//! Runs the window calculator, the three inclusion rules and the validator
//! in order, producing a [`LedgerReport`]. The computation is a pure function
//! of the reference date and the configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::LedgerConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, IncludedItem, LedgerOutcome, LedgerReport};

use super::fixed_bills::include_fixed_bills;
use super::haircut::schedule_haircut;
use super::housekeeping::include_anchored;
use super::validator::validate_ledger;
use super::window::calculate_window;

/// Computes the ledger of obligations due before the next paycheck.
///
/// # Arguments
///
/// * `today` - The reference date
/// * `config` - The ledger configuration
///
/// # Returns
///
/// A [`LedgerReport`] that either passes with the sorted ledger and its
/// total, or fails with every validation error and no ledger at all. The
/// only `Err` is the fatal weekday self-consistency failure.
///
/// # Example
///
/// ```no_run
/// use baln_engine::calculation::compute_ledger;
/// use baln_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load("./config/household")?.into_config();
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
///
/// let report = compute_ledger(today, &config)?;
/// assert!(report.is_pass());
/// assert_eq!(report.total().unwrap().to_string(), "2684.00");
/// # Ok::<(), baln_engine::error::EngineError>(())
/// ```
pub fn compute_ledger(today: NaiveDate, config: &LedgerConfig) -> EngineResult<LedgerReport> {
    let mut trace = AuditTrace::default();

    let window_result = calculate_window(today, config.paycheck(), trace.next_step_number())?;
    let window = window_result.window;
    trace.steps.push(window_result.audit_step);

    let mut included: Vec<IncludedItem> = Vec::new();

    let fixed = include_fixed_bills(config.expenses(), &window, trace.next_step_number());
    included.extend(fixed.items);
    trace.steps.extend(fixed.audit_steps);
    trace.warnings.extend(fixed.warnings);

    let haircut = schedule_haircut(config.haircut(), &window, trace.next_step_number());
    included.extend(haircut.item);
    trace.steps.push(haircut.audit_step);

    let housekeeping = include_anchored(config.housekeeping(), &window, trace.next_step_number());
    included.extend(housekeeping.items);
    trace.steps.push(housekeeping.audit_step);

    // Stable: items due the same day keep rule order.
    included.sort_by_cached_key(IncludedItem::due_date_iso);

    let validation = validate_ledger(config, &window, &included, trace.next_step_number());
    trace.steps.push(validation.audit_step);

    let outcome = if validation.errors.is_empty() {
        let total: Decimal = included.iter().map(|item| item.amount).sum();
        info!(
            date = %today,
            window_end = %window.end,
            items = included.len(),
            total = %total,
            "Ledger validation passed"
        );
        LedgerOutcome::Pass {
            total,
            expenses: included,
        }
    } else {
        warn!(
            date = %today,
            errors = validation.errors.len(),
            "Ledger validation failed; ledger withheld"
        );
        LedgerOutcome::Fail {
            errors: validation.errors,
        }
    };

    Ok(LedgerReport {
        date: today,
        weekday: window_result.weekday,
        window,
        outcome,
        audit_trace: trace,
    })
}
