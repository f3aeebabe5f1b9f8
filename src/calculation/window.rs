//! Obligation window calculation.
//!
//! The window runs from the reference date through the day before the next
//! paycheck. Before deriving it, the reference date's weekday is checked for
//! self-consistency between the day-index lookup and calendar formatting.

use chrono::{Duration, NaiveDate};

use crate::config::PaycheckSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ObligationWindow};

use super::date_utils::{formatted_weekday, next_paycheck_on, weekday_name};

/// The result of calculating the obligation window.
#[derive(Debug, Clone)]
pub struct WindowResult {
    /// The obligation window.
    pub window: ObligationWindow,
    /// The verified weekday name of the reference date.
    pub weekday: String,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the weekday name of `date` two independent ways and confirms they
/// agree.
///
/// # Errors
///
/// Returns [`EngineError::WeekdayMismatch`] if the names differ. A correct
/// date implementation never does; a mismatch means the date computation is
/// corrupted and nothing downstream can be trusted.
pub fn verify_weekday(date: NaiveDate) -> EngineResult<&'static str> {
    let indexed = weekday_name(date);
    let formatted = formatted_weekday(date);

    if indexed != formatted {
        return Err(EngineError::WeekdayMismatch {
            date,
            indexed: indexed.to_string(),
            formatted,
        });
    }

    Ok(indexed)
}

/// Calculates the obligation window for a reference date.
///
/// # Arguments
///
/// * `today` - The reference date, which becomes the window start
/// * `schedule` - The paycheck schedule that bounds the window
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`WindowResult`] whose window is `[today, next_paycheck - 1 day]`, or
/// [`EngineError::WeekdayMismatch`] if the weekday self-check fails.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::calculate_window;
/// use baln_engine::config::PaycheckSchedule;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
/// let result = calculate_window(today, &PaycheckSchedule::default(), 1).unwrap();
///
/// assert_eq!(result.weekday, "Wednesday");
/// assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
/// assert_eq!(result.window.next_paycheck, NaiveDate::from_ymd_opt(2025, 4, 8).unwrap());
/// ```
pub fn calculate_window(
    today: NaiveDate,
    schedule: &PaycheckSchedule,
    step_number: u32,
) -> EngineResult<WindowResult> {
    let weekday = verify_weekday(today)?;

    let next_paycheck = next_paycheck_on(today, schedule);
    let window = ObligationWindow {
        start: today,
        end: next_paycheck - Duration::days(1),
        next_paycheck,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "obligation_window".to_string(),
        rule_name: "Obligation Window".to_string(),
        input: serde_json::json!({
            "today": today.to_string(),
            "weekday": weekday,
            "paycheck_weekday": schedule.weekday.to_string(),
            "cycle_days": schedule.cycle_days
        }),
        output: serde_json::json!({
            "start": window.start.to_string(),
            "end": window.end.to_string(),
            "next_paycheck": next_paycheck.to_string(),
            "days": window.len_days()
        }),
        reasoning: format!(
            "Next paycheck after {} ({}) is {}; window is {} to {}",
            today, weekday, next_paycheck, window.start, window.end
        ),
    };

    Ok(WindowResult {
        window,
        weekday: weekday.to_string(),
        audit_step,
    })
}
