//! Anchor-based recurring obligations (biweekly housekeeping).
//!
//! Occurrences are `anchor + k * period_days`. The unshifted cursor drives
//! the walk: it stops once the cursor passes the window end, and inclusion is
//! decided separately on the weekend-shifted date.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::config::RecurringAnchor;
use crate::models::{AuditStep, IncludedItem, ItemKind, ObligationWindow};

use super::date_utils::shift_if_weekend;

/// The result of walking an anchored recurrence across a window.
#[derive(Debug, Clone)]
pub struct AnchoredResult {
    /// Occurrences whose shifted date lies in the window.
    pub items: Vec<IncludedItem>,
    /// The audit step summarising the walk.
    pub audit_step: AuditStep,
}

/// Walks an anchored recurrence and includes its in-window occurrences.
///
/// Cursors before the window start are skipped; a cursor at or before the
/// window end is shifted off the weekend and included only if the shifted
/// date is still inside the window.
///
/// # Example
///
/// ```
/// use baln_engine::calculation::include_anchored;
/// use baln_engine::config::RecurringAnchor;
/// use baln_engine::models::ObligationWindow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let housekeeping = RecurringAnchor {
///     name: "Housekeeping".to_string(),
///     anchor: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///     period_days: 14,
///     amount: Decimal::new(15000, 2),
/// };
/// let window = ObligationWindow {
///     start: NaiveDate::from_ymd_opt(2025, 4, 22).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
///     next_paycheck: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
/// };
///
/// let result = include_anchored(&housekeeping, &window, 1);
/// assert_eq!(result.items.len(), 1);
/// assert_eq!(result.items[0].due_date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
/// ```
pub fn include_anchored(
    recurrence: &RecurringAnchor,
    window: &ObligationWindow,
    step_number: u32,
) -> AnchoredResult {
    let period = Duration::days(i64::from(recurrence.period_days));
    let mut items = Vec::new();
    let mut considered: Vec<String> = Vec::new();

    let mut cursor = first_candidate(recurrence.anchor, period, window.start);
    while cursor <= window.end {
        if cursor >= window.start {
            let shifted = shift_if_weekend(cursor);
            let included = window.contains(shifted);
            debug!(
                name = %recurrence.name,
                cursor = %cursor,
                shifted = %shifted,
                included,
                "Evaluated anchored occurrence"
            );
            considered.push(cursor.to_string());
            if included {
                items.push(IncludedItem::new(
                    recurrence.name.clone(),
                    recurrence.amount,
                    cursor,
                    shifted,
                    ItemKind::Housekeeping,
                ));
            }
        }
        cursor += period;
    }

    let due_dates: Vec<String> = items.iter().map(|i| i.due_date.to_string()).collect();
    let reasoning = if items.is_empty() {
        format!(
            "No {} occurrence payable between {} and {}",
            recurrence.name, window.start, window.end
        )
    } else {
        format!(
            "{} every {} days from {}: payable {}",
            recurrence.name,
            recurrence.period_days,
            recurrence.anchor,
            due_dates.join(", ")
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "anchored_recurrence".to_string(),
        rule_name: "Anchored Recurrence".to_string(),
        input: serde_json::json!({
            "name": recurrence.name,
            "anchor": recurrence.anchor.to_string(),
            "period_days": recurrence.period_days,
            "amount": recurrence.amount.to_string()
        }),
        output: serde_json::json!({
            "occurrences": considered,
            "due_dates": due_dates
        }),
        reasoning,
    };

    AnchoredResult { items, audit_step }
}

/// Jumps the cursor to the last occurrence before `start` so that a distant
/// anchor does not need to be walked one period at a time. Occurrences are
/// unchanged: the jump is a whole number of periods.
fn first_candidate(anchor: NaiveDate, period: Duration, start: NaiveDate) -> NaiveDate {
    let gap = (start - anchor).num_days();
    let step = period.num_days();
    if gap <= step {
        return anchor;
    }
    anchor + Duration::days((gap / step - 1) * step)
}
