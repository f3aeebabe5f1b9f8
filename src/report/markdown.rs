//! Markdown rendering of ledger reports.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{IncludedItem, LedgerOutcome, LedgerReport};

/// Marker shown in the Shifted column for items moved off a weekend.
pub const SHIFTED_MARKER: &str = "*";

/// Formats an amount with a dollar sign and exactly two decimal places.
///
/// Half-cent amounts round away from zero.
///
/// # Example
///
/// ```
/// use baln_engine::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(2328, 0)), "$2328.00");
/// assert_eq!(format_currency(Decimal::new(1999, 2)), "$19.99");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Renders included items as a markdown table, in the order given.
pub fn format_markdown_table(items: &[IncludedItem]) -> String {
    let mut lines = vec![
        "| Name | Amount | Due Date | Shifted |".to_string(),
        "|------|--------|----------|---------|".to_string(),
    ];
    for item in items {
        let shifted = if item.shifted { SHIFTED_MARKER } else { "" };
        lines.push(format!(
            "| {} | {} | {} | {} |",
            item.name,
            format_currency(item.amount),
            item.due_date_iso(),
            shifted
        ));
    }
    lines.join("\n")
}

fn context_lines(report: &LedgerReport) -> [String; 2] {
    [
        format!("**Date:** {} ({})", report.date.format("%Y-%m-%d"), report.weekday),
        format!(
            "**BALN Window:** {} → {}",
            report.window.start.format("%Y-%m-%d"),
            report.window.end.format("%Y-%m-%d")
        ),
    ]
}

/// Renders a whole report: the summary header and table on success, or the
/// failure report with every validation error (and no table) on failure.
pub fn render_markdown(report: &LedgerReport) -> String {
    let [date_line, window_line] = context_lines(report);

    match &report.outcome {
        LedgerOutcome::Pass { total, expenses } => format!(
            "✅ BALN VALIDATION PASSED\n{}\n{}\n**Total Needed:** {}\n\n{}",
            date_line,
            window_line,
            format_currency(*total),
            format_markdown_table(expenses)
        ),
        LedgerOutcome::Fail { errors } => {
            let mut lines = vec!["❌ BALN VALIDATION FAILED:".to_string()];
            lines.extend(errors.iter().map(|e| format!("- {}", e)));
            lines.push(String::new());
            lines.push(date_line);
            lines.push(window_line);
            lines.join("\n")
        }
    }
}
