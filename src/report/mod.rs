//! Report rendering for the BALN ledger engine.
//!
//! One engine, two output shapes: a markdown summary for people, or the
//! structured report as JSON for programs.
//!
//! # Example
//!
//! ```no_run
//! use baln_engine::calculation::compute_ledger;
//! use baln_engine::config::ConfigLoader;
//! use baln_engine::report::{render, OutputMode};
//! use chrono::NaiveDate;
//!
//! let config = ConfigLoader::load("./config/household")?.into_config();
//! let report = compute_ledger(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(), &config)?;
//! println!("{}", render(&report, OutputMode::Markdown)?);
//! # Ok::<(), baln_engine::error::EngineError>(())
//! ```

mod markdown;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{LedgerOutcome, LedgerReport};

pub use markdown::{SHIFTED_MARKER, format_currency, format_markdown_table, render_markdown};

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Human-readable markdown summary and table.
    #[default]
    Markdown,
    /// The structured report as pretty-printed JSON.
    Json,
}

impl FromStr for OutputMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputMode::Markdown),
            "json" => Ok(OutputMode::Json),
            other => Err(EngineError::RenderError {
                message: format!("Unknown output mode: {}", other),
            }),
        }
    }
}

/// Renders a report in the requested output mode.
///
/// In JSON mode a passing report also carries its markdown table under
/// `markdown`; a failing report carries no table in either mode.
pub fn render(report: &LedgerReport, mode: OutputMode) -> EngineResult<String> {
    match mode {
        OutputMode::Markdown => Ok(render_markdown(report)),
        OutputMode::Json => render_json(report),
    }
}

fn render_json(report: &LedgerReport) -> EngineResult<String> {
    let to_render_error = |e: serde_json::Error| EngineError::RenderError {
        message: e.to_string(),
    };

    let mut value = serde_json::to_value(report).map_err(to_render_error)?;
    if let (LedgerOutcome::Pass { expenses, .. }, Some(object)) =
        (&report.outcome, value.as_object_mut())
    {
        object.insert(
            "markdown".to_string(),
            serde_json::Value::String(format_markdown_table(expenses)),
        );
    }

    serde_json::to_string_pretty(&value).map_err(to_render_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditTrace, ObligationWindow, ValidationError};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(outcome: LedgerOutcome) -> LedgerReport {
        LedgerReport {
            date: date(2025, 4, 5),
            weekday: "Saturday".to_string(),
            window: ObligationWindow {
                start: date(2025, 4, 5),
                end: date(2025, 4, 7),
                next_paycheck: date(2025, 4, 8),
            },
            outcome,
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("markdown".parse::<OutputMode>().unwrap(), OutputMode::Markdown);
        assert_eq!("MD".parse::<OutputMode>().unwrap(), OutputMode::Markdown);
        assert_eq!("json".parse::<OutputMode>().unwrap(), OutputMode::Json);
        assert!("yaml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_json_pass_includes_markdown_table() {
        let text = render(
            &report(LedgerOutcome::Pass {
                total: Decimal::ZERO,
                expenses: vec![],
            }),
            OutputMode::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "PASS");
        assert!(value["markdown"].as_str().unwrap().starts_with("| Name |"));
    }

    #[test]
    fn test_json_fail_has_errors_and_no_table() {
        let text = render(
            &report(LedgerOutcome::Fail {
                errors: vec![ValidationError::HaircutMissing {
                    name: "Haircut".to_string(),
                }],
            }),
            OutputMode::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "FAIL");
        assert_eq!(value["weekday"], "Saturday");
        assert_eq!(value["window"]["end"], "2025-04-07");
        assert_eq!(value["errors"].as_array().unwrap().len(), 1);
        assert!(value.get("markdown").is_none());
        assert!(value.get("expenses").is_none());
    }

    #[test]
    fn test_markdown_mode_matches_render_markdown() {
        let r = report(LedgerOutcome::Fail {
            errors: vec![ValidationError::HaircutMissing {
                name: "Haircut".to_string(),
            }],
        });
        assert_eq!(render(&r, OutputMode::Markdown).unwrap(), render_markdown(&r));
    }
}
