//! Validation findings.
//!
//! A [`ValidationError`] is recoverable at the reporting level: findings are
//! accumulated, and any finding at all withholds the ledger.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A rule violation found while validating a ledger.
///
/// Serializes as its human-readable message.
///
/// # Example
///
/// ```
/// use baln_engine::models::ValidationError;
/// use chrono::NaiveDate;
///
/// let error = ValidationError::CriticalOmitted {
///     name: "Mortgage".to_string(),
///     expected: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
/// };
/// assert_eq!(error.to_string(), "Mortgage due 2025-04-01 was not included.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A critical bill payable inside the window is missing from the ledger.
    #[error("{name} due {expected} was not included.")]
    CriticalOmitted {
        /// The name of the critical bill.
        name: String,
        /// The payable date the bill was expected on.
        expected: NaiveDate,
    },

    /// No Friday inside the window could be found for the haircut.
    #[error("{name} for next Friday not scheduled (if within window).")]
    HaircutMissing {
        /// The configured haircut name.
        name: String,
    },
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
