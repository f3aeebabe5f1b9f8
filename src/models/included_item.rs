//! Included ledger item model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which kind of obligation produced an [`IncludedItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A fixed-day monthly bill.
    FixedBill,
    /// The weekly haircut.
    Haircut,
    /// An occurrence of the biweekly housekeeping anchor.
    Housekeeping,
}

/// A single obligation that falls due inside the window.
///
/// # Example
///
/// ```
/// use baln_engine::models::{IncludedItem, ItemKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Life Insurance is due Sunday 2025-04-06 and payable Monday.
/// let item = IncludedItem::new(
///     "Life Insurance",
///     Decimal::from_str("123.00").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///     ItemKind::FixedBill,
/// );
/// assert!(item.shifted);
/// assert_eq!(item.due_date_iso(), "2025-04-07");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedItem {
    /// The name of the obligation.
    pub name: String,
    /// The amount due.
    pub amount: Decimal,
    /// The payable date, after weekend shifting.
    pub due_date: NaiveDate,
    /// The date the obligation naturally falls on, before shifting.
    pub natural_date: NaiveDate,
    /// Whether the payable date differs from the natural date.
    pub shifted: bool,
    /// The kind of obligation.
    pub kind: ItemKind,
}

impl IncludedItem {
    /// Creates an item, deriving `shifted` from the two dates.
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        natural_date: NaiveDate,
        due_date: NaiveDate,
        kind: ItemKind,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            due_date,
            natural_date,
            shifted: due_date != natural_date,
            kind,
        }
    }

    /// The payable date as `YYYY-MM-DD`, the key the ledger is sorted by.
    pub fn due_date_iso(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}
