//! Core data models for the BALN ledger engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod included_item;
mod ledger_report;
mod validation;
mod window;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use included_item::{IncludedItem, ItemKind};
pub use ledger_report::{LedgerOutcome, LedgerReport};
pub use validation::ValidationError;
pub use window::ObligationWindow;
