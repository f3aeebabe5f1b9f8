//! Configuration loading and management for the BALN ledger engine.
//!
//! This module provides functionality to load ledger configurations from YAML
//! files: the fixed-day monthly bills, the biweekly housekeeping anchor, the
//! weekly haircut and the paycheck schedule.
//!
//! # Example
//!
//! ```no_run
//! use baln_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/household").unwrap();
//! println!("Paychecks land on {}", config.config().paycheck().weekday);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CYCLE_DAYS, DEFAULT_HAIRCUT_NAME, ExpenseRule, ExpensesConfig, HaircutConfig,
    LedgerConfig, PaycheckConfig, PaycheckSchedule, RecurringAnchor, RecurringConfig,
};
