//! BALN: bills ahead of the next paycheck.
//!
//! This crate computes which recurring bills and personal expenses fall due
//! between a reference date and the day before the next paycheck, validates
//! that critical items are present, and renders the result as a sorted
//! ledger with a total.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
