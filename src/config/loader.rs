//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ExpensesConfig, LedgerConfig, PaycheckConfig, RecurringConfig};

/// Loads and provides access to a ledger configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`LedgerConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/household/
/// ├── expenses.yaml   # Fixed-day monthly bills
/// ├── recurring.yaml  # Housekeeping anchor and haircut
/// └── paycheck.yaml   # Paycheck weekday and cycle
/// ```
///
/// # Example
///
/// ```no_run
/// use baln_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/household").unwrap();
/// println!("Loaded {} bills", loader.config().expenses().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/household")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rule fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let expenses = Self::load_yaml::<ExpensesConfig>(&path.join("expenses.yaml"))?;
        let recurring = Self::load_yaml::<RecurringConfig>(&path.join("recurring.yaml"))?;
        let paycheck = Self::load_yaml::<PaycheckConfig>(&path.join("paycheck.yaml"))?;

        let config = LedgerConfig::new(
            expenses.expenses,
            recurring.housekeeping,
            recurring.haircut,
            paycheck.paycheck,
        )?;

        debug!(
            path = %path.display(),
            expenses = config.expenses().len(),
            "Loaded ledger configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consumes the loader, returning the ledger configuration.
    pub fn into_config(self) -> LedgerConfig {
        self.config
    }
}
