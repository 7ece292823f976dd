//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EmployerCostsConfig, IncomeTaxConfig, NationalInsuranceConfig, TaxConfiguration,
    TaxYearMetadata,
};

/// Loads and provides access to tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// flattens them into a [`TaxConfiguration`] and validates the result.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/uk/
/// ├── tax_year.yaml            # Tax year metadata
/// ├── income_tax.yaml          # Allowance, band limits and rates
/// ├── national_insurance.yaml  # Employee NI thresholds and rates
/// └── employer.yaml            # Employer NI and apprenticeship levy
/// ```
///
/// # Example
///
/// ```no_run
/// use take_home_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uk").unwrap();
/// println!("Loaded rates: {}", loader.metadata().name);
/// println!("Personal allowance: £{}", loader.config().personal_allowance);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: TaxYearMetadata,
    config: TaxConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/uk")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or is missing a field
    /// - The combined values fail validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use take_home_pay::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/uk")?;
    /// # Ok::<(), take_home_pay::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxYearMetadata>(&path.join("tax_year.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxConfig>(&path.join("income_tax.yaml"))?;
        let national_insurance =
            Self::load_yaml::<NationalInsuranceConfig>(&path.join("national_insurance.yaml"))?;
        let employer = Self::load_yaml::<EmployerCostsConfig>(&path.join("employer.yaml"))?;

        let config = TaxConfiguration::from_sections(income_tax, national_insurance, employer);
        config.validate()?;

        debug!(
            code = %metadata.code,
            effective_from = %metadata.effective_from,
            effective_to = %metadata.effective_to,
            "Loaded tax configuration"
        );

        Ok(Self { metadata, config })
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

    /// Returns the thresholds and rates.
    pub fn config(&self) -> &TaxConfiguration {
        &self.config
    }

    /// Returns the tax year metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        &self.metadata
    }
}
