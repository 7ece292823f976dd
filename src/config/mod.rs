//! Configuration loading and management for the take-home pay engine.
//!
//! This module loads the income tax, National Insurance and employer cost
//! thresholds from YAML files. Rates are never hardcoded in the calculator.
//!
//! # Example
//!
//! ```no_run
//! use take_home_pay::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/uk").unwrap();
//! println!("Loaded rates: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployerCostsConfig, IncomeTaxConfig, NationalInsuranceConfig, TaxConfiguration,
    TaxYearMetadata,
};
