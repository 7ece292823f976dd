//! Configuration types for take-home pay calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the flattened
//! [`TaxConfiguration`] the calculator consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the tax year the rates belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearMetadata {
    /// Short identifier for the rate set (e.g., "uk-2025-26").
    pub code: String,
    /// The human-readable name of the rate set.
    pub name: String,
    /// First day the rates apply.
    pub effective_from: NaiveDate,
    /// Last day the rates apply.
    pub effective_to: NaiveDate,
    /// URL to the published rates and thresholds.
    pub source_url: String,
}

impl TaxYearMetadata {
    /// Returns true if `date` falls within the configured tax year.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && date <= self.effective_to
    }
}

fn default_taper_threshold() -> Decimal {
    Decimal::from(100_000)
}

/// Income tax section from income_tax.yaml. All amounts are annual.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// Standard tax-free allowance used when the tax code is unusable.
    pub personal_allowance: Decimal,
    /// Income above which the allowance is withdrawn at £1 per £2.
    #[serde(default = "default_taper_threshold")]
    pub personal_allowance_taper_threshold: Decimal,
    /// Upper edge of the basic rate band.
    pub basic_rate_limit: Decimal,
    /// Upper edge of the higher rate band.
    pub higher_rate_limit: Decimal,
    /// Basic rate (e.g., 0.20).
    pub basic_rate_tax: Decimal,
    /// Higher rate (e.g., 0.40).
    pub higher_rate_tax: Decimal,
    /// Additional rate (e.g., 0.45).
    pub additional_rate_tax: Decimal,
}

/// Employee National Insurance section from national_insurance.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalInsuranceConfig {
    /// Annual primary threshold.
    pub primary_threshold: Decimal,
    /// Annual upper earnings limit.
    pub upper_earnings_limit: Decimal,
    /// Rate between the primary threshold and the upper earnings limit.
    pub standard_rate: Decimal,
    /// Rate above the upper earnings limit.
    pub upper_rate: Decimal,
}

/// Employer costs section from employer.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerCostsConfig {
    /// Annual secondary threshold for employer NI.
    pub ni_threshold: Decimal,
    /// Employer NI rate above the threshold.
    pub ni_rate: Decimal,
    /// Flat apprenticeship levy rate.
    pub apprenticeship_levy_rate: Decimal,
}

/// The thresholds and rates used by every calculation.
///
/// Figures are annual unless noted; the calculator divides by twelve where it
/// needs a monthly threshold. A value is loaded once at start-up and shared
/// read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxConfiguration {
    /// Default tax-free allowance.
    pub personal_allowance: Decimal,
    /// Income above which the allowance tapers away.
    pub personal_allowance_taper_threshold: Decimal,
    /// Upper edge of the basic rate band.
    pub basic_rate_limit: Decimal,
    /// Upper edge of the higher rate band.
    pub higher_rate_limit: Decimal,
    /// Basic income tax rate.
    pub basic_rate_tax: Decimal,
    /// Higher income tax rate.
    pub higher_rate_tax: Decimal,
    /// Additional income tax rate.
    pub additional_rate_tax: Decimal,
    /// Employee NI primary threshold.
    pub ni_primary_threshold: Decimal,
    /// Employee NI upper earnings limit.
    pub ni_upper_earnings_limit: Decimal,
    /// Employee NI rate inside the main band.
    pub ni_standard_rate: Decimal,
    /// Employee NI rate above the upper earnings limit.
    pub ni_upper_rate: Decimal,
    /// Employer NI secondary threshold.
    pub employer_ni_threshold: Decimal,
    /// Employer NI rate.
    pub employer_ni_rate: Decimal,
    /// Apprenticeship levy rate.
    pub apprenticeship_levy_rate: Decimal,
}

impl TaxConfiguration {
    /// Flattens the per-file sections into a single configuration.
    pub fn from_sections(
        income_tax: IncomeTaxConfig,
        national_insurance: NationalInsuranceConfig,
        employer: EmployerCostsConfig,
    ) -> Self {
        Self {
            personal_allowance: income_tax.personal_allowance,
            personal_allowance_taper_threshold: income_tax.personal_allowance_taper_threshold,
            basic_rate_limit: income_tax.basic_rate_limit,
            higher_rate_limit: income_tax.higher_rate_limit,
            basic_rate_tax: income_tax.basic_rate_tax,
            higher_rate_tax: income_tax.higher_rate_tax,
            additional_rate_tax: income_tax.additional_rate_tax,
            ni_primary_threshold: national_insurance.primary_threshold,
            ni_upper_earnings_limit: national_insurance.upper_earnings_limit,
            ni_standard_rate: national_insurance.standard_rate,
            ni_upper_rate: national_insurance.upper_rate,
            employer_ni_threshold: employer.ni_threshold,
            employer_ni_rate: employer.ni_rate,
            apprenticeship_levy_rate: employer.apprenticeship_levy_rate,
        }
    }

    /// Checks that the values describe a usable set of bands.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first field that fails:
    /// - a rate outside `0..=1`
    /// - a negative limit or threshold
    /// - `higher_rate_limit` below `basic_rate_limit`
    /// - `ni_upper_earnings_limit` below `ni_primary_threshold`
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("basic_rate_tax", self.basic_rate_tax),
            ("higher_rate_tax", self.higher_rate_tax),
            ("additional_rate_tax", self.additional_rate_tax),
            ("ni_standard_rate", self.ni_standard_rate),
            ("ni_upper_rate", self.ni_upper_rate),
            ("employer_ni_rate", self.employer_ni_rate),
            ("apprenticeship_levy_rate", self.apprenticeship_levy_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(invalid(field, format!("rate {} must be between 0 and 1", rate)));
            }
        }

        let amounts = [
            ("personal_allowance", self.personal_allowance),
            (
                "personal_allowance_taper_threshold",
                self.personal_allowance_taper_threshold,
            ),
            ("basic_rate_limit", self.basic_rate_limit),
            ("higher_rate_limit", self.higher_rate_limit),
            ("ni_primary_threshold", self.ni_primary_threshold),
            ("ni_upper_earnings_limit", self.ni_upper_earnings_limit),
            ("employer_ni_threshold", self.employer_ni_threshold),
        ];
        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(invalid(field, format!("amount {} must not be negative", amount)));
            }
        }

        if self.higher_rate_limit < self.basic_rate_limit {
            return Err(invalid(
                "higher_rate_limit",
                format!(
                    "{} is below basic_rate_limit {}",
                    self.higher_rate_limit, self.basic_rate_limit
                ),
            ));
        }

        if self.ni_upper_earnings_limit < self.ni_primary_threshold {
            return Err(invalid(
                "ni_upper_earnings_limit",
                format!(
                    "{} is below ni_primary_threshold {}",
                    self.ni_upper_earnings_limit, self.ni_primary_threshold
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}
