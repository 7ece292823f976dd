//! Employee National Insurance calculation.
//!
//! Contributions are charged at `ni_standard_rate` between the monthly
//! primary threshold and the monthly upper earnings limit, and at
//! `ni_upper_rate` on everything above the limit.

use rust_decimal::Decimal;

use crate::config::TaxConfiguration;

use super::monthly::monthly;

/// Employee NI for one month, split by band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNiResult {
    /// Contribution between the primary threshold and the upper earnings limit.
    pub standard_rate_contribution: Decimal,
    /// Contribution above the upper earnings limit.
    pub upper_rate_contribution: Decimal,
    /// Sum of both bands.
    pub total: Decimal,
}

/// Calculates one month of employee National Insurance on `taxable_pay`.
///
/// Nothing is due at or below `ni_primary_threshold / 12`.
///
/// # Examples
///
/// ```no_run
/// use take_home_pay::calculation::calculate_employee_ni;
/// use take_home_pay::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/uk").unwrap();
/// let ni = calculate_employee_ni(Decimal::from(3000), loader.config());
/// assert!(ni.total > Decimal::ZERO);
/// assert_eq!(ni.upper_rate_contribution, Decimal::ZERO);
/// ```
pub fn calculate_employee_ni(taxable_pay: Decimal, config: &TaxConfiguration) -> EmployeeNiResult {
    let primary_threshold = monthly(config.ni_primary_threshold);
    let upper_limit = monthly(config.ni_upper_earnings_limit);

    let mut result = EmployeeNiResult {
        standard_rate_contribution: Decimal::ZERO,
        upper_rate_contribution: Decimal::ZERO,
        total: Decimal::ZERO,
    };

    if taxable_pay <= primary_threshold {
        return result;
    }

    let lower_band = taxable_pay.min(upper_limit) - primary_threshold;
    if lower_band > Decimal::ZERO {
        result.standard_rate_contribution = lower_band * config.ni_standard_rate;
    }

    if taxable_pay > upper_limit {
        let upper_band = taxable_pay - upper_limit;
        result.upper_rate_contribution = upper_band * config.ni_upper_rate;
    }

    result.total = result.standard_rate_contribution + result.upper_rate_contribution;
    result
}
