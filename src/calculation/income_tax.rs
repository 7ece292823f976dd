//! Income tax calculation.
//!
//! Tax is worked out on a monthly basis: the annual allowance and band limits
//! are divided by twelve and applied to one month's taxable pay.
//!
//! # Allowance taper
//!
//! Once monthly taxable pay exceeds `personal_allowance_taper_threshold / 12`
//! the allowance is reduced by £1 for every £2 above it, down to zero.
//!
//! # Bands
//!
//! After the allowance, income is taxed in three bands:
//!
//! | Band       | Width (monthly)                             | Rate                  |
//! |------------|---------------------------------------------|-----------------------|
//! | Basic      | `basic_rate_limit / 12 - allowance`         | `basic_rate_tax`      |
//! | Higher     | `(higher_rate_limit - basic_rate_limit)/12` | `higher_rate_tax`     |
//! | Additional | unbounded                                   | `additional_rate_tax` |
//!
//! Band widths never go below zero, so a large allowance cannot produce a
//! negative basic band.

use rust_decimal::Decimal;

use crate::config::TaxConfiguration;

use super::monthly::monthly;

/// Income tax for one month, split by band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// Monthly allowance after the taper has been applied.
    pub adjusted_allowance: Decimal,
    /// Tax charged at the basic rate.
    pub basic_rate_tax: Decimal,
    /// Tax charged at the higher rate.
    pub higher_rate_tax: Decimal,
    /// Tax charged at the additional rate.
    pub additional_rate_tax: Decimal,
    /// Sum of all bands.
    pub total: Decimal,
}

impl IncomeTaxResult {
    fn untaxed(adjusted_allowance: Decimal) -> Self {
        Self {
            adjusted_allowance,
            basic_rate_tax: Decimal::ZERO,
            higher_rate_tax: Decimal::ZERO,
            additional_rate_tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Returns the monthly tax-free allowance after the high-income taper.
///
/// # Arguments
///
/// * `taxable_pay` - Monthly taxable pay
/// * `tax_free_allowance` - Annual allowance from the tax code (may be negative)
/// * `config` - Supplies the taper threshold
pub fn adjusted_personal_allowance(
    taxable_pay: Decimal,
    tax_free_allowance: Decimal,
    config: &TaxConfiguration,
) -> Decimal {
    let monthly_allowance = monthly(tax_free_allowance);
    let taper_threshold = monthly(config.personal_allowance_taper_threshold);

    if taxable_pay > taper_threshold {
        (monthly_allowance - (taxable_pay - taper_threshold) / Decimal::TWO).max(Decimal::ZERO)
    } else {
        monthly_allowance
    }
}

/// Calculates one month of income tax.
///
/// # Arguments
///
/// * `taxable_pay` - Monthly pay after employer costs and pension
/// * `tax_free_allowance` - Annual allowance from the tax code
/// * `config` - Band limits and rates
///
/// # Returns
///
/// Returns an [`IncomeTaxResult`] with the per-band split. The total is zero
/// when taxable pay does not exceed the adjusted allowance.
///
/// # Examples
///
/// ```no_run
/// use take_home_pay::calculation::calculate_income_tax;
/// use take_home_pay::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/uk").unwrap();
/// let tax = calculate_income_tax(Decimal::from(1000), Decimal::from(12570), loader.config());
/// assert_eq!(tax.total, Decimal::ZERO);
/// ```
pub fn calculate_income_tax(
    taxable_pay: Decimal,
    tax_free_allowance: Decimal,
    config: &TaxConfiguration,
) -> IncomeTaxResult {
    let adjusted_allowance = adjusted_personal_allowance(taxable_pay, tax_free_allowance, config);

    let mut result = IncomeTaxResult::untaxed(adjusted_allowance);

    let mut remaining = taxable_pay - adjusted_allowance;
    if remaining <= Decimal::ZERO {
        return result;
    }

    let basic_band_width = (monthly(config.basic_rate_limit) - adjusted_allowance).max(Decimal::ZERO);
    let basic_band = remaining.min(basic_band_width);
    result.basic_rate_tax = basic_band * config.basic_rate_tax;
    remaining -= basic_band;

    if remaining > Decimal::ZERO {
        let higher_band_width =
            monthly(config.higher_rate_limit - config.basic_rate_limit).max(Decimal::ZERO);
        let higher_band = remaining.min(higher_band_width);
        result.higher_rate_tax = higher_band * config.higher_rate_tax;
        remaining -= higher_band;
    }

    if remaining > Decimal::ZERO {
        result.additional_rate_tax = remaining * config.additional_rate_tax;
    }

    result.total = result.basic_rate_tax + result.higher_rate_tax + result.additional_rate_tax;
    result
}
