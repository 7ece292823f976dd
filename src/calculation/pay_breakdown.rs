//! Monthly take-home pay breakdown.
//!
//! This module chains the individual calculations into the full pipeline,
//! from contract value down to net pay:
//!
//! 1. assignment rate = day rate x days worked
//! 2. less the monthly fee
//! 3. less employer NI and apprenticeship levy (floored at zero)
//! 4. less salary sacrifice pension (floored at zero) = taxable pay
//! 5. less income tax and employee NI = net take-home pay

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxConfiguration;
use crate::models::{EngagementInputs, PayBreakdown};

use super::employee_ni::calculate_employee_ni;
use super::employer_costs::{calculate_apprenticeship_levy, calculate_employer_ni};
use super::income_tax::calculate_income_tax;
use super::tax_code::parse_tax_free_allowance;

/// Calculates the complete monthly breakdown for an engagement.
///
/// This is a pure function: the same inputs and configuration always give the
/// same breakdown. It never fails. Unknown tax codes use the configured
/// personal allowance, and pay left after employer costs or pension is floored
/// at zero rather than going negative.
///
/// # Range
///
/// Any tax code is accepted. The arithmetic is unchecked `Decimal`, so the
/// money inputs must stay within range: no panic occurs while
/// `day_rate * days_worked`, `monthly_fee` and `salary_sacrifice_pension` are
/// each at most 10^27 in magnitude and the configured rates lie in `0..=1`
/// (which [`TaxConfiguration::validate`] enforces). The HTTP layer caps amounts
/// at [`MAX_AMOUNT`](crate::api::MAX_AMOUNT), well inside this range.
///
/// # Arguments
///
/// * `inputs` - Day rate, days worked, fee, pension and tax code
/// * `config` - Thresholds and rates
///
/// # Examples
///
/// ```no_run
/// use take_home_pay::calculation::calculate_pay_breakdown;
/// use take_home_pay::config::ConfigLoader;
/// use take_home_pay::models::EngagementInputs;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/uk").unwrap();
/// let inputs = EngagementInputs {
///     day_rate: Decimal::from(300),
///     days_worked: 20,
///     monthly_fee: Decimal::from(100),
///     salary_sacrifice_pension: Decimal::ZERO,
///     tax_code: "1257L".to_string(),
/// };
///
/// let breakdown = calculate_pay_breakdown(&inputs, loader.config());
/// assert_eq!(breakdown.assignment_rate, Decimal::from(6000));
/// assert_eq!(breakdown.after_monthly_fee, Decimal::from(5900));
/// ```
pub fn calculate_pay_breakdown(inputs: &EngagementInputs, config: &TaxConfiguration) -> PayBreakdown {
    let tax_free_allowance = parse_tax_free_allowance(&inputs.tax_code, config.personal_allowance);

    let assignment_rate = inputs.day_rate * Decimal::from(inputs.days_worked);
    let after_monthly_fee = assignment_rate - inputs.monthly_fee;

    let employer_ni = calculate_employer_ni(after_monthly_fee, config);
    let apprenticeship_levy = calculate_apprenticeship_levy(after_monthly_fee, config);
    let total_employer_costs = employer_ni + apprenticeship_levy;

    let employment_cost_base = (after_monthly_fee - total_employer_costs).max(Decimal::ZERO);
    let taxable_pay = (employment_cost_base - inputs.salary_sacrifice_pension).max(Decimal::ZERO);

    let income_tax = calculate_income_tax(taxable_pay, tax_free_allowance, config).total;
    let employee_ni = calculate_employee_ni(taxable_pay, config).total;

    let net_take_home_pay = taxable_pay - income_tax - employee_ni;

    debug!(
        tax_code = %inputs.tax_code,
        tax_free_allowance = %tax_free_allowance,
        taxable_pay = %taxable_pay,
        net_take_home_pay = %net_take_home_pay,
        "Calculated pay breakdown"
    );

    PayBreakdown {
        assignment_rate,
        monthly_fee: inputs.monthly_fee,
        after_monthly_fee,
        employer_ni,
        apprenticeship_levy,
        total_employer_costs,
        employment_cost_base,
        salary_sacrifice_pension: inputs.salary_sacrifice_pension,
        taxable_pay,
        income_tax,
        employee_ni,
        net_take_home_pay,
    }
}
