//! Pay breakdown model.
//!
//! This module contains the [`PayBreakdown`] type that itemises every stage
//! between the contract value and the contractor's net take-home pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete monthly take-home pay breakdown.
///
/// Fields are listed in the order they are derived. Each one depends only on
/// the fields above it plus configuration. Decimals serialize as strings so
/// no precision is lost on the wire.
///
/// # Example
///
/// ```
/// use take_home_pay::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     assignment_rate: Decimal::from(6000),
///     monthly_fee: Decimal::from(100),
///     after_monthly_fee: Decimal::from(5900),
///     employer_ni: Decimal::ZERO,
///     apprenticeship_levy: Decimal::ZERO,
///     total_employer_costs: Decimal::ZERO,
///     employment_cost_base: Decimal::from(5900),
///     salary_sacrifice_pension: Decimal::ZERO,
///     taxable_pay: Decimal::from(5900),
///     income_tax: Decimal::ZERO,
///     employee_ni: Decimal::ZERO,
///     net_take_home_pay: Decimal::from(5900),
/// };
/// assert_eq!(breakdown.total_deductions(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    /// Day rate multiplied by days worked.
    pub assignment_rate: Decimal,
    /// The fee charged by the agency or umbrella company.
    pub monthly_fee: Decimal,
    /// Assignment rate less the monthly fee.
    pub after_monthly_fee: Decimal,
    /// Employer National Insurance above the secondary threshold.
    #[serde(rename = "employerNI")]
    pub employer_ni: Decimal,
    /// Apprenticeship levy on the fee-reduced amount.
    pub apprenticeship_levy: Decimal,
    /// Employer NI plus apprenticeship levy.
    pub total_employer_costs: Decimal,
    /// What remains for the employee once employer costs are paid, floored at zero.
    pub employment_cost_base: Decimal,
    /// Pension contribution as supplied, even if it exceeds the cost base.
    pub salary_sacrifice_pension: Decimal,
    /// Employment cost base less the pension, floored at zero.
    pub taxable_pay: Decimal,
    /// Income tax across the basic, higher and additional bands.
    pub income_tax: Decimal,
    /// Employee National Insurance.
    #[serde(rename = "employeeNI")]
    pub employee_ni: Decimal,
    /// Taxable pay less income tax and employee NI.
    pub net_take_home_pay: Decimal,
}

impl PayBreakdown {
    /// Returns the deductions taken from taxable pay.
    pub fn total_deductions(&self) -> Decimal {
        self.income_tax + self.employee_ni
    }
}
