//! Engagement model.
//!
//! This module defines the per-request inputs describing one month of a
//! contractor's engagement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw figures for one month of a contractor engagement.
///
/// No range checks happen here. Negative amounts flow through the
/// calculation arithmetically; the HTTP boundary decides what to reject.
///
/// # Example
///
/// ```
/// use take_home_pay::models::EngagementInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = EngagementInputs {
///     day_rate: Decimal::from(300),
///     days_worked: 20,
///     monthly_fee: Decimal::from(100),
///     salary_sacrifice_pension: Decimal::ZERO,
///     tax_code: "1257L".to_string(),
/// };
/// assert_eq!(inputs.days_worked, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementInputs {
    /// Rate charged per day worked.
    pub day_rate: Decimal,
    /// Number of days billed in the month.
    pub days_worked: u32,
    /// Agency or umbrella fee deducted before employer costs.
    pub monthly_fee: Decimal,
    /// Pension contribution taken from pay before tax.
    pub salary_sacrifice_pension: Decimal,
    /// HMRC tax code, e.g. "1257L". May be empty or malformed.
    pub tax_code: String,
}
