//! Annual-to-monthly conversion.

use rust_decimal::Decimal;

/// Number of pay periods the annual thresholds are spread across.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Converts an annual threshold or allowance into its monthly equivalent.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::monthly;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly(Decimal::from(12000)), Decimal::from(1000));
/// ```
pub fn monthly(annual: Decimal) -> Decimal {
    annual / Decimal::from(MONTHS_PER_YEAR)
}
