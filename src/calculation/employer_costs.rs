//! Employer cost calculations.
//!
//! An umbrella company pays employer National Insurance and the
//! apprenticeship levy out of the contract value, so both are deducted before
//! the contractor's own pay is worked out.

use rust_decimal::Decimal;

use crate::config::TaxConfiguration;

use super::monthly::monthly;

/// Calculates employer National Insurance on the fee-reduced contract value.
///
/// Nothing is due at or below the monthly secondary threshold
/// (`employer_ni_threshold / 12`). Above it, `employer_ni_rate` applies to the
/// excess only.
///
/// # Examples
///
/// ```no_run
/// use take_home_pay::calculation::calculate_employer_ni;
/// use take_home_pay::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/uk").unwrap();
/// let ni = calculate_employer_ni(Decimal::from(5900), loader.config());
/// assert!(ni > Decimal::ZERO);
/// ```
pub fn calculate_employer_ni(after_monthly_fee: Decimal, config: &TaxConfiguration) -> Decimal {
    let monthly_threshold = monthly(config.employer_ni_threshold);

    if after_monthly_fee <= monthly_threshold {
        return Decimal::ZERO;
    }

    (after_monthly_fee - monthly_threshold) * config.employer_ni_rate
}

/// Calculates the apprenticeship levy on the fee-reduced contract value.
///
/// The levy is a flat percentage with no threshold and no cap.
pub fn calculate_apprenticeship_levy(
    after_monthly_fee: Decimal,
    config: &TaxConfiguration,
) -> Decimal {
    after_monthly_fee * config.apprenticeship_levy_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> TaxConfiguration {
        ConfigLoader::load("./config/uk").unwrap().config().clone()
    }

    #[test]
    fn test_employer_ni_on_excess_over_threshold() {
        let ni = calculate_employer_ni(dec("5900"), &config());

        let expected = (dec("5900") - dec("9100") / dec("12")) * dec("0.15");
        assert_eq!(ni, expected);
        assert_eq!(ni.round_dp(2), dec("771.25"));
    }

    #[test]
    fn test_employer_ni_zero_below_threshold() {
        let below = dec("9100") / dec("12") - dec("1");
        assert_eq!(calculate_employer_ni(below, &config()), Decimal::ZERO);
    }

    #[test]
    fn test_employer_ni_zero_exactly_at_threshold() {
        let at = dec("9100") / dec("12");
        assert_eq!(calculate_employer_ni(at, &config()), Decimal::ZERO);
    }

    #[test]
    fn test_employer_ni_positive_one_penny_above_threshold() {
        let above = dec("9100") / dec("12") + dec("0.01");
        let ni = calculate_employer_ni(above, &config());

        assert!(ni > Decimal::ZERO);
        assert_eq!(ni.round_dp(4), dec("0.0015"));
    }

    #[test]
    fn test_employer_ni_zero_for_negative_amount() {
        assert_eq!(calculate_employer_ni(dec("-500"), &config()), Decimal::ZERO);
    }

    #[test]
    fn test_employer_ni_uses_configured_rate() {
        let mut config = config();
        config.employer_ni_rate = dec("0.138");
        config.employer_ni_threshold = dec("12000");

        assert_eq!(calculate_employer_ni(dec("2000"), &config), dec("138"));
    }

    #[test]
    fn test_apprenticeship_levy_applies_to_fee_reduced_amount() {
        assert_eq!(calculate_apprenticeship_levy(dec("5900"), &config()), dec("29.5"));
    }

    #[test]
    fn test_apprenticeship_levy_has_no_threshold() {
        assert_eq!(calculate_apprenticeship_levy(dec("100"), &config()), dec("0.5"));
        assert_eq!(calculate_apprenticeship_levy(Decimal::ZERO, &config()), Decimal::ZERO);
    }

    #[test]
    fn test_apprenticeship_levy_is_uncapped() {
        assert_eq!(
            calculate_apprenticeship_levy(dec("1000000"), &config()),
            dec("5000")
        );
    }
}
