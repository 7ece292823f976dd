//! Property tests for the pay breakdown calculation.
//!
//! These check the identities that must hold for every input, not just the
//! hand-worked scenarios in the integration suite.

use proptest::prelude::*;
use rust_decimal::Decimal;

use take_home_pay::calculation::{calculate_employer_ni, calculate_pay_breakdown, monthly};
use take_home_pay::config::{ConfigLoader, TaxConfiguration};
use take_home_pay::models::EngagementInputs;

fn config() -> TaxConfiguration {
    ConfigLoader::load("./config/uk")
        .expect("Failed to load config")
        .config()
        .clone()
}

/// Whole pennies from zero up to `max_pennies`.
fn pounds(max_pennies: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_pennies).prop_map(|pennies| Decimal::new(pennies, 2))
}

fn tax_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1257L".to_string()),
        Just("0L".to_string()),
        Just("616K".to_string()),
        Just("700T".to_string()),
        Just("".to_string()),
        Just("BR".to_string()),
        (0u32..2000, prop_oneof![Just('L'), Just('T'), Just('K')])
            .prop_map(|(n, suffix)| format!("{}{}", n, suffix)),
    ]
}

fn engagement() -> impl Strategy<Value = EngagementInputs> {
    (
        pounds(200_000),
        0u32..=31,
        pounds(100_000),
        pounds(300_000),
        tax_code(),
    )
        .prop_map(
            |(day_rate, days_worked, monthly_fee, salary_sacrifice_pension, tax_code)| {
                EngagementInputs {
                    day_rate,
                    days_worked,
                    monthly_fee,
                    salary_sacrifice_pension,
                    tax_code,
                }
            },
        )
}

proptest! {
    #[test]
    fn assignment_rate_is_day_rate_times_days(inputs in engagement()) {
        let breakdown = calculate_pay_breakdown(&inputs, &config());
        prop_assert_eq!(
            breakdown.assignment_rate,
            inputs.day_rate * Decimal::from(inputs.days_worked)
        );
    }

    #[test]
    fn total_employer_costs_is_sum_of_parts(inputs in engagement()) {
        let breakdown = calculate_pay_breakdown(&inputs, &config());
        prop_assert_eq!(
            breakdown.total_employer_costs,
            breakdown.employer_ni + breakdown.apprenticeship_levy
        );
    }

    #[test]
    fn net_pay_is_taxable_pay_less_deductions(inputs in engagement()) {
        let breakdown = calculate_pay_breakdown(&inputs, &config());
        prop_assert_eq!(
            breakdown.net_take_home_pay,
            breakdown.taxable_pay - breakdown.income_tax - breakdown.employee_ni
        );
    }

    #[test]
    fn clamped_amounts_never_go_negative(inputs in engagement()) {
        let breakdown = calculate_pay_breakdown(&inputs, &config());
        prop_assert!(breakdown.employment_cost_base >= Decimal::ZERO);
        prop_assert!(breakdown.taxable_pay >= Decimal::ZERO);
        prop_assert!(breakdown.employer_ni >= Decimal::ZERO);
        prop_assert!(breakdown.income_tax >= Decimal::ZERO);
        prop_assert!(breakdown.employee_ni >= Decimal::ZERO);
        prop_assert!(breakdown.taxable_pay <= breakdown.employment_cost_base);
    }

    #[test]
    fn pension_and_fee_are_recorded_verbatim(inputs in engagement()) {
        let breakdown = calculate_pay_breakdown(&inputs, &config());
        prop_assert_eq!(breakdown.salary_sacrifice_pension, inputs.salary_sacrifice_pension);
        prop_assert_eq!(breakdown.monthly_fee, inputs.monthly_fee);
    }

    #[test]
    fn calculation_is_deterministic(inputs in engagement()) {
        let config = config();
        let first = calculate_pay_breakdown(&inputs, &config);
        let second = calculate_pay_breakdown(&inputs.clone(), &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn employer_ni_only_above_threshold(amount in pounds(2_000_000)) {
        let config = config();
        let ni = calculate_employer_ni(amount, &config);
        if amount <= monthly(config.employer_ni_threshold) {
            prop_assert_eq!(ni, Decimal::ZERO);
        } else {
            prop_assert!(ni > Decimal::ZERO);
        }
    }
}
