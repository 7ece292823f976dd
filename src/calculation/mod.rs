//! Calculation logic for the take-home pay engine.
//!
//! This module contains the tax code parser, the employer cost calculations
//! (employer NI and apprenticeship levy), income tax with the allowance
//! taper, employee NI, and the pipeline that combines them into a monthly
//! pay breakdown.

mod employee_ni;
mod employer_costs;
mod income_tax;
mod monthly;
mod pay_breakdown;
mod tax_code;

pub use employee_ni::{EmployeeNiResult, calculate_employee_ni};
pub use employer_costs::{calculate_apprenticeship_levy, calculate_employer_ni};
pub use income_tax::{IncomeTaxResult, adjusted_personal_allowance, calculate_income_tax};
pub use monthly::{MONTHS_PER_YEAR, monthly};
pub use pay_breakdown::calculate_pay_breakdown;
pub use tax_code::{TaxCodeSuffix, parse_tax_free_allowance};
