//! Request types for the take-home pay API.
//!
//! This module defines the JSON request structure for the `/api/payslip`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EngagementInputs;

/// Largest money amount accepted for `dayRate`, `monthlyFee` or
/// `salarySacrificePension` (one billion pounds).
///
/// Together with the `u32` range of `daysWorked` this keeps every figure in
/// the breakdown well inside the range [`calculate_pay_breakdown`] handles.
///
/// [`calculate_pay_breakdown`]: crate::calculation::calculate_pay_breakdown
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Request body for the `/api/payslip` endpoint.
///
/// `salarySacrificePension` defaults to zero and `taxCode` to an empty string
/// (which means the standard personal allowance).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipRequest {
    /// Rate charged per day.
    pub day_rate: Decimal,
    /// Days billed in the month.
    pub days_worked: u32,
    /// Agency or umbrella fee for the month.
    pub monthly_fee: Decimal,
    /// Optional salary sacrifice pension contribution.
    #[serde(default)]
    pub salary_sacrifice_pension: Decimal,
    /// Optional HMRC tax code.
    #[serde(default)]
    pub tax_code: String,
}

impl PayslipRequest {
    /// Rejects negative money amounts and amounts above [`MAX_AMOUNT`].
    ///
    /// The calculator would accept negatives, but a negative day rate, fee or
    /// pension is never a meaningful payslip, so the boundary refuses them.
    /// `daysWorked` is unsigned, so serde already rejects negative values.
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("dayRate", self.day_rate),
            ("monthlyFee", self.monthly_fee),
            ("salarySacrificePension", self.salary_sacrifice_pension),
        ];

        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", amount),
                });
            }
            if amount > MAX_AMOUNT {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not exceed {}, got {}", MAX_AMOUNT, amount),
                });
            }
        }

        Ok(())
    }
}

impl From<PayslipRequest> for EngagementInputs {
    fn from(req: PayslipRequest) -> Self {
        EngagementInputs {
            day_rate: req.day_rate,
            days_worked: req.days_worked,
            monthly_fee: req.monthly_fee,
            salary_sacrifice_pension: req.salary_sacrifice_pension,
            tax_code: req.tax_code,
        }
    }
}
