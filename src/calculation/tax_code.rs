//! Tax code parsing.
//!
//! This module converts an HMRC tax code into the annual tax-free allowance
//! it represents. Only the common numeric codes are understood:
//!
//! - `L` and `T` suffixes: the numeric part multiplied by ten.
//! - `K` suffix: the numeric part multiplied by minus ten, i.e. untaxed
//!   benefits that increase taxable income.
//!
//! Anything else (emergency codes, `BR`, `D0`, `NT`, blanks, typos) falls back
//! to the configured personal allowance. Parsing never fails.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

/// The tax code suffixes that carry an allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxCodeSuffix {
    /// Standard allowance (`L`).
    L,
    /// Allowance requiring review (`T`).
    T,
    /// Negative allowance (`K`).
    K,
}

impl TaxCodeSuffix {
    /// Matches the final character of a tax code, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(TaxCodeSuffix::L),
            'T' => Some(TaxCodeSuffix::T),
            'K' => Some(TaxCodeSuffix::K),
            _ => None,
        }
    }

    /// The factor applied to the numeric prefix.
    pub fn multiplier(self) -> Decimal {
        match self {
            TaxCodeSuffix::L | TaxCodeSuffix::T => Decimal::TEN,
            TaxCodeSuffix::K => -Decimal::TEN,
        }
    }
}

/// Returns the annual tax-free allowance for `tax_code`.
///
/// `default_allowance` is returned whenever the code is empty, has an
/// unrecognised suffix, its prefix is not a number, or the prefix times ten
/// does not fit in a `Decimal`. Thousands separators in the prefix are
/// ignored (`"1,257L"` is `"1257L"`). The numeric prefix is otherwise not
/// range-checked, so `"0L"` yields zero.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::parse_tax_free_allowance;
/// use rust_decimal::Decimal;
///
/// let default = Decimal::from(12570);
/// assert_eq!(parse_tax_free_allowance("1257L", default), Decimal::from(12570));
/// assert_eq!(parse_tax_free_allowance("616K", default), Decimal::from(-6160));
/// assert_eq!(parse_tax_free_allowance("BR", default), default);
/// ```
pub fn parse_tax_free_allowance(tax_code: &str, default_allowance: Decimal) -> Decimal {
    match parse_allowance(tax_code) {
        Some(allowance) => allowance,
        None => {
            debug!(tax_code, "Unrecognised tax code, using default allowance");
            default_allowance
        }
    }
}

fn parse_allowance(tax_code: &str) -> Option<Decimal> {
    if tax_code.trim().is_empty() {
        return None;
    }

    let last = tax_code.chars().last()?;
    let suffix = TaxCodeSuffix::from_char(last)?;
    let prefix = &tax_code[..tax_code.len() - last.len_utf8()];

    let digits: String = prefix.trim().chars().filter(|c| *c != ',').collect();
    let number = Decimal::from_str(&digits).ok()?;
    number.checked_mul(suffix.multiplier())
}
