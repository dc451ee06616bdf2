use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::error::EasyWealthError;
use crate::types::{Money, Percent};
use crate::EasyWealthResult;

/// Months in a year; the per-period rate of every monthly calculator.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage into a per-period decimal rate.
///
/// `periodic_rate(dec!(12), 12)` is `0.01`.
pub fn periodic_rate(annual_rate_percent: Percent, periods_per_year: u32) -> Decimal {
    if periods_per_year == 0 {
        return Decimal::ZERO;
    }
    annual_rate_percent / Decimal::from(periods_per_year) / dec!(100)
}

/// Error for a value that no longer fits in a 96-bit decimal.
pub fn overflow(context: &str) -> EasyWealthError {
    EasyWealthError::FinancialImpossibility(format!(
        "{context} exceeds the representable range"
    ))
}

/// `a * b`, with overflow reported against `context`.
pub fn checked_mul(a: Decimal, b: Decimal, context: &str) -> EasyWealthResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

/// `a + b`, with overflow reported against `context`.
pub fn checked_add(a: Decimal, b: Decimal, context: &str) -> EasyWealthResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Decimal, n: u32) -> EasyWealthResult<Decimal> {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result = checked_mul(result, factor, "compound growth factor")?;
    }
    Ok(result)
}

/// Lump sum grown for `n` periods at `rate` per period.
pub fn future_value(present_value: Money, rate: Decimal, n: u32) -> EasyWealthResult<Money> {
    checked_mul(present_value, compound(rate, n)?, "future value")
}

/// Level payment that amortises `principal` over `nper` periods.
///
/// Returned as a positive amount. A zero rate spreads the principal evenly.
pub fn annuity_payment(principal: Money, rate: Decimal, nper: u32) -> EasyWealthResult<Money> {
    if nper == 0 {
        return Err(EasyWealthError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound(rate, nper)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(EasyWealthError::DivisionByZero {
            context: "annuity payment factor".into(),
        });
    }

    // (1+r)^n / ((1+r)^n - 1) stays near 1 for large n, so divide first
    let ratio = factor
        .checked_div(denominator)
        .ok_or_else(|| overflow("annuity payment factor"))?;
    checked_mul(checked_mul(principal, rate, "annuity payment")?, ratio, "annuity payment")
}

/// Round to whole currency units, half away from zero.
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
