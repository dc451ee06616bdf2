use log::warn;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EasyWealthError;
use crate::time_value::{checked_mul, overflow};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::validation::require_non_negative;
use crate::EasyWealthResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CagrInput {
    pub start_value: Money,
    pub end_value: Money,
    pub years: Years,
}

impl Default for CagrInput {
    fn default() -> Self {
        Self {
            start_value: dec!(10000),
            end_value: dec!(20000),
            years: dec!(5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CagrOutput {
    pub cagr_percent: Percent,
    /// Total change over the whole period, not annualised.
    pub absolute_return_percent: Percent,
    pub growth_multiple: Decimal,
}

/// Compound annual growth rate between two values.
///
/// A non-positive start value or duration has no defined root; the result
/// is reported as zero with a warning rather than an error.
pub fn calculate_cagr(input: &CagrInput) -> EasyWealthResult<ComputationOutput<CagrOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("end_value", input.end_value)?;

    let output = if input.start_value <= Decimal::ZERO || input.years <= Decimal::ZERO {
        let msg = "start_value and years must be > 0; CAGR reported as 0";
        warn!("{msg}");
        warnings.push(msg.into());
        CagrOutput {
            cagr_percent: Decimal::ZERO,
            absolute_return_percent: Decimal::ZERO,
            growth_multiple: Decimal::ZERO,
        }
    } else {
        let multiple = input
            .end_value
            .checked_div(input.start_value)
            .ok_or_else(|| overflow("growth multiple"))?;
        CagrOutput {
            cagr_percent: annualise(multiple, input.years)?,
            absolute_return_percent: checked_mul(
                multiple - Decimal::ONE,
                dec!(100),
                "absolute return",
            )?,
            growth_multiple: multiple,
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "CAGR: (end / start)^(1 / years) - 1",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// `(multiple^(1/years) - 1) * 100`
fn annualise(multiple: Decimal, years: Years) -> EasyWealthResult<Percent> {
    if multiple == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }
    if multiple.is_zero() {
        return Ok(dec!(-100));
    }

    let impossible = || {
        EasyWealthError::FinancialImpossibility(format!(
            "growth multiple {multiple} over {years} years is outside the representable range"
        ))
    };
    let annual = Decimal::ONE
        .checked_div(years)
        .and_then(|exponent| multiple.checked_powd(exponent))
        .ok_or_else(impossible)?;

    checked_mul(annual - Decimal::ONE, dec!(100), "annualised growth")
}
