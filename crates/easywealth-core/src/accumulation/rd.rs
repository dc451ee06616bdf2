use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::growth::{project, Compounding, GrowthInput, GrowthOutput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::EasyWealthResult;

/// Recurring deposit: a flat monthly deposit credited monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdInput {
    pub monthly_deposit: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: u32,
}

impl Default for RdInput {
    fn default() -> Self {
        Self {
            monthly_deposit: dec!(5000),
            annual_rate_percent: dec!(6.5),
            duration_years: 5,
        }
    }
}

/// Project a recurring deposit to maturity.
///
/// Banks usually compound RDs quarterly; the monthly loop is the same
/// approximation the calculator screen shows.
pub fn calculate_rd(input: &RdInput) -> EasyWealthResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let growth = GrowthInput {
        contribution: input.monthly_deposit,
        annual_rate_percent: input.annual_rate_percent,
        duration_years: input.duration_years,
        annual_step_up_percent: Decimal::ZERO,
        compounding: Compounding::Monthly,
    };
    let output = project(&growth, &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Recurring deposit: flat monthly deposit, monthly compounding approximation",
        input,
        warnings,
        elapsed,
        output,
    ))
}
