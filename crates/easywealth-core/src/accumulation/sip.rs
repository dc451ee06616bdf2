use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::growth::{project, Compounding, GrowthInput, GrowthOutput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::EasyWealthResult;

/// Systematic investment plan: a fixed monthly investment, optionally
/// stepped up every year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: u32,
    #[serde(default)]
    pub annual_step_up_percent: Percent,
}

impl Default for SipInput {
    fn default() -> Self {
        Self {
            monthly_investment: dec!(5000),
            annual_rate_percent: dec!(12),
            duration_years: 10,
            annual_step_up_percent: Decimal::ZERO,
        }
    }
}

impl From<&SipInput> for GrowthInput {
    fn from(sip: &SipInput) -> Self {
        GrowthInput {
            contribution: sip.monthly_investment,
            annual_rate_percent: sip.annual_rate_percent,
            duration_years: sip.duration_years,
            annual_step_up_percent: sip.annual_step_up_percent,
            compounding: Compounding::Monthly,
        }
    }
}

/// Project a SIP to maturity with monthly compounding.
pub fn calculate_sip(input: &SipInput) -> EasyWealthResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = project(&GrowthInput::from(input), &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP: monthly contribution, monthly compounding, annual step-up",
        input,
        warnings,
        elapsed,
        output,
    ))
}
