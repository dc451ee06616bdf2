use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_add, checked_mul};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::validation::require_non_negative;
use crate::EasyWealthResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: Years,
}

impl Default for SimpleInterestInput {
    fn default() -> Self {
        Self {
            principal: dec!(50000),
            annual_rate_percent: dec!(10),
            duration_years: dec!(2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInterestOutput {
    pub interest: Money,
    pub total: Money,
}

/// `interest = principal * rate * years / 100`
pub fn calculate_simple_interest(
    input: &SimpleInterestInput,
) -> EasyWealthResult<ComputationOutput<SimpleInterestOutput>> {
    let start = Instant::now();

    require_non_negative("principal", input.principal)?;
    require_non_negative("duration_years", input.duration_years)?;

    let interest = checked_mul(
        checked_mul(input.principal, input.annual_rate_percent, "interest")?,
        input.duration_years,
        "interest",
    )? / dec!(100);
    let output = SimpleInterestOutput {
        interest,
        total: checked_add(input.principal, interest, "total")?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simple interest: P * R * T / 100",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}
