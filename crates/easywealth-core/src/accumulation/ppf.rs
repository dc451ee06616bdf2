use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::growth::{project, Compounding, GrowthInput, GrowthOutput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::EasyWealthResult;

/// Lock-in period of a Public Provident Fund account.
pub const PPF_TENURE_YEARS: u32 = 15;

/// Statutory ceiling on deposits per financial year.
pub const PPF_MAX_ANNUAL_CONTRIBUTION: Money = dec!(150000);

/// Minimum deposit to keep the account active.
pub const PPF_MIN_ANNUAL_CONTRIBUTION: Money = dec!(500);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfInput {
    pub annual_contribution: Money,
    pub annual_rate_percent: Percent,
}

impl Default for PpfInput {
    fn default() -> Self {
        Self {
            annual_contribution: PPF_MAX_ANNUAL_CONTRIBUTION,
            annual_rate_percent: dec!(7.1),
        }
    }
}

/// Project a PPF account over its full tenure.
///
/// The shared growth simulator with annual compounding, the tenure pinned to
/// `PPF_TENURE_YEARS` and the deposit capped at `PPF_MAX_ANNUAL_CONTRIBUTION`.
pub fn calculate_ppf(input: &PpfInput) -> EasyWealthResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut contribution = input.annual_contribution;
    if contribution > PPF_MAX_ANNUAL_CONTRIBUTION {
        let msg = format!(
            "annual_contribution of {contribution} capped at the PPF limit of {PPF_MAX_ANNUAL_CONTRIBUTION}"
        );
        warn!("{msg}");
        warnings.push(msg);
        contribution = PPF_MAX_ANNUAL_CONTRIBUTION;
    } else if contribution > Decimal::ZERO && contribution < PPF_MIN_ANNUAL_CONTRIBUTION {
        warnings.push(format!(
            "annual_contribution of {contribution} is below the PPF minimum of {PPF_MIN_ANNUAL_CONTRIBUTION}"
        ));
    }

    let growth = GrowthInput {
        contribution,
        annual_rate_percent: input.annual_rate_percent,
        duration_years: PPF_TENURE_YEARS,
        annual_step_up_percent: Decimal::ZERO,
        compounding: Compounding::Annual,
    };
    let output = project(&growth, &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "PPF: annual deposit, annual compounding, 15-year lock-in",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_ppf_reference() {
        // 1.5L/yr at 7.1% for 15 years ≈ 4,068,209.22
        let out = calculate_ppf(&PpfInput::default()).unwrap();
        assert_eq!(out.result.snapshots.len(), 15);
        assert_eq!(out.result.total_invested, dec!(2250000));
        assert!(
            (out.result.maturity_value - dec!(4068209.22)).abs() < dec!(0.01),
            "got {}",
            out.result.maturity_value
        );
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_contribution_capped_at_limit() {
        let capped = calculate_ppf(&PpfInput {
            annual_contribution: dec!(500000),
            annual_rate_percent: dec!(7.1),
        })
        .unwrap();
        let at_limit = calculate_ppf(&PpfInput::default()).unwrap();
        assert_eq!(capped.result.maturity_value, at_limit.result.maturity_value);
        assert_eq!(capped.warnings.len(), 1);
    }

    #[test]
    fn test_below_minimum_warns_but_computes() {
        let out = calculate_ppf(&PpfInput {
            annual_contribution: dec!(100),
            annual_rate_percent: dec!(7.1),
        })
        .unwrap();
        assert_eq!(out.result.total_invested, dec!(1500));
        assert_eq!(out.warnings.len(), 1);
    }
}
