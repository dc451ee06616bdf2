use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{future_value, periodic_rate, round_currency};
use crate::types::{with_metadata, ComputationOutput, Money, PeriodSnapshot, Percent};
use crate::validation::{
    clamp_duration_years, require_non_negative, require_rate_above_total_loss,
};
use crate::EasyWealthResult;

/// Fixed deposit compounded once a year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: u32,
}

impl Default for FdInput {
    fn default() -> Self {
        Self {
            principal: dec!(100000),
            annual_rate_percent: dec!(6.5),
            duration_years: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdOutput {
    pub maturity_value: Money,
    pub interest: Money,
    pub snapshots: Vec<PeriodSnapshot>,
}

/// `maturity = principal * (1 + rate/100)^years`
pub fn calculate_fd(input: &FdInput) -> EasyWealthResult<ComputationOutput<FdOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("principal", input.principal)?;
    require_rate_above_total_loss("annual_rate_percent", input.annual_rate_percent)?;
    let years = clamp_duration_years("duration_years", input.duration_years, &mut warnings);

    let rate = periodic_rate(input.annual_rate_percent, 1);
    let maturity_value = future_value(input.principal, rate, years)?;

    let snapshots = (0..=years)
        .map(|year| {
            Ok(PeriodSnapshot {
                period: year,
                label: PeriodSnapshot::label_for(year),
                invested: Some(input.principal),
                withdrawn: None,
                balance: round_currency(future_value(input.principal, rate, year)?),
            })
        })
        .collect::<EasyWealthResult<Vec<_>>>()?;

    let output = FdOutput {
        maturity_value,
        interest: maturity_value - input.principal,
        snapshots,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed deposit: lump sum, annual compounding",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fd_reference() {
        // 100000 * 1.065^5 ≈ 137,008.67
        let out = calculate_fd(&FdInput::default()).unwrap();
        assert!((out.result.maturity_value - dec!(137008.67)).abs() < dec!(0.01));
        assert!((out.result.interest - dec!(37008.67)).abs() < dec!(0.01));
    }

    #[test]
    fn test_fd_zero_rate_returns_principal() {
        let out = calculate_fd(&FdInput {
            annual_rate_percent: Decimal::ZERO,
            ..FdInput::default()
        })
        .unwrap();
        assert_eq!(out.result.maturity_value, dec!(100000));
        assert_eq!(out.result.interest, Decimal::ZERO);
    }

    #[test]
    fn test_fd_snapshots_start_at_principal() {
        let out = calculate_fd(&FdInput::default()).unwrap();
        let snaps = &out.result.snapshots;
        assert_eq!(snaps.len(), 6);
        assert_eq!(snaps[0].label, "Start");
        assert_eq!(snaps[0].balance, dec!(100000));
        assert_eq!(snaps[5].balance, dec!(137009));
    }

    #[test]
    fn test_fd_overflow_is_an_error_not_a_panic() {
        // 1 crore doubling every year for a century
        let err = calculate_fd(&FdInput {
            principal: dec!(10000000),
            annual_rate_percent: dec!(100),
            duration_years: 100,
        })
        .unwrap_err();
        assert!(matches!(err, crate::EasyWealthError::FinancialImpossibility(_)));
    }
}
