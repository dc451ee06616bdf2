use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_add, checked_mul, periodic_rate, round_currency, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, PeriodSnapshot, Percent};
use crate::validation::{
    clamp_duration_years, require_non_negative, require_rate_above_total_loss,
};
use crate::EasyWealthResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How often the running balance is credited with growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// Contribution and growth every month (SIP, RD).
    Monthly,
    /// One contribution and one growth step per year (PPF).
    Annual,
}

impl Compounding {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Monthly => MONTHS_PER_YEAR,
            Compounding::Annual => 1,
        }
    }
}

/// Input parameters for a periodic-contribution projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Amount paid in each period (monthly or annual, per `compounding`).
    pub contribution: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: u32,
    /// Yearly increase in the contribution; 0 keeps it flat.
    #[serde(default)]
    pub annual_step_up_percent: Percent,
    pub compounding: Compounding,
}

/// Output of a periodic-contribution projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthOutput {
    pub maturity_value: Money,
    pub total_invested: Money,
    pub total_interest: Money,
    /// One entry per elapsed year, in order.
    pub snapshots: Vec<PeriodSnapshot>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project a contribution stream with optional annual step-up.
pub fn simulate_growth(input: &GrowthInput) -> EasyWealthResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = project(input, &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Periodic contribution compounding with annual step-up",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Period loop shared by every calculator in the accumulation family.
///
/// Each period adds the current contribution and then credits one period of
/// growth on the whole balance. The step-up is applied once per year, after
/// that year's snapshot is taken.
pub(crate) fn project(
    input: &GrowthInput,
    warnings: &mut Vec<String>,
) -> EasyWealthResult<GrowthOutput> {
    require_non_negative("contribution", input.contribution)?;
    require_rate_above_total_loss("annual_rate_percent", input.annual_rate_percent)?;
    require_rate_above_total_loss("annual_step_up_percent", input.annual_step_up_percent)?;

    let years = clamp_duration_years("duration_years", input.duration_years, warnings);
    let periods_per_year = input.compounding.periods_per_year();
    let rate = periodic_rate(input.annual_rate_percent, periods_per_year);
    let growth = Decimal::ONE + rate;
    let step_up = Decimal::ONE + input.annual_step_up_percent / dec!(100);

    debug!(
        "growth projection: contribution={} rate={}% years={} step_up={}% compounding={:?}",
        input.contribution,
        input.annual_rate_percent,
        years,
        input.annual_step_up_percent,
        input.compounding
    );

    let mut balance = Decimal::ZERO;
    let mut invested = Decimal::ZERO;
    let mut contribution = input.contribution;
    let mut snapshots = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..periods_per_year {
            invested = checked_add(invested, contribution, "total invested")?;
            balance = checked_mul(
                checked_add(balance, contribution, "balance")?,
                growth,
                "balance",
            )?;
        }

        snapshots.push(PeriodSnapshot {
            period: year,
            label: PeriodSnapshot::label_for(year),
            invested: Some(round_currency(invested)),
            withdrawn: None,
            balance: round_currency(balance),
        });

        if !input.annual_step_up_percent.is_zero() {
            contribution = checked_mul(contribution, step_up, "stepped-up contribution")?;
        }
    }

    Ok(GrowthOutput {
        maturity_value: balance,
        total_invested: invested,
        total_interest: balance - invested,
        snapshots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn monthly(contribution: Decimal, rate: Decimal, years: u32, step_up: Decimal) -> GrowthInput {
        GrowthInput {
            contribution,
            annual_rate_percent: rate,
            duration_years: years,
            annual_step_up_percent: step_up,
            compounding: Compounding::Monthly,
        }
    }

    #[test]
    fn test_zero_rate_flat_contribution_is_straight_accumulation() {
        let out = simulate_growth(&monthly(dec!(1000), Decimal::ZERO, 3, Decimal::ZERO)).unwrap();
        assert_eq!(out.result.maturity_value, dec!(36000));
        assert_eq!(out.result.total_invested, dec!(36000));
        assert_eq!(out.result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_one_snapshot_per_year() {
        let out = simulate_growth(&monthly(dec!(1000), dec!(10), 7, Decimal::ZERO)).unwrap();
        let snaps = &out.result.snapshots;
        assert_eq!(snaps.len(), 7);
        assert_eq!(snaps[0].label, "Yr 1");
        assert_eq!(snaps[6].label, "Yr 7");
        assert!(snaps.windows(2).all(|w| w[0].period < w[1].period));
    }

    #[test]
    fn test_step_up_applies_per_year_not_per_month() {
        // 0% growth, 10% step-up: year 1 = 12 * 100, year 2 = 12 * 110
        let out = simulate_growth(&monthly(dec!(100), Decimal::ZERO, 2, dec!(10))).unwrap();
        assert_eq!(out.result.total_invested, dec!(2520));
        assert_eq!(out.result.snapshots[0].invested, Some(dec!(1200)));
    }

    #[test]
    fn test_contribution_is_added_before_growth() {
        // One annual period at 10%: (0 + 100) * 1.1 = 110
        let input = GrowthInput {
            contribution: dec!(100),
            annual_rate_percent: dec!(10),
            duration_years: 1,
            annual_step_up_percent: Decimal::ZERO,
            compounding: Compounding::Annual,
        };
        let out = simulate_growth(&input).unwrap();
        assert_eq!(out.result.maturity_value, dec!(110));
    }

    #[test]
    fn test_zero_duration_clamped_to_one_year() {
        let out = simulate_growth(&monthly(dec!(500), dec!(12), 0, Decimal::ZERO)).unwrap();
        assert_eq!(out.result.snapshots.len(), 1);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_runaway_growth_is_an_error_not_a_panic() {
        let err = simulate_growth(&monthly(dec!(100000), dec!(60), 100, Decimal::ZERO)).unwrap_err();
        assert!(matches!(err, crate::EasyWealthError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_runaway_step_up_is_an_error_not_a_panic() {
        assert!(simulate_growth(&monthly(dec!(5000), dec!(12), 100, dec!(100))).is_err());
    }

    #[test]
    fn test_negative_contribution_rejected() {
        assert!(simulate_growth(&monthly(dec!(-1), dec!(12), 5, Decimal::ZERO)).is_err());
    }
}
