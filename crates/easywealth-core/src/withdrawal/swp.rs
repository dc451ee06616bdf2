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

/// Systematic withdrawal plan: a corpus drawn down monthly while the
/// remainder keeps compounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpInput {
    pub initial_corpus: Money,
    pub monthly_withdrawal: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: u32,
    /// Yearly increase in the withdrawal; 0 keeps it flat.
    #[serde(default)]
    pub annual_step_up_percent: Percent,
}

impl Default for SwpInput {
    fn default() -> Self {
        Self {
            initial_corpus: dec!(1000000),
            monthly_withdrawal: dec!(5000),
            annual_rate_percent: dec!(8),
            duration_years: 10,
            annual_step_up_percent: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpOutput {
    pub final_balance: Money,
    /// Sum of the scheduled withdrawals made while the corpus lasted,
    /// counting the exhausting month in full.
    pub total_withdrawn: Money,
    /// What the corpus could actually pay: the exhausting month is limited
    /// to the balance left.
    pub total_paid_out: Money,
    pub exhausted: bool,
    /// Month in which the corpus ran out, counted from 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_until_exhausted: Option<u32>,
    /// Opening corpus followed by one entry per elapsed year.
    pub snapshots: Vec<PeriodSnapshot>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate a monthly drawdown of a corpus.
///
/// Each month the withdrawal is taken first and the remainder earns one
/// month of growth. The month that drives the balance below zero still
/// counts its full withdrawal in `total_withdrawn`; from then on the balance
/// stays at zero and time advances with no further withdrawals.
pub fn calculate_swp(input: &SwpInput) -> EasyWealthResult<ComputationOutput<SwpOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("initial_corpus", input.initial_corpus)?;
    require_non_negative("monthly_withdrawal", input.monthly_withdrawal)?;
    require_rate_above_total_loss("annual_rate_percent", input.annual_rate_percent)?;
    require_rate_above_total_loss("annual_step_up_percent", input.annual_step_up_percent)?;

    let years = clamp_duration_years("duration_years", input.duration_years, &mut warnings);
    let growth = Decimal::ONE + periodic_rate(input.annual_rate_percent, MONTHS_PER_YEAR);
    let step_up = Decimal::ONE + input.annual_step_up_percent / dec!(100);

    debug!(
        "swp: corpus={} withdrawal={} rate={}% years={} step_up={}%",
        input.initial_corpus,
        input.monthly_withdrawal,
        input.annual_rate_percent,
        years,
        input.annual_step_up_percent
    );

    let mut balance = input.initial_corpus;
    let mut withdrawal = input.monthly_withdrawal;
    let mut total_withdrawn = Decimal::ZERO;
    let mut total_paid_out = Decimal::ZERO;
    let mut months_until_exhausted = if balance.is_zero() { Some(0) } else { None };

    let mut snapshots = Vec::with_capacity(years as usize + 1);
    snapshots.push(PeriodSnapshot {
        period: 0,
        label: PeriodSnapshot::label_for(0),
        invested: None,
        withdrawn: Some(Decimal::ZERO),
        balance: round_currency(balance),
    });

    let mut month: u32 = 0;
    for year in 1..=years {
        for _ in 0..MONTHS_PER_YEAR {
            month += 1;
            if balance <= Decimal::ZERO {
                continue;
            }

            total_withdrawn = checked_add(total_withdrawn, withdrawal, "total withdrawn")?;
            total_paid_out = checked_add(total_paid_out, withdrawal.min(balance), "total paid out")?;
            balance = checked_mul(balance - withdrawal, growth, "balance")?.max(Decimal::ZERO);

            if balance.is_zero() && months_until_exhausted.is_none() {
                debug!("swp: corpus exhausted in month {month}");
                months_until_exhausted = Some(month);
            }
        }

        snapshots.push(PeriodSnapshot {
            period: year,
            label: PeriodSnapshot::label_for(year),
            invested: None,
            withdrawn: Some(round_currency(total_withdrawn)),
            balance: round_currency(balance),
        });

        if !input.annual_step_up_percent.is_zero() {
            withdrawal = checked_mul(withdrawal, step_up, "stepped-up withdrawal")?;
        }
    }

    if let Some(m) = months_until_exhausted {
        warnings.push(format!(
            "Corpus exhausted after {m} months of a {}-month plan",
            years * MONTHS_PER_YEAR
        ));
    }

    let output = SwpOutput {
        final_balance: balance,
        total_withdrawn,
        total_paid_out,
        exhausted: months_until_exhausted.is_some(),
        months_until_exhausted,
        snapshots,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SWP: monthly withdrawal then monthly compounding, annual withdrawal step-up",
        input,
        warnings,
        elapsed,
        output,
    ))
}
