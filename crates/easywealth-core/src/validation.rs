//! Input guards shared by every calculator.
//!
//! Structural problems (negative money, rates that wipe out more than the
//! whole balance) are rejected. Durations outside the simulated range are
//! clamped and reported through the output's `warnings`.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::EasyWealthError;
use crate::types::{Money, Percent};
use crate::EasyWealthResult;

/// Upper bound on any simulated horizon.
pub const MAX_DURATION_YEARS: u32 = 100;

pub fn require_non_negative(field: &str, value: Money) -> EasyWealthResult<()> {
    if value < Decimal::ZERO {
        return Err(EasyWealthError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be >= 0 (got {value})"),
        });
    }
    Ok(())
}

/// Rates at or below -100% would flip balances negative.
pub fn require_rate_above_total_loss(field: &str, rate: Percent) -> EasyWealthResult<()> {
    if rate <= dec!(-100) {
        return Err(EasyWealthError::InvalidInput {
            field: field.into(),
            reason: "Rate must be greater than -100%".into(),
        });
    }
    Ok(())
}

/// Clamp a duration to `1..=MAX_DURATION_YEARS`, recording a warning on change.
pub fn clamp_duration_years(field: &str, years: u32, warnings: &mut Vec<String>) -> u32 {
    let clamped = years.clamp(1, MAX_DURATION_YEARS);
    if clamped != years {
        let msg = format!("{field} of {years} clamped to {clamped}");
        warn!("{msg}");
        warnings.push(msg);
    }
    clamped
}
