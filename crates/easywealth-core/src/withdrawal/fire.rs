use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_mul, overflow, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validation::require_non_negative;
use crate::EasyWealthResult;

/// Input parameters for the FIRE number.
///
/// Ages are carried for display only; the corpus is stated in today's money
/// with no inflation adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireInput {
    pub monthly_expense: Money,
    pub safe_withdrawal_rate_percent: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_age: Option<u32>,
}

impl Default for FireInput {
    fn default() -> Self {
        Self {
            monthly_expense: dec!(50000),
            safe_withdrawal_rate_percent: dec!(4),
            current_age: Some(30),
            retirement_age: Some(50),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireOutput {
    pub annual_expense: Money,
    /// Corpus whose safe withdrawal covers the annual expense.
    pub required_corpus: Money,
    /// Required corpus as a multiple of annual expense (25x at 4%).
    pub expense_multiple: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_to_retirement: Option<u32>,
}

/// Corpus needed to fund `monthly_expense` indefinitely at the given
/// safe withdrawal rate.
pub fn calculate_fire(input: &FireInput) -> EasyWealthResult<ComputationOutput<FireOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("monthly_expense", input.monthly_expense)?;

    let annual_expense = checked_mul(
        input.monthly_expense,
        Decimal::from(MONTHS_PER_YEAR),
        "annual expense",
    )?;

    let expense_multiple = if input.safe_withdrawal_rate_percent > Decimal::ZERO {
        dec!(100)
            .checked_div(input.safe_withdrawal_rate_percent)
            .ok_or_else(|| overflow("expense multiple"))?
    } else {
        let msg = "safe_withdrawal_rate_percent must be > 0; required corpus reported as 0";
        warn!("{msg}");
        warnings.push(msg.into());
        Decimal::ZERO
    };

    let years_to_retirement = match (input.current_age, input.retirement_age) {
        (Some(current), Some(retire)) if retire > current => Some(retire - current),
        (Some(current), Some(retire)) => {
            warnings.push(format!(
                "retirement_age ({retire}) should be after current_age ({current})"
            ));
            Some(0)
        }
        _ => None,
    };

    let output = FireOutput {
        annual_expense,
        required_corpus: checked_mul(annual_expense, expense_multiple, "required corpus")?,
        expense_multiple,
        years_to_retirement,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "FIRE number: annual expense / safe withdrawal rate (today's money)",
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
    fn test_four_percent_rule() {
        let out = calculate_fire(&FireInput::default()).unwrap();
        assert_eq!(out.result.annual_expense, dec!(600000));
        assert_eq!(out.result.required_corpus, dec!(15000000));
        assert_eq!(out.result.expense_multiple, dec!(25));
        assert_eq!(out.result.years_to_retirement, Some(20));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_ages_do_not_change_corpus() {
        let young = calculate_fire(&FireInput::default()).unwrap();
        let old = calculate_fire(&FireInput {
            current_age: Some(45),
            retirement_age: Some(60),
            ..FireInput::default()
        })
        .unwrap();
        assert_eq!(young.result.required_corpus, old.result.required_corpus);
    }

    #[test]
    fn test_zero_withdrawal_rate_guarded() {
        let out = calculate_fire(&FireInput {
            safe_withdrawal_rate_percent: Decimal::ZERO,
            ..FireInput::default()
        })
        .unwrap();
        assert_eq!(out.result.required_corpus, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_retirement_before_current_age_warns() {
        let out = calculate_fire(&FireInput {
            current_age: Some(50),
            retirement_age: Some(40),
            ..FireInput::default()
        })
        .unwrap();
        assert_eq!(out.result.years_to_retirement, Some(0));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_ages_optional() {
        let out = calculate_fire(&FireInput {
            current_age: None,
            retirement_age: None,
            ..FireInput::default()
        })
        .unwrap();
        assert_eq!(out.result.years_to_retirement, None);
    }

    #[test]
    fn test_vanishing_withdrawal_rate_is_an_error_not_a_panic() {
        let out = calculate_fire(&FireInput {
            safe_withdrawal_rate_percent: dec!(0.0000000000000000000001),
            ..FireInput::default()
        });
        assert!(out.is_err());
    }
}
