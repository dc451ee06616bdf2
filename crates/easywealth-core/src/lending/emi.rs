use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{
    annuity_payment, checked_add, checked_mul, overflow, periodic_rate, MONTHS_PER_YEAR,
};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validation::{require_non_negative, require_rate_above_total_loss, MAX_DURATION_YEARS};
use crate::EasyWealthResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Unit of `EmiInput::tenure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureUnit {
    Months,
    Years,
}

/// Input parameters for an equated monthly instalment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub tenure: u32,
    pub tenure_unit: TenureUnit,
}

impl Default for EmiInput {
    fn default() -> Self {
        Self {
            principal: dec!(1000000),
            annual_rate_percent: dec!(9),
            tenure: 5,
            tenure_unit: TenureUnit::Years,
        }
    }
}

impl EmiInput {
    /// Typical credit-card conversion: 50,000 at 36% over 12 months.
    pub fn credit_card() -> Self {
        Self {
            principal: dec!(50000),
            annual_rate_percent: dec!(36),
            tenure: 12,
            tenure_unit: TenureUnit::Months,
        }
    }

    pub fn tenure_months(&self) -> u32 {
        match self.tenure_unit {
            TenureUnit::Months => self.tenure,
            TenureUnit::Years => self.tenure.saturating_mul(MONTHS_PER_YEAR),
        }
    }
}

/// Principal versus interest share of the total repaid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentBreakdown {
    pub principal: Money,
    pub interest: Money,
}

/// One year (or the final partial year) of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    pub months: u32,
    pub periodic_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub breakdown: RepaymentBreakdown,
    pub schedule: Vec<AmortizationYear>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Level monthly payment for an amortizing loan.
///
/// `payment = P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
/// A 0% loan repays `P / n` per month.
pub fn calculate_emi(input: &EmiInput) -> EasyWealthResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("principal", input.principal)?;
    require_rate_above_total_loss("annual_rate_percent", input.annual_rate_percent)?;

    let max_months = MAX_DURATION_YEARS * MONTHS_PER_YEAR;
    let requested = input.tenure_months();
    let months = requested.clamp(1, max_months);
    if months != requested {
        let msg = format!("tenure of {requested} months clamped to {months}");
        warn!("{msg}");
        warnings.push(msg);
    }

    let rate = periodic_rate(input.annual_rate_percent, MONTHS_PER_YEAR);
    if rate.is_zero() {
        warnings.push("Zero interest rate: principal repaid in equal instalments".into());
    }

    debug!(
        "emi: principal={} rate={}% months={}",
        input.principal, input.annual_rate_percent, months
    );

    let payment = annuity_payment(input.principal, rate, months)?;
    let total_payment = checked_mul(payment, Decimal::from(months), "total payment")?;
    let total_interest = total_payment - input.principal;

    let output = EmiOutput {
        months,
        periodic_payment: payment,
        total_payment,
        total_interest,
        breakdown: RepaymentBreakdown {
            principal: input.principal,
            interest: total_interest,
        },
        schedule: build_schedule(input.principal, rate, payment, months)?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortizing loan: level monthly payment (standard EMI formula)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Roll the loan month by month and aggregate by year.
///
/// The final month repays whatever principal is left so the schedule closes
/// at exactly zero.
fn build_schedule(
    principal: Money,
    rate: Decimal,
    payment: Money,
    months: u32,
) -> EasyWealthResult<Vec<AmortizationYear>> {
    let mut schedule = Vec::with_capacity(months.div_ceil(MONTHS_PER_YEAR) as usize);
    let mut balance = principal;
    let mut principal_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for month in 1..=months {
        let interest = checked_mul(balance, rate, "monthly interest")?;
        let repaid = if month == months {
            balance
        } else {
            payment
                .checked_sub(interest)
                .ok_or_else(|| overflow("principal repaid"))?
                .min(balance)
        };
        balance -= repaid;
        principal_paid = checked_add(principal_paid, repaid, "principal repaid")?;
        interest_paid = checked_add(interest_paid, interest, "interest paid")?;

        if month % MONTHS_PER_YEAR == 0 || month == months {
            schedule.push(AmortizationYear {
                year: month.div_ceil(MONTHS_PER_YEAR),
                principal_paid,
                interest_paid,
                closing_balance: balance,
            });
            principal_paid = Decimal::ZERO;
            interest_paid = Decimal::ZERO;
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_home_loan_reference() {
        // 10L at 9% for 5 years ≈ 20,758.36/month
        let out = calculate_emi(&EmiInput::default()).unwrap();
        let r = &out.result;
        assert_eq!(r.months, 60);
        assert!((r.periodic_payment - dec!(20758.36)).abs() < dec!(0.01));
        assert!((r.total_payment - r.total_interest - dec!(1000000)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_tenure_units_agree() {
        let years = calculate_emi(&EmiInput::default()).unwrap();
        let months = calculate_emi(&EmiInput {
            tenure: 60,
            tenure_unit: TenureUnit::Months,
            ..EmiInput::default()
        })
        .unwrap();
        assert_eq!(years.result.periodic_payment, months.result.periodic_payment);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let out = calculate_emi(&EmiInput {
            principal: dec!(120000),
            annual_rate_percent: Decimal::ZERO,
            tenure: 12,
            tenure_unit: TenureUnit::Months,
        })
        .unwrap();
        assert_eq!(out.result.periodic_payment, dec!(10000));
        assert_eq!(out.result.total_interest, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_credit_card_defaults() {
        // 50,000 at 36% (3%/month) over 12 months ≈ 5,023.10
        let out = calculate_emi(&EmiInput::credit_card()).unwrap();
        assert_eq!(out.result.months, 12);
        assert!((out.result.periodic_payment - dec!(5023.10)).abs() < dec!(0.01));
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let out = calculate_emi(&EmiInput::default()).unwrap();
        let schedule = &out.result.schedule;
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.last().unwrap().closing_balance, Decimal::ZERO);

        let repaid: Decimal = schedule.iter().map(|y| y.principal_paid).sum();
        assert!((repaid - dec!(1000000)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_schedule_partial_final_year() {
        let out = calculate_emi(&EmiInput {
            tenure: 18,
            tenure_unit: TenureUnit::Months,
            ..EmiInput::default()
        })
        .unwrap();
        let years: Vec<u32> = out.result.schedule.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![1, 2]);
    }

    #[test]
    fn test_extreme_rate_and_tenure_is_an_error_not_a_panic() {
        let err = calculate_emi(&EmiInput {
            principal: dec!(1000000),
            annual_rate_percent: dec!(100),
            tenure: 100,
            tenure_unit: TenureUnit::Years,
        })
        .unwrap_err();
        assert!(matches!(err, crate::EasyWealthError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_huge_principal_total_is_an_error_not_a_panic() {
        assert!(calculate_emi(&EmiInput {
            // Each payment fits, twelve of them do not
            principal: Decimal::MAX,
            annual_rate_percent: dec!(12),
            tenure: 12,
            tenure_unit: TenureUnit::Months,
        })
        .is_err());
    }

    #[test]
    fn test_zero_tenure_clamped() {
        let out = calculate_emi(&EmiInput {
            tenure: 0,
            ..EmiInput::default()
        })
        .unwrap();
        assert_eq!(out.result.months, 1);
        assert!(!out.warnings.is_empty());
    }
}
