use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use easywealth_core::withdrawal::fire::{self, FireInput};
use easywealth_core::withdrawal::swp::{self, SwpInput};

use crate::input;

/// Arguments for systematic withdrawal simulation
#[derive(Args)]
pub struct SwpArgs {
    /// Starting corpus
    #[arg(long, alias = "corpus")]
    pub initial_corpus: Option<Decimal>,

    /// Amount withdrawn each month
    #[arg(long, alias = "withdrawal")]
    pub monthly_withdrawal: Option<Decimal>,

    /// Expected annual return on the remaining corpus, in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Withdrawal horizon in years
    #[arg(long, alias = "years")]
    pub duration_years: Option<u32>,

    /// Annual increase in the withdrawal, in percent
    #[arg(long, alias = "step-up")]
    pub annual_step_up_percent: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for FIRE corpus estimation
#[derive(Args)]
pub struct FireArgs {
    /// Current monthly expenses
    #[arg(long, alias = "expense")]
    pub monthly_expense: Option<Decimal>,

    /// Safe withdrawal rate in percent (e.g. 4 for the 4% rule)
    #[arg(long, alias = "swr")]
    pub safe_withdrawal_rate_percent: Option<Decimal>,

    /// Current age
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Target retirement age
    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_swp(args: SwpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let swp_input: SwpInput = input::resolve(args.input.as_deref(), || {
        let defaults = SwpInput::default();
        SwpInput {
            initial_corpus: args.initial_corpus.unwrap_or(defaults.initial_corpus),
            monthly_withdrawal: args.monthly_withdrawal.unwrap_or(defaults.monthly_withdrawal),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
            duration_years: args.duration_years.unwrap_or(defaults.duration_years),
            annual_step_up_percent: args
                .annual_step_up_percent
                .unwrap_or(defaults.annual_step_up_percent),
        }
    })?;
    let result = swp::calculate_swp(&swp_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_fire(args: FireArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fire_input: FireInput = input::resolve(args.input.as_deref(), || {
        let defaults = FireInput::default();
        FireInput {
            monthly_expense: args.monthly_expense.unwrap_or(defaults.monthly_expense),
            safe_withdrawal_rate_percent: args
                .safe_withdrawal_rate_percent
                .unwrap_or(defaults.safe_withdrawal_rate_percent),
            current_age: args.current_age.or(defaults.current_age),
            retirement_age: args.retirement_age.or(defaults.retirement_age),
        }
    })?;
    let result = fire::calculate_fire(&fire_input)?;
    Ok(serde_json::to_value(result)?)
}
