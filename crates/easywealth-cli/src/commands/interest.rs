use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use easywealth_core::interest::cagr::{self, CagrInput};
use easywealth_core::interest::fd::{self, FdInput};
use easywealth_core::interest::simple::{self, SimpleInterestInput};

use crate::input;

/// Arguments for fixed deposit maturity
#[derive(Args)]
pub struct FdArgs {
    /// Amount deposited
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Deposit term in years
    #[arg(long, alias = "years")]
    pub duration_years: Option<u32>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for simple interest
#[derive(Args)]
pub struct SimpleInterestArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Duration in years (fractions allowed)
    #[arg(long, alias = "years")]
    pub duration_years: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for CAGR
#[derive(Args)]
pub struct CagrArgs {
    /// Value at the start of the period
    #[arg(long, alias = "start")]
    pub start_value: Option<Decimal>,

    /// Value at the end of the period
    #[arg(long, alias = "end")]
    pub end_value: Option<Decimal>,

    /// Length of the period in years (fractions allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_fd(args: FdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: FdInput = input::resolve(args.input.as_deref(), || {
        let defaults = FdInput::default();
        FdInput {
            principal: args.principal.unwrap_or(defaults.principal),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
            duration_years: args.duration_years.unwrap_or(defaults.duration_years),
        }
    })?;
    let result = fd::calculate_fd(&fd_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_simple_interest(args: SimpleInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let si_input: SimpleInterestInput = input::resolve(args.input.as_deref(), || {
        let defaults = SimpleInterestInput::default();
        SimpleInterestInput {
            principal: args.principal.unwrap_or(defaults.principal),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
            duration_years: args.duration_years.unwrap_or(defaults.duration_years),
        }
    })?;
    let result = simple::calculate_simple_interest(&si_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cagr(args: CagrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cagr_input: CagrInput = input::resolve(args.input.as_deref(), || {
        let defaults = CagrInput::default();
        CagrInput {
            start_value: args.start_value.unwrap_or(defaults.start_value),
            end_value: args.end_value.unwrap_or(defaults.end_value),
            years: args.years.unwrap_or(defaults.years),
        }
    })?;
    let result = cagr::calculate_cagr(&cagr_input)?;
    Ok(serde_json::to_value(result)?)
}
