use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use easywealth_core::accumulation::ppf::{self, PpfInput};
use easywealth_core::accumulation::rd::{self, RdInput};
use easywealth_core::accumulation::sip::{self, SipInput};

use crate::input;

/// Arguments for SIP projection (also used by `sbi-sip`)
#[derive(Args)]
pub struct SipArgs {
    /// Monthly investment amount
    #[arg(long)]
    pub monthly_investment: Option<Decimal>,

    /// Expected annual return in percent (e.g. 12 for 12%)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long, alias = "years")]
    pub duration_years: Option<u32>,

    /// Annual increase in the monthly investment, in percent
    #[arg(long, alias = "step-up")]
    pub annual_step_up_percent: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for recurring deposit projection
#[derive(Args)]
pub struct RdArgs {
    /// Monthly deposit amount
    #[arg(long)]
    pub monthly_deposit: Option<Decimal>,

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

/// Arguments for PPF projection
#[derive(Args)]
pub struct PpfArgs {
    /// Yearly deposit (capped at the PPF limit)
    #[arg(long)]
    pub annual_contribution: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = input::resolve(args.input.as_deref(), || {
        let defaults = SipInput::default();
        SipInput {
            monthly_investment: args.monthly_investment.unwrap_or(defaults.monthly_investment),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
            duration_years: args.duration_years.unwrap_or(defaults.duration_years),
            annual_step_up_percent: args
                .annual_step_up_percent
                .unwrap_or(defaults.annual_step_up_percent),
        }
    })?;
    let result = sip::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_rd(args: RdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rd_input: RdInput = input::resolve(args.input.as_deref(), || {
        let defaults = RdInput::default();
        RdInput {
            monthly_deposit: args.monthly_deposit.unwrap_or(defaults.monthly_deposit),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
            duration_years: args.duration_years.unwrap_or(defaults.duration_years),
        }
    })?;
    let result = rd::calculate_rd(&rd_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_ppf(args: PpfArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ppf_input: PpfInput = input::resolve(args.input.as_deref(), || {
        let defaults = PpfInput::default();
        PpfInput {
            annual_contribution: args.annual_contribution.unwrap_or(defaults.annual_contribution),
            annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
        }
    })?;
    let result = ppf::calculate_ppf(&ppf_input)?;
    Ok(serde_json::to_value(result)?)
}
