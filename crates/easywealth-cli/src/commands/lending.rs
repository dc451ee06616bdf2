use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use easywealth_core::lending::emi::{self, EmiInput, TenureUnit};

use crate::input;

#[derive(Clone, Copy, ValueEnum)]
pub enum TenureUnitArg {
    Months,
    Years,
}

impl From<TenureUnitArg> for TenureUnit {
    fn from(unit: TenureUnitArg) -> Self {
        match unit {
            TenureUnitArg::Months => TenureUnit::Months,
            TenureUnitArg::Years => TenureUnit::Years,
        }
    }
}

/// Arguments for loan EMI calculation (also used by `cc-emi`)
#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(long, alias = "loan")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Repayment tenure, in units of --tenure-unit
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Unit of the tenure
    #[arg(long, value_enum)]
    pub tenure_unit: Option<TenureUnitArg>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    emi_with_defaults(args, EmiInput::default())
}

pub fn run_credit_card_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    emi_with_defaults(args, EmiInput::credit_card())
}

fn emi_with_defaults(
    args: EmiArgs,
    defaults: EmiInput,
) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = input::resolve(args.input.as_deref(), || EmiInput {
        principal: args.principal.unwrap_or(defaults.principal),
        annual_rate_percent: args.annual_rate_percent.unwrap_or(defaults.annual_rate_percent),
        tenure: args.tenure.unwrap_or(defaults.tenure),
        tenure_unit: args.tenure_unit.map(Into::into).unwrap_or(defaults.tenure_unit),
    })?;
    let result = emi::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}
