mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::accumulation::{PpfArgs, RdArgs, SipArgs};
use commands::catalog::{CalculatorsArgs, RunArgs};
use commands::interest::{CagrArgs, FdArgs, SimpleInterestArgs};
use commands::lending::EmiArgs;
use commands::withdrawal::{FireArgs, SwpArgs};

/// Personal-finance calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "ewc",
    version,
    about = "Personal-finance calculators with decimal precision",
    long_about = "A CLI for everyday savings, withdrawal and loan arithmetic. Supports SIP, \
                  SWP, FIRE, loan and credit-card EMI, PPF, fixed and recurring deposits, \
                  simple interest and CAGR. Inputs come from flags, a JSON/YAML file, or \
                  JSON piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a monthly SIP with optional annual step-up
    Sip(SipArgs),
    /// SIP projection for the SBI SIP screen (same engine as `sip`)
    SbiSip(SipArgs),
    /// Simulate a systematic withdrawal plan
    Swp(SwpArgs),
    /// Estimate the corpus needed for financial independence
    Fire(FireArgs),
    /// Calculate a loan EMI and amortization schedule
    Emi(EmiArgs),
    /// Calculate a credit-card EMI conversion
    CcEmi(EmiArgs),
    /// Project a 15-year PPF account
    Ppf(PpfArgs),
    /// Fixed deposit maturity with annual compounding
    Fd(FdArgs),
    /// Recurring deposit maturity with monthly compounding
    Rd(RdArgs),
    /// Simple interest
    SimpleInterest(SimpleInterestArgs),
    /// Compound annual growth rate between two values
    Cagr(CagrArgs),
    /// Run any calculator from a tagged JSON/YAML request
    Run(RunArgs),
    /// List calculators and the ranges of their inputs
    Calculators(CalculatorsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) | Commands::SbiSip(args) => commands::accumulation::run_sip(args),
        Commands::Swp(args) => commands::withdrawal::run_swp(args),
        Commands::Fire(args) => commands::withdrawal::run_fire(args),
        Commands::Emi(args) => commands::lending::run_emi(args),
        Commands::CcEmi(args) => commands::lending::run_credit_card_emi(args),
        Commands::Ppf(args) => commands::accumulation::run_ppf(args),
        Commands::Fd(args) => commands::interest::run_fd(args),
        Commands::Rd(args) => commands::accumulation::run_rd(args),
        Commands::SimpleInterest(args) => commands::interest::run_simple_interest(args),
        Commands::Cagr(args) => commands::interest::run_cagr(args),
        Commands::Run(args) => commands::catalog::run_request(args),
        Commands::Calculators(args) => commands::catalog::run_calculators(args),
        Commands::Version => {
            println!("ewc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
