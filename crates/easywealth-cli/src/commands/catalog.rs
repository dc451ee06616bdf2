use clap::Args;
use serde_json::{json, Value};

use easywealth_core::catalog::{catalog, CalculatorKind};
use easywealth_core::dispatch::{self, CalculatorRequest};

use crate::input;

/// Arguments for running any calculator from a tagged request
#[derive(Args)]
pub struct RunArgs {
    /// Calculator to run with its default inputs when no request is supplied
    #[arg(long, value_parser = parse_kind)]
    pub calculator: Option<CalculatorKind>,

    /// Path to JSON/YAML request file with a "calculator" tag
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for listing calculators and their input ranges
#[derive(Args)]
pub struct CalculatorsArgs {
    /// Only list this calculator
    #[arg(long, value_parser = parse_kind)]
    pub calculator: Option<CalculatorKind>,
}

pub fn run_request(args: RunArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fallback = args.calculator;
    let request: Option<CalculatorRequest> = input::resolve(args.input.as_deref(), || {
        fallback.map(CalculatorRequest::with_defaults)
    })?;
    let request = request.ok_or(
        "no calculator request: pass --input, pipe a JSON request on stdin, or name --calculator",
    )?;
    Ok(dispatch::run(&request)?)
}

/// One row per calculator input, in menu order.
pub fn run_calculators(args: CalculatorsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut rows = Vec::new();
    for entry in catalog()
        .into_iter()
        .filter(|e| args.calculator.map_or(true, |k| k == e.kind))
    {
        for param in entry.parameters {
            rows.push(json!({
                "calculator": entry.kind,
                "label": entry.label,
                "parameter": param.name,
                "min": param.min,
                "max": param.max,
                "step": param.step,
                "default": param.default,
                "unit": param.unit,
            }));
        }
    }
    Ok(Value::Array(rows))
}

/// Accepts `sbi-sip` as well as `sbi_sip`.
fn parse_kind(s: &str) -> Result<CalculatorKind, String> {
    let normalised = s.trim().to_lowercase().replace('-', "_");
    serde_json::from_value(Value::String(normalised)).map_err(|_| {
        let known: Vec<String> = CalculatorKind::ALL
            .iter()
            .filter_map(|k| serde_json::to_value(k).ok())
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        format!("unknown calculator '{}' (expected one of: {})", s, known.join(", "))
    })
}
