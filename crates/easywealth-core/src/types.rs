use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (12 = 12% p.a.), the way the calculator
/// screens present them. Convert with `time_value::periodic_rate`.
pub type Percent = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// One chart point in a time-series calculation.
///
/// `period` 0 is the opening position ("Start"); period N is the state after
/// N full years. Amounts are rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    pub period: u32,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invested: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawn: Option<Money>,
    pub balance: Money,
}

impl PeriodSnapshot {
    pub fn label_for(period: u32) -> String {
        if period == 0 {
            "Start".to_string()
        } else {
            format!("Yr {period}")
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
