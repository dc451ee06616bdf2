//! The calculator menu as data: every calculator kind with its display label
//! and the range each of its inputs is offered over.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Sip,
    SbiSip,
    Swp,
    Fire,
    Emi,
    CreditCardEmi,
    Ppf,
    Fd,
    Rd,
    SimpleInterest,
    Cagr,
}

impl CalculatorKind {
    /// Menu order.
    pub const ALL: [CalculatorKind; 11] = [
        CalculatorKind::Sip,
        CalculatorKind::SbiSip,
        CalculatorKind::Swp,
        CalculatorKind::Fire,
        CalculatorKind::Emi,
        CalculatorKind::Ppf,
        CalculatorKind::Fd,
        CalculatorKind::Rd,
        CalculatorKind::CreditCardEmi,
        CalculatorKind::SimpleInterest,
        CalculatorKind::Cagr,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CalculatorKind::Sip => "SIP",
            CalculatorKind::SbiSip => "SBI SIP",
            CalculatorKind::Swp => "SWP",
            CalculatorKind::Fire => "FIRE Planner",
            CalculatorKind::Emi => "Loan EMI",
            CalculatorKind::CreditCardEmi => "Credit Card EMI",
            CalculatorKind::Ppf => "PPF",
            CalculatorKind::Fd => "Fixed Deposit",
            CalculatorKind::Rd => "Rec. Deposit",
            CalculatorKind::SimpleInterest => "Simple Interest",
            CalculatorKind::Cagr => "CAGR",
        }
    }

    /// Input ranges, in the order the inputs are presented.
    pub fn parameters(self) -> Vec<ParameterSpec> {
        use ParameterUnit::*;
        let p = ParameterSpec::new;
        match self {
            CalculatorKind::Sip | CalculatorKind::SbiSip => vec![
                p("monthly_investment", dec!(500), dec!(100000), dec!(500), dec!(5000), Currency),
                p("annual_rate_percent", dec!(5), dec!(30), dec!(0.5), dec!(12), Percent),
                p("duration_years", dec!(1), dec!(40), dec!(1), dec!(10), Years),
                p("annual_step_up_percent", dec!(0), dec!(20), dec!(1), dec!(0), Percent),
            ],
            CalculatorKind::Swp => vec![
                p("initial_corpus", dec!(100000), dec!(10000000), dec!(50000), dec!(1000000), Currency),
                p("monthly_withdrawal", dec!(1000), dec!(100000), dec!(500), dec!(5000), Currency),
                p("annual_rate_percent", dec!(4), dec!(20), dec!(0.5), dec!(8), Percent),
                p("duration_years", dec!(1), dec!(30), dec!(1), dec!(10), Years),
                p("annual_step_up_percent", dec!(0), dec!(10), dec!(1), dec!(0), Percent),
            ],
            CalculatorKind::Fire => vec![
                p("monthly_expense", dec!(10000), dec!(500000), dec!(5000), dec!(50000), Currency),
                p("safe_withdrawal_rate_percent", dec!(2), dec!(6), dec!(0.1), dec!(4), Percent),
                p("current_age", dec!(18), dec!(60), dec!(1), dec!(30), Years),
                p("retirement_age", dec!(19), dec!(80), dec!(1), dec!(50), Years),
            ],
            CalculatorKind::Emi => vec![
                p("principal", dec!(100000), dec!(10000000), dec!(50000), dec!(1000000), Currency),
                p("annual_rate_percent", dec!(1), dec!(20), dec!(0.1), dec!(9), Percent),
                p("tenure", dec!(1), dec!(30), dec!(1), dec!(5), Years),
            ],
            CalculatorKind::CreditCardEmi => vec![
                p("principal", dec!(5000), dec!(1000000), dec!(1000), dec!(50000), Currency),
                p("annual_rate_percent", dec!(1), dec!(45), dec!(0.1), dec!(36), Percent),
                p("tenure", dec!(1), dec!(48), dec!(1), dec!(12), Months),
            ],
            CalculatorKind::Ppf => vec![
                p("annual_contribution", dec!(500), dec!(150000), dec!(500), dec!(150000), Currency),
                p("annual_rate_percent", dec!(6), dec!(9), dec!(0.1), dec!(7.1), Percent),
            ],
            CalculatorKind::Fd => vec![
                p("principal", dec!(5000), dec!(10000000), dec!(5000), dec!(100000), Currency),
                p("annual_rate_percent", dec!(3), dec!(12), dec!(0.1), dec!(6.5), Percent),
                p("duration_years", dec!(1), dec!(20), dec!(1), dec!(5), Years),
            ],
            CalculatorKind::Rd => vec![
                p("monthly_deposit", dec!(500), dec!(100000), dec!(500), dec!(5000), Currency),
                p("annual_rate_percent", dec!(3), dec!(12), dec!(0.1), dec!(6.5), Percent),
                p("duration_years", dec!(1), dec!(10), dec!(1), dec!(5), Years),
            ],
            CalculatorKind::SimpleInterest => vec![
                p("principal", dec!(1000), dec!(1000000), dec!(1000), dec!(50000), Currency),
                p("annual_rate_percent", dec!(1), dec!(50), dec!(0.5), dec!(10), Percent),
                p("duration_years", dec!(1), dec!(30), dec!(1), dec!(2), Years),
            ],
            CalculatorKind::Cagr => vec![
                p("start_value", dec!(1000), dec!(10000000), dec!(1000), dec!(10000), Currency),
                p("end_value", dec!(1000), dec!(10000000), dec!(1000), dec!(20000), Currency),
                p("years", dec!(1), dec!(50), dec!(1), dec!(5), Years),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterUnit {
    Currency,
    Percent,
    Years,
    Months,
}

/// Offered range of one calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    pub default: Decimal,
    pub unit: ParameterUnit,
}

impl ParameterSpec {
    pub fn new(
        name: &str,
        min: Decimal,
        max: Decimal,
        step: Decimal,
        default: Decimal,
        unit: ParameterUnit,
    ) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
            step,
            default,
            unit,
        }
    }

    /// Restrict `value` to `[min, max]`.
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }
}

/// One menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: CalculatorKind,
    pub label: String,
    pub parameters: Vec<ParameterSpec>,
}

/// Every calculator in menu order.
pub fn catalog() -> Vec<CatalogEntry> {
    CalculatorKind::ALL
        .iter()
        .map(|&kind| CatalogEntry {
            kind,
            label: kind.label().to_string(),
            parameters: kind.parameters(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_lists_every_kind_once() {
        let entries = catalog();
        assert_eq!(entries.len(), CalculatorKind::ALL.len());
        let kinds: std::collections::HashSet<CalculatorKind> =
            entries.iter().map(|e| e.kind).collect();
        assert_eq!(kinds.len(), 11);
    }

    #[test]
    fn test_defaults_inside_ranges() {
        for entry in catalog() {
            for param in &entry.parameters {
                assert!(
                    param.min <= param.default && param.default <= param.max,
                    "{} / {} default out of range",
                    entry.label,
                    param.name
                );
                assert!(param.step > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_clamp() {
        let param = &CalculatorKind::Ppf.parameters()[0];
        assert_eq!(param.clamp(dec!(200000)), dec!(150000));
        assert_eq!(param.clamp(dec!(100)), dec!(500));
        assert_eq!(param.clamp(dec!(12000)), dec!(12000));
    }

    #[test]
    fn test_kind_serialises_snake_case() {
        let json = serde_json::to_string(&CalculatorKind::CreditCardEmi).unwrap();
        assert_eq!(json, "\"credit_card_emi\"");
    }
}
