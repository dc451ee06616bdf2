//! Single entry point over every calculator, for callers that receive the
//! calculator choice at runtime (CLI `run`, JavaScript bindings).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::accumulation::ppf::{calculate_ppf, PpfInput};
use crate::accumulation::rd::{calculate_rd, RdInput};
use crate::accumulation::sip::{calculate_sip, SipInput};
use crate::catalog::CalculatorKind;
use crate::interest::cagr::{calculate_cagr, CagrInput};
use crate::interest::fd::{calculate_fd, FdInput};
use crate::interest::simple::{calculate_simple_interest, SimpleInterestInput};
use crate::lending::emi::{calculate_emi, EmiInput};
use crate::withdrawal::fire::{calculate_fire, FireInput};
use crate::withdrawal::swp::{calculate_swp, SwpInput};
use crate::EasyWealthResult;

/// A calculator invocation, tagged by `"calculator"`:
///
/// ```json
/// { "calculator": "sip", "monthly_investment": "5000", "annual_rate_percent": "12", "duration_years": 10 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorRequest {
    Sip(SipInput),
    SbiSip(SipInput),
    Swp(SwpInput),
    Fire(FireInput),
    Emi(EmiInput),
    CreditCardEmi(EmiInput),
    Ppf(PpfInput),
    Fd(FdInput),
    Rd(RdInput),
    SimpleInterest(SimpleInterestInput),
    Cagr(CagrInput),
}

impl CalculatorRequest {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculatorRequest::Sip(_) => CalculatorKind::Sip,
            CalculatorRequest::SbiSip(_) => CalculatorKind::SbiSip,
            CalculatorRequest::Swp(_) => CalculatorKind::Swp,
            CalculatorRequest::Fire(_) => CalculatorKind::Fire,
            CalculatorRequest::Emi(_) => CalculatorKind::Emi,
            CalculatorRequest::CreditCardEmi(_) => CalculatorKind::CreditCardEmi,
            CalculatorRequest::Ppf(_) => CalculatorKind::Ppf,
            CalculatorRequest::Fd(_) => CalculatorKind::Fd,
            CalculatorRequest::Rd(_) => CalculatorKind::Rd,
            CalculatorRequest::SimpleInterest(_) => CalculatorKind::SimpleInterest,
            CalculatorRequest::Cagr(_) => CalculatorKind::Cagr,
        }
    }

    /// The request a calculator screen opens with.
    pub fn with_defaults(kind: CalculatorKind) -> Self {
        match kind {
            CalculatorKind::Sip => CalculatorRequest::Sip(SipInput::default()),
            CalculatorKind::SbiSip => CalculatorRequest::SbiSip(SipInput::default()),
            CalculatorKind::Swp => CalculatorRequest::Swp(SwpInput::default()),
            CalculatorKind::Fire => CalculatorRequest::Fire(FireInput::default()),
            CalculatorKind::Emi => CalculatorRequest::Emi(EmiInput::default()),
            CalculatorKind::CreditCardEmi => {
                CalculatorRequest::CreditCardEmi(EmiInput::credit_card())
            }
            CalculatorKind::Ppf => CalculatorRequest::Ppf(PpfInput::default()),
            CalculatorKind::Fd => CalculatorRequest::Fd(FdInput::default()),
            CalculatorKind::Rd => CalculatorRequest::Rd(RdInput::default()),
            CalculatorKind::SimpleInterest => {
                CalculatorRequest::SimpleInterest(SimpleInterestInput::default())
            }
            CalculatorKind::Cagr => CalculatorRequest::Cagr(CagrInput::default()),
        }
    }
}

/// Run the requested calculator and return its output envelope as JSON.
pub fn run(request: &CalculatorRequest) -> EasyWealthResult<serde_json::Value> {
    debug!("dispatching {:?}", request.kind());
    let value = match request {
        CalculatorRequest::Sip(input) | CalculatorRequest::SbiSip(input) => {
            serde_json::to_value(calculate_sip(input)?)?
        }
        CalculatorRequest::Swp(input) => serde_json::to_value(calculate_swp(input)?)?,
        CalculatorRequest::Fire(input) => serde_json::to_value(calculate_fire(input)?)?,
        CalculatorRequest::Emi(input) | CalculatorRequest::CreditCardEmi(input) => {
            serde_json::to_value(calculate_emi(input)?)?
        }
        CalculatorRequest::Ppf(input) => serde_json::to_value(calculate_ppf(input)?)?,
        CalculatorRequest::Fd(input) => serde_json::to_value(calculate_fd(input)?)?,
        CalculatorRequest::Rd(input) => serde_json::to_value(calculate_rd(input)?)?,
        CalculatorRequest::SimpleInterest(input) => {
            serde_json::to_value(calculate_simple_interest(input)?)?
        }
        CalculatorRequest::Cagr(input) => serde_json::to_value(calculate_cagr(input)?)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn decimal_at(value: &serde_json::Value, field: &str) -> Decimal {
        value["result"][field].as_str().unwrap().parse().unwrap()
    }

    #[test]
    fn test_every_kind_runs_with_defaults() {
        for kind in CalculatorKind::ALL {
            let request = CalculatorRequest::with_defaults(kind);
            assert_eq!(request.kind(), kind);
            let value = run(&request).unwrap();
            assert!(value.get("result").is_some(), "{kind:?} produced no result");
        }
    }

    #[test]
    fn test_tagged_json_request() {
        let json = r#"{
            "calculator": "simple_interest",
            "principal": "50000",
            "annual_rate_percent": "10",
            "duration_years": "2"
        }"#;
        let request: CalculatorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind(), CalculatorKind::SimpleInterest);

        let value = run(&request).unwrap();
        assert_eq!(decimal_at(&value, "total"), dec!(60000));
    }

    #[test]
    fn test_request_accepts_numeric_decimals() {
        let json = r#"{"calculator": "fire", "monthly_expense": 50000, "safe_withdrawal_rate_percent": 4}"#;
        let request: CalculatorRequest = serde_json::from_str(json).unwrap();
        let value = run(&request).unwrap();
        assert_eq!(decimal_at(&value, "required_corpus"), dec!(15000000));
    }

    #[test]
    fn test_unknown_calculator_rejected() {
        let json = r#"{"calculator": "lottery"}"#;
        assert!(serde_json::from_str::<CalculatorRequest>(json).is_err());
    }
}
