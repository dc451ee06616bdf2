use napi::Result as NapiResult;
use napi_derive::napi;
use serde::de::DeserializeOwned;
use serde::Serialize;

use easywealth_core::catalog::{self, CalculatorKind};
use easywealth_core::dispatch::{self, CalculatorRequest};
use easywealth_core::EasyWealthResult;
use easywealth_core::{accumulation, interest, lending, withdrawal};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse the JSON input, run the calculator, and serialise its output envelope.
fn call_json<I, O>(
    input_json: &str,
    calculate: impl FnOnce(&I) -> EasyWealthResult<O>,
) -> NapiResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = serde_json::from_str(input_json).map_err(to_napi_error)?;
    let output = calculate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

fn parse_kind(kind: &str) -> NapiResult<CalculatorKind> {
    serde_json::from_value(serde_json::Value::String(kind.to_string()))
        .map_err(|_| to_napi_error(format!("unknown calculator '{}'", kind)))
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    call_json(&input_json, accumulation::sip::calculate_sip)
}

#[napi]
pub fn calculate_sbi_sip(input_json: String) -> NapiResult<String> {
    call_json(&input_json, accumulation::sip::calculate_sip)
}

#[napi]
pub fn calculate_ppf(input_json: String) -> NapiResult<String> {
    call_json(&input_json, accumulation::ppf::calculate_ppf)
}

#[napi]
pub fn calculate_rd(input_json: String) -> NapiResult<String> {
    call_json(&input_json, accumulation::rd::calculate_rd)
}

// ---------------------------------------------------------------------------
// Withdrawal
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_swp(input_json: String) -> NapiResult<String> {
    call_json(&input_json, withdrawal::swp::calculate_swp)
}

#[napi]
pub fn calculate_fire(input_json: String) -> NapiResult<String> {
    call_json(&input_json, withdrawal::fire::calculate_fire)
}

// ---------------------------------------------------------------------------
// Lending
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    call_json(&input_json, lending::emi::calculate_emi)
}

#[napi]
pub fn calculate_credit_card_emi(input_json: String) -> NapiResult<String> {
    call_json(&input_json, lending::emi::calculate_emi)
}

// ---------------------------------------------------------------------------
// Interest
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_fd(input_json: String) -> NapiResult<String> {
    call_json(&input_json, interest::fd::calculate_fd)
}

#[napi]
pub fn calculate_simple_interest(input_json: String) -> NapiResult<String> {
    call_json(&input_json, interest::simple::calculate_simple_interest)
}

#[napi]
pub fn calculate_cagr(input_json: String) -> NapiResult<String> {
    call_json(&input_json, interest::cagr::calculate_cagr)
}

// ---------------------------------------------------------------------------
// Catalog & dispatch
// ---------------------------------------------------------------------------

/// Run a request tagged with `"calculator"`.
#[napi]
pub fn run_calculator(request_json: String) -> NapiResult<String> {
    let request: CalculatorRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let output = dispatch::run(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// The tagged request a calculator screen opens with, e.g. `default_request("swp")`.
#[napi]
pub fn default_request(kind: String) -> NapiResult<String> {
    let request = CalculatorRequest::with_defaults(parse_kind(&kind)?);
    serde_json::to_string(&request).map_err(to_napi_error)
}

#[napi]
pub fn list_calculators() -> NapiResult<String> {
    serde_json::to_string(&catalog::catalog()).map_err(to_napi_error)
}
