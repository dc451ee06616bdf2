use easywealth_core::interest::cagr::{calculate_cagr, CagrInput};
use easywealth_core::interest::fd::{calculate_fd, FdInput};
use easywealth_core::interest::simple::{calculate_simple_interest, SimpleInterestInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixed deposit
// ===========================================================================

#[test]
fn test_fd_100k_at_6_5_for_5_years() {
    let out = calculate_fd(&FdInput {
        principal: dec!(100000),
        annual_rate_percent: dec!(6.5),
        duration_years: 5,
    })
    .unwrap();
    // 100000 * 1.065^5 = 137008.666341...
    assert!((out.result.maturity_value - dec!(137008.6663)).abs() < dec!(0.001));
}

#[test]
fn test_fd_beats_simple_interest_over_multiple_years() {
    let fd = calculate_fd(&FdInput::default()).unwrap();
    let si = calculate_simple_interest(&SimpleInterestInput {
        principal: dec!(100000),
        annual_rate_percent: dec!(6.5),
        duration_years: dec!(5),
    })
    .unwrap();
    assert!(fd.result.interest > si.result.interest);
}

#[test]
fn test_fd_one_year_equals_simple_interest() {
    let fd = calculate_fd(&FdInput {
        duration_years: 1,
        ..FdInput::default()
    })
    .unwrap();
    let si = calculate_simple_interest(&SimpleInterestInput {
        principal: dec!(100000),
        annual_rate_percent: dec!(6.5),
        duration_years: dec!(1),
    })
    .unwrap();
    assert_eq!(fd.result.interest, si.result.interest);
}

// ===========================================================================
// Simple interest
// ===========================================================================

#[test]
fn test_simple_interest_50k_at_10_for_2_years() {
    let out = calculate_simple_interest(&SimpleInterestInput {
        principal: dec!(50000),
        annual_rate_percent: dec!(10),
        duration_years: dec!(2),
    })
    .unwrap();
    assert_eq!(out.result.interest, dec!(10000));
    assert_eq!(out.result.total, dec!(60000));
}

// ===========================================================================
// CAGR
// ===========================================================================

#[test]
fn test_cagr_round_trips_through_fd() {
    // Growing at the CAGR for the same years reproduces the end value
    let cagr = calculate_cagr(&CagrInput {
        start_value: dec!(100000),
        end_value: dec!(137008.67),
        years: dec!(5),
    })
    .unwrap();
    assert!(
        (cagr.result.cagr_percent - dec!(6.5)).abs() < dec!(0.001),
        "got {}",
        cagr.result.cagr_percent
    );
}

#[test]
fn test_cagr_negative_growth() {
    let out = calculate_cagr(&CagrInput {
        start_value: dec!(20000),
        end_value: dec!(10000),
        years: dec!(5),
    })
    .unwrap();
    // 0.5^(1/5) - 1 ≈ -12.945%
    assert!((out.result.cagr_percent - dec!(-12.945)).abs() < dec!(0.001));
}

#[test]
fn test_cagr_negative_years_guarded() {
    let out = calculate_cagr(&CagrInput {
        years: dec!(-3),
        ..CagrInput::default()
    })
    .unwrap();
    assert_eq!(out.result.cagr_percent, Decimal::ZERO);
    assert!(!out.warnings.is_empty());
}
