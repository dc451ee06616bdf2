use easywealth_core::withdrawal::fire::{calculate_fire, FireInput};
use easywealth_core::withdrawal::swp::{calculate_swp, SwpInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// SWP tests
// ===========================================================================

#[test]
fn test_swp_snapshot_labels() {
    let out = calculate_swp(&SwpInput {
        duration_years: 3,
        ..SwpInput::default()
    })
    .unwrap();
    let labels: Vec<&str> = out.result.snapshots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Start", "Yr 1", "Yr 2", "Yr 3"]);
}

#[test]
fn test_swp_first_month_withdraws_before_growth() {
    // (120000 - 10000) * 1.01 after one month, then eleven more
    let out = calculate_swp(&SwpInput {
        initial_corpus: dec!(120000),
        monthly_withdrawal: dec!(10000),
        annual_rate_percent: dec!(12),
        duration_years: 1,
        annual_step_up_percent: Decimal::ZERO,
    })
    .unwrap();

    let mut expected = dec!(120000);
    for _ in 0..12 {
        if expected > Decimal::ZERO {
            expected = ((expected - dec!(10000)) * dec!(1.01)).max(Decimal::ZERO);
        }
    }
    assert_eq!(out.result.final_balance, expected);
}

#[test]
fn test_swp_heavy_withdrawal_depletes_and_stays_empty() {
    let out = calculate_swp(&SwpInput {
        initial_corpus: dec!(500000),
        monthly_withdrawal: dec!(50000),
        annual_rate_percent: dec!(8),
        duration_years: 5,
        annual_step_up_percent: Decimal::ZERO,
    })
    .unwrap();
    let r = &out.result;
    assert!(r.exhausted);
    let month = r.months_until_exhausted.unwrap();
    assert!(month > 10 && month <= 12, "exhausted in month {month}");
    assert_eq!(r.final_balance, Decimal::ZERO);
    // Eleven scheduled withdrawals, the last only partly covered
    assert_eq!(month, 11);
    assert_eq!(r.total_withdrawn, dec!(550000));
    assert!(r.total_paid_out < r.total_withdrawn);
    assert!(r.total_paid_out > dec!(515000));
    for snap in &r.snapshots[1..] {
        assert_eq!(snap.balance, Decimal::ZERO);
    }
}

#[test]
fn test_swp_withdrawn_total_monotonic() {
    let out = calculate_swp(&SwpInput {
        annual_step_up_percent: dec!(5),
        ..SwpInput::default()
    })
    .unwrap();
    let withdrawn: Vec<Decimal> = out
        .result
        .snapshots
        .iter()
        .map(|s| s.withdrawn.unwrap())
        .collect();
    assert!(withdrawn.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_swp_negative_withdrawal_rejected() {
    let err = calculate_swp(&SwpInput {
        monthly_withdrawal: dec!(-100),
        ..SwpInput::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("monthly_withdrawal"));
}

// ===========================================================================
// FIRE tests
// ===========================================================================

#[test]
fn test_fire_50k_at_four_percent() {
    let out = calculate_fire(&FireInput {
        monthly_expense: dec!(50000),
        safe_withdrawal_rate_percent: dec!(4),
        current_age: None,
        retirement_age: None,
    })
    .unwrap();
    assert_eq!(out.result.required_corpus, dec!(15000000));
}

#[test]
fn test_fire_lower_rate_needs_larger_corpus() {
    let four = calculate_fire(&FireInput::default()).unwrap();
    let three = calculate_fire(&FireInput {
        safe_withdrawal_rate_percent: dec!(3),
        ..FireInput::default()
    })
    .unwrap();
    assert!(three.result.required_corpus > four.result.required_corpus);
    assert!((three.result.required_corpus - dec!(20000000)).abs() < dec!(0.0001));
}
