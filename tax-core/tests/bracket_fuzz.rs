//! Property-based fuzzing of the bracket calculation.
//!
//! Every amount is checked against an independent chain of comparisons, so a
//! regression in the table or in either lookup strategy shows up as a fifth
//! outcome or a misplaced boundary.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tax_core::{BracketSchedule, calculate_tax, calculate_tax_2};

/// Seed corpus: negatives, zero, each bracket, both thresholds and the
/// largest finite amount.
const SEEDS: [f64; 11] = [
    -10.0,
    -5.0,
    -1.0,
    0.0,
    500.0,
    1000.0,
    1500.0,
    19999.99,
    20000.0,
    25000.0,
    f64::MAX,
];

fn expected_tax(amount: f64) -> f64 {
    if amount <= 0.0 {
        0.0
    } else if amount >= 20000.0 {
        20.0
    } else if amount >= 1000.0 {
        10.0
    } else {
        5.0
    }
}

#[test]
fn seeds_follow_bracket_table() {
    for amount in SEEDS {
        assert_eq!(calculate_tax(amount), expected_tax(amount), "amount {amount}");
        assert_eq!(calculate_tax_2(amount), expected_tax(amount), "amount {amount}");
    }
}

#[test]
fn nan_owes_nothing_in_every_entry_point() {
    assert_eq!(calculate_tax(f64::NAN), 0.0);
    assert_eq!(calculate_tax_2(f64::NAN), 0.0);
    assert_eq!(BracketSchedule::standard().tax_for(f64::NAN), 0.0);
    assert_eq!(BracketSchedule::standard().tax_for_indexed(f64::NAN), 0.0);
}

#[test]
fn concurrent_callers_agree() {
    let expected: Vec<f64> = SEEDS.iter().map(|&amount| calculate_tax(amount)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| SEEDS.iter().map(|&a| calculate_tax(a)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            let results = handle.join().expect("worker thread panicked");
            assert_eq!(results, expected);
        }
    });
}

fn non_nan_amount() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("NaN is covered separately", |amount| !amount.is_nan())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn any_amount_follows_bracket_table(amount in non_nan_amount()) {
        let result = calculate_tax(amount);

        prop_assert_eq!(result, expected_tax(amount), "amount {}", amount);
    }

    #[test]
    fn result_is_one_of_four_outcomes(amount in any::<f64>()) {
        let result = calculate_tax(amount);

        prop_assert!(
            [0.0, 5.0, 10.0, 20.0].contains(&result),
            "amount {} produced {}", amount, result
        );
    }

    #[test]
    fn strategies_agree(amount in any::<f64>()) {
        prop_assert_eq!(calculate_tax_2(amount), calculate_tax(amount));
    }

    #[test]
    fn standard_schedule_agrees(amount in any::<f64>()) {
        let schedule = BracketSchedule::standard();

        prop_assert_eq!(schedule.tax_for(amount), calculate_tax(amount));
        prop_assert_eq!(schedule.tax_for_indexed(amount), calculate_tax(amount));
    }

    #[test]
    fn non_positive_amounts_owe_nothing(amount in -1e300f64..=0.0) {
        prop_assert_eq!(calculate_tax(amount), 0.0);
    }

    #[test]
    fn base_bracket(amount in f64::MIN_POSITIVE..1000.0) {
        prop_assert_eq!(calculate_tax(amount), 5.0);
    }

    #[test]
    fn middle_bracket(amount in 1000.0f64..20000.0) {
        prop_assert_eq!(calculate_tax(amount), 10.0);
    }

    #[test]
    fn top_bracket(amount in 20000.0f64..1e300) {
        prop_assert_eq!(calculate_tax(amount), 20.0);
    }

    #[test]
    fn deterministic(amount in any::<f64>()) {
        let first = calculate_tax(amount);
        let second = calculate_tax(amount);

        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
