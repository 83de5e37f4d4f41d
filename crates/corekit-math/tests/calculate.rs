//! End-to-end checks of the calculation facade across the supported kinds

use corekit_math::{calculate, calculate_list, Dynamic, Number, Operation, Summable};

#[test]
fn addition_over_a_list_sums() {
    assert_eq!(calculate_list(Operation::Addition, &[1, 2, 3, 4]), 10);
    assert_eq!(
        calculate_list(Operation::Addition, &[1i64 << 33, 1i64 << 33]),
        1i64 << 34
    );
    assert_eq!(calculate_list(Operation::Addition, &[0.5, 0.25]), 0.75);
}

#[test]
fn subtraction_over_a_list_averages() {
    // The list form of Subtraction is wired to the average.
    assert_eq!(calculate_list(Operation::Subtraction, &[2, 4, 6]), 4);
}

#[test]
fn average_of_a_pair_uses_integer_division() {
    assert_eq!(calculate(Operation::Average, 9, 2), 4);
    assert_eq!(calculate(Operation::Average, 9i64, 2i64), 4);
}

#[test]
fn percentage_is_unscaled_division() {
    assert_eq!(calculate(Operation::Percentage, 50.0, 200.0), 0.25);
}

#[test]
fn unwired_categories_yield_zero_for_every_kind() {
    for op in [
        Operation::Mean,
        Operation::Median,
        Operation::Mode,
        Operation::StandardDeviation,
        Operation::Sum,
    ] {
        assert_eq!(calculate(op, 7, 3), 0);
        assert_eq!(calculate(op, 7.0, 3.0), 0.0);
    }
    for op in [Operation::Division, Operation::Percentage, Operation::Sum] {
        assert_eq!(calculate_list(op, &[7, 3]), 0);
    }
}

#[test]
#[should_panic]
fn integer_division_by_zero_is_fatal() {
    let _ = calculate(Operation::Division, 10, 0);
}

#[test]
fn float_division_by_zero_is_infinite() {
    assert_eq!(calculate(Operation::Division, 10.0, 0.0), f64::INFINITY);
}

#[test]
fn dynamic_goes_through_the_float_path() {
    let q = calculate(Operation::Division, Dynamic::Int(7), Dynamic::Int(2));
    assert_eq!(q, Dynamic::Float(3.5));

    let total = calculate_list(
        Operation::Addition,
        &[Dynamic::Int(1), Dynamic::Float(2.5), Dynamic::Int(3)],
    );
    assert_eq!(total, Dynamic::Float(6.5));
}

#[test]
fn aggregation_matches_the_manual_fold() {
    let data = [3, 1, 4, 1, 5, 9, 2, 6];
    let values = Summable::from(&data[..]);
    let folded = data.iter().fold(0, |acc, &x| acc + x);
    assert_eq!(values.sum(), folded);
    assert_eq!(values.average(), folded / data.len() as i32);
}

#[test]
fn operators_and_facade_agree() {
    let by_operator = (Number::new(9) / 2).get();
    let by_facade = calculate(Operation::Average, 9, 2);
    assert_eq!(by_operator, by_facade);
}

#[test]
fn repeated_use_of_a_kind_is_stable() {
    // Same kind, many call sites: results must be identical every time.
    for _ in 0..3 {
        assert_eq!(calculate(Operation::Multiplication, 6, 7), 42);
        assert_eq!(calculate(Operation::Multiplication, 6.0, 7.0), 42.0);
    }
}
