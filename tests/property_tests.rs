//! Property-based tests using proptest.
//!
//! Invariants of the calculator and converter that should hold for any
//! sequence of key presses.

use kalkulator::core::calculator::{CalcError, Calculator, MAX_HISTORY, Operator};
use kalkulator::core::converter::{Category, Converter, Unit, convert};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

proptest! {
    // ========================================================================
    // Calculator
    // ========================================================================

    /// The display is the typed digits without redundant leading zeros
    #[test]
    fn digits_concatenate(digits in "[0-9]{0,30}") {
        let mut calc = Calculator::new();
        for d in digits.chars() {
            calc.digit(d);
        }
        let trimmed = digits.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.display(), expected);
    }

    /// History never exceeds the cap and always keeps the newest entries
    #[test]
    fn history_is_capped(n in 0usize..60) {
        let mut calc = Calculator::new();
        for i in 0..n {
            for d in i.to_string().chars() {
                calc.digit(d);
            }
            calc.operator(Operator::Add);
            calc.digit('1');
            calc.equals();
            calc.clear();
        }
        prop_assert_eq!(calc.history().len(), n.min(MAX_HISTORY));
        if n > 0 {
            let newest = format!("{} + 1 = {}", n - 1, n);
            prop_assert_eq!(calc.history().front(), Some(&newest));
        }
        if n > MAX_HISTORY {
            let oldest = format!("{} + 1 = {}", n - MAX_HISTORY, n - MAX_HISTORY + 1);
            prop_assert_eq!(calc.history().back(), Some(&oldest));
        }
    }

    /// Dividing by zero reports an error and leaves the numbers untouched
    #[test]
    fn divide_by_zero_changes_nothing(lhs in 1u32..100_000) {
        let mut calc = Calculator::new();
        for d in lhs.to_string().chars() {
            calc.digit(d);
        }
        calc.operator(Operator::Divide);
        calc.digit('0');
        calc.equals();

        prop_assert_eq!(calc.error(), Some(CalcError::DivideByZero));
        prop_assert_eq!(calc.accumulator(), Some(f64::from(lhs)));
        prop_assert!(calc.history().is_empty());

        // Locked until AC
        calc.digit('7');
        prop_assert_eq!(calc.display(), "0");
    }

    /// Any mix of operators keeps the display a parseable number or an error
    #[test]
    fn display_stays_numeric(
        steps in prop::collection::vec((0u32..1000, operator()), 1..12)
    ) {
        let mut calc = Calculator::new();
        for (operand, op) in steps {
            for d in operand.to_string().chars() {
                calc.digit(d);
            }
            calc.operator(op);
        }
        calc.digit('3');
        calc.equals();
        if calc.error().is_none() {
            prop_assert!(calc.display().parse::<f64>().is_ok(), "display {:?}", calc.display());
        }
    }

    // ========================================================================
    // Converter
    // ========================================================================

    /// Input keeps only digits and dots, whatever was typed
    #[test]
    fn input_is_sanitized(text in "\\PC{0,20}") {
        let mut converter = Converter::with_category(Category::Weight);
        converter.set_input(&text);
        let state = converter.state();
        prop_assert!(state.input.chars().all(|c| c.is_ascii_digit() || c == '.'));
        if !state.result.is_empty() {
            prop_assert!(state.result.parse::<f64>().is_ok_and(f64::is_finite));
        }
    }

    /// Results are finite numbers or empty, however long the input
    #[test]
    fn result_is_never_infinite(
        digits in "[1-9][0-9]{290,420}",
        category in prop_oneof![Just(Category::Length), Just(Category::Weight)],
        swap: bool,
    ) {
        let mut converter = Converter::with_category(category);
        if swap {
            converter.swap_units();
        }
        converter.set_input(&digits);
        let result = &converter.state().result;
        prop_assert!(
            result.is_empty() || result.parse::<f64>().is_ok_and(f64::is_finite),
            "result {:?}", result
        );
    }

    /// Converting there and back lands close to the starting value
    #[test]
    fn temperature_round_trip(value in -1000.0f64..1000.0) {
        let there = convert(value, Unit::Celsius, Unit::Fahrenheit).unwrap();
        let back = convert(there, Unit::Fahrenheit, Unit::Celsius).unwrap();
        prop_assert!((back - value).abs() < 1e-9);
    }

    /// Units from another category are rejected and leave the state alone
    #[test]
    fn foreign_units_are_rejected(index in 0usize..3) {
        let mut converter = Converter::with_category(Category::Length);
        let foreign = Category::Temperature.units().get(index).copied().unwrap_or(Unit::Celsius);
        let before = converter.state().clone();
        prop_assert!(converter.set_from(foreign).is_err());
        prop_assert!(converter.set_to(foreign).is_err());
        prop_assert_eq!(converter.state(), &before);
    }
}
