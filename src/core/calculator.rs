//! # Calculator
//!
//! A single pending-operation evaluator, the way a pocket calculator works:
//!
//! ```text
//! accumulator ── pending operator ── operand (what the display shows)
//!     2               +                 3        → "=" → 5
//! ```
//!
//! There is no expression tree. Pressing an operator resolves whatever is
//! pending against the operand, keeps the result in the accumulator and waits
//! for the next operand. Pressing equals resolves and records a history line.
//!
//! A failed resolution (division by zero) sets an error and changes nothing
//! else. Until AC is pressed, every other key is ignored.

use std::collections::VecDeque;

use log::{debug, warn};
use thiserror::Error;

use crate::core::format::format_number;

/// Upper bound on history entries kept in memory.
pub const MAX_HISTORY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// Symbol shown on the keypad and in history entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Percent => "%",
        }
    }

    /// Maps a typed character onto an operator. Accepts both the ASCII
    /// spellings and the keypad symbols.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '%' => Some(Operator::Percent),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
            // Percent never stays pending; it acts on the operand immediately.
            Operator::Percent => rhs,
        };
        finite(result)
    }
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::OutOfRange)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by 0")]
    DivideByZero,
    #[error("Result out of range")]
    OutOfRange,
}

/// What the calculator screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// The operand being typed, or the last result. Always a numeric literal.
    pub display: String,
    pub error: Option<CalcError>,
    /// Most recent first.
    pub history: VecDeque<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: String::from("0"),
            error: None,
            history: VecDeque::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    /// Set by equals: the next digit starts a new number.
    just_evaluated: bool,
    /// Set by an operator press until the next digit or dot arrives.
    awaiting_operand: bool,
    history_limit: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history_limit(MAX_HISTORY)
    }

    /// Creates a calculator keeping at most `limit` history entries
    /// (clamped to `1..=MAX_HISTORY`).
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            state: CalculatorState::default(),
            accumulator: None,
            pending: None,
            just_evaluated: false,
            awaiting_operand: false,
            history_limit: limit.clamp(1, MAX_HISTORY),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn error(&self) -> Option<CalcError> {
        self.state.error
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.state.history
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// The left-hand side waiting for an operand, e.g. `"12 ×"`.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => Some(format!("{} {}", format_number(lhs), op.symbol())),
            _ => None,
        }
    }

    pub fn digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || self.is_locked() {
            return;
        }
        if self.just_evaluated {
            self.start_fresh();
        }
        self.awaiting_operand = false;
        if self.state.display == "0" {
            self.state.display = digit.to_string();
        } else {
            self.state.display.push(digit);
        }
    }

    pub fn dot(&mut self) {
        if self.is_locked() {
            return;
        }
        if self.just_evaluated {
            self.start_fresh();
        }
        self.awaiting_operand = false;
        if !self.state.display.contains('.') {
            self.state.display.push('.');
        }
    }

    pub fn operator(&mut self, op: Operator) {
        if self.is_locked() {
            return;
        }
        if op == Operator::Percent {
            self.apply_percent();
            return;
        }
        // Two operators in a row: the second one replaces the first.
        if self.awaiting_operand && self.pending.is_some() {
            debug!("Replacing pending operator with {:?}", op);
            self.pending = Some(op);
            return;
        }
        match self.resolve() {
            Ok(value) => {
                self.accumulator = Some(value);
                self.pending = Some(op);
                self.state.display = String::from("0");
                self.just_evaluated = false;
                self.awaiting_operand = true;
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn equals(&mut self) {
        if self.is_locked() {
            return;
        }
        let lhs = self.accumulator;
        let op = self.pending;
        let rhs = self.operand_value();

        match self.resolve() {
            Ok(result) => {
                let shown = format_number(result);
                if let (Some(lhs), Some(op)) = (lhs, op) {
                    let entry = format!(
                        "{} {} {} = {}",
                        format_number(lhs),
                        op.symbol(),
                        format_number(rhs),
                        shown
                    );
                    self.record(entry);
                }
                self.accumulator = Some(result);
                self.pending = None;
                self.state.display = shown;
                self.just_evaluated = true;
                self.awaiting_operand = false;
            }
            Err(e) => self.fail(e),
        }
    }

    /// AC: resets the numbers and the error. History is kept.
    pub fn clear(&mut self) {
        self.start_fresh();
        self.state.error = None;
    }

    pub fn backspace(&mut self) {
        if self.is_locked() || self.just_evaluated {
            return;
        }
        let display = &mut self.state.display;
        display.pop();
        if display.is_empty() || display == "-" {
            *display = String::from("0");
        }
    }

    pub fn clear_history(&mut self) {
        self.state.history.clear();
    }

    fn is_locked(&self) -> bool {
        self.state.error.is_some()
    }

    fn start_fresh(&mut self) {
        self.state.display = String::from("0");
        self.accumulator = None;
        self.pending = None;
        self.just_evaluated = false;
        self.awaiting_operand = false;
    }

    fn apply_percent(&mut self) {
        match finite(self.operand_value() / 100.0) {
            Ok(value) => {
                self.state.display = format_number(value);
                self.awaiting_operand = false;
            }
            Err(e) => self.fail(e),
        }
    }

    fn operand_value(&self) -> f64 {
        match self.state.display.parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                warn!("Display {:?} is not numeric: {}", self.state.display, e);
                0.0
            }
        }
    }

    /// Resolves the pending operation against the operand without committing.
    fn resolve(&self) -> Result<f64, CalcError> {
        let rhs = self.operand_value();
        match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => op.apply(lhs, rhs),
            // A typed operand too long for f64 parses to infinity
            _ => finite(rhs),
        }
    }

    fn fail(&mut self, error: CalcError) {
        warn!("Calculation failed: {}", error);
        self.state.error = Some(error);
    }

    fn record(&mut self, entry: String) {
        debug!("History: {}", entry);
        self.state.history.push_front(entry);
        self.state.history.truncate(self.history_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            match key {
                '0'..='9' => calc.digit(key),
                '.' => calc.dot(),
                '=' => calc.equals(),
                'C' => calc.clear(),
                '<' => calc.backspace(),
                other => calc.operator(Operator::from_char(other).expect("operator key")),
            }
        }
    }

    #[test]
    fn test_new_calculator_shows_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert!(calc.error().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_digits_concatenate_without_leading_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, "0071");
        assert_eq!(calc.display(), "71");
    }

    #[test]
    fn test_non_digit_is_ignored() {
        let mut calc = Calculator::new();
        calc.digit('a');
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_addition_records_history() {
        let mut calc = Calculator::new();
        press(&mut calc, "2+3=");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history().front().map(String::as_str), Some("2 + 3 = 5"));
    }

    #[test]
    fn test_operator_chain_resolves_left_to_right() {
        let mut calc = Calculator::new();
        press(&mut calc, "2+3*4=");
        assert_eq!(calc.display(), "20");
        assert_eq!(calc.history().front().map(String::as_str), Some("5 × 4 = 20"));
    }

    #[test]
    fn test_operator_reset_shows_zero_and_pending_expression() {
        let mut calc = Calculator::new();
        press(&mut calc, "12*");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_expression().as_deref(), Some("12 ×"));
    }

    #[test]
    fn test_second_operator_replaces_first() {
        let mut calc = Calculator::new();
        press(&mut calc, "6*/2=");
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_divide_by_zero_keeps_accumulator() {
        let mut calc = Calculator::new();
        press(&mut calc, "5/0=");
        assert_eq!(calc.error(), Some(CalcError::DivideByZero));
        assert_eq!(calc.error().map(|e| e.to_string()).as_deref(), Some("Cannot divide by 0"));
        assert_eq!(calc.accumulator(), Some(5.0));
        assert_eq!(calc.pending(), Some(Operator::Divide));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_error_locks_input_until_clear() {
        let mut calc = Calculator::new();
        press(&mut calc, "5/0=");
        press(&mut calc, "7+");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), Some(5.0));

        calc.clear();
        assert!(calc.error().is_none());
        press(&mut calc, "7");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh_number() {
        let mut calc = Calculator::new();
        press(&mut calc, "2+3=4");
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.accumulator(), None);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        let mut calc = Calculator::new();
        press(&mut calc, "2+3=*2=");
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.history().front().map(String::as_str), Some("5 × 2 = 10"));
    }

    #[test]
    fn test_equals_without_pending_records_nothing() {
        let mut calc = Calculator::new();
        press(&mut calc, "42=");
        assert_eq!(calc.display(), "42");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_percent_divides_operand() {
        let mut calc = Calculator::new();
        press(&mut calc, "50%");
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_dot_only_once() {
        let mut calc = Calculator::new();
        press(&mut calc, "1.2.5");
        assert_eq!(calc.display(), "1.25");
    }

    #[test]
    fn test_dot_on_zero_keeps_leading_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, ".5");
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_fractional_result_format() {
        let mut calc = Calculator::new();
        press(&mut calc, "7/2=");
        assert_eq!(calc.display(), "3.5");
        press(&mut calc, "*2=");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_backspace_drops_last_char() {
        let mut calc = Calculator::new();
        press(&mut calc, "123<");
        assert_eq!(calc.display(), "12");
        press(&mut calc, "<<<");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_on_negative_result_digit() {
        let mut calc = Calculator::new();
        press(&mut calc, "2-7=");
        assert_eq!(calc.display(), "-5");
        // Right after equals, backspace does nothing.
        press(&mut calc, "<");
        assert_eq!(calc.display(), "-5");
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut calc = Calculator::new();
        press(&mut calc, "1+1=C");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history().len(), 1);
        calc.clear_history();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_history_is_capped_and_drops_oldest() {
        let mut calc = Calculator::new();
        for i in 0..25 {
            calc.clear();
            calc.digit(char::from(b'0' + (i % 10) as u8));
            calc.operator(Operator::Add);
            calc.digit('1');
            calc.equals();
        }
        assert_eq!(calc.history().len(), MAX_HISTORY);
        // Most recent is i = 24 → "4 + 1 = 5"
        assert_eq!(calc.history().front().map(String::as_str), Some("4 + 1 = 5"));
        // Oldest surviving is i = 5 → "5 + 1 = 6"
        assert_eq!(calc.history().back().map(String::as_str), Some("5 + 1 = 6"));
    }

    #[test]
    fn test_history_limit_is_clamped() {
        assert_eq!(Calculator::with_history_limit(0).history_limit(), 1);
        assert_eq!(Calculator::with_history_limit(500).history_limit(), MAX_HISTORY);
        assert_eq!(Calculator::with_history_limit(5).history_limit(), 5);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut calc = Calculator::new();
        calc.state.display = String::from("1e308");
        calc.operator(Operator::Multiply);
        press(&mut calc, "10=");
        assert_eq!(calc.error(), Some(CalcError::OutOfRange));
    }

    fn huge_operand() -> Calculator {
        let mut calc = Calculator::new();
        press(&mut calc, &format!("1{}", "0".repeat(400)));
        assert!(calc.error().is_none());
        calc
    }

    #[test]
    fn test_huge_operand_equals_is_out_of_range() {
        let mut calc = huge_operand();
        press(&mut calc, "=");
        assert_eq!(calc.error(), Some(CalcError::OutOfRange));
        assert_ne!(calc.display(), "inf");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_huge_operand_operator_keeps_accumulator_empty() {
        let mut calc = huge_operand();
        press(&mut calc, "+");
        assert_eq!(calc.error(), Some(CalcError::OutOfRange));
        assert_eq!(calc.accumulator(), None);
        assert_eq!(calc.pending_expression(), None);
    }

    #[test]
    fn test_huge_operand_percent_locks_input() {
        let mut calc = huge_operand();
        press(&mut calc, "%7");
        assert_eq!(calc.error(), Some(CalcError::OutOfRange));
        assert!(calc.display().parse::<f64>().is_ok());
        assert!(!calc.display().ends_with('7'));

        press(&mut calc, "C7");
        assert_eq!(calc.display(), "7");
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_operator_from_char() {
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('%'), Some(Operator::Percent));
        assert_eq!(Operator::from_char('q'), None);
    }
}
