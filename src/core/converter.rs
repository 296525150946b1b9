//! # Unit Converter
//!
//! Three fixed categories. Temperature converts with the two C↔F formulas;
//! length and weight go through a base unit (meters, grams).
//!
//! ```text
//! Category      Units            Base
//! temperature   °C  °F           -
//! length        cm  m   km       m
//! weight        g   kg  ton      g
//! ```
//!
//! `Converter` recomputes the result on every field change. Input that does
//! not parse as a number yields an empty result, never an error.

use std::fmt;

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::format::format_number;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Temperature,
    Length,
    Weight,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Length, Category::Weight];

    pub fn label(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Weight => "Weight",
        }
    }

    /// Units in display order. The first is the default source, the last the
    /// default target.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Temperature => &[Unit::Celsius, Unit::Fahrenheit],
            Category::Length => &[Unit::Centimeter, Unit::Meter, Unit::Kilometer],
            Category::Weight => &[Unit::Gram, Unit::Kilogram, Unit::Ton],
        }
    }

    fn default_units(self) -> (Unit, Unit) {
        let units = self.units();
        (units[0], units[units.len() - 1])
    }

    pub fn next(self) -> Self {
        match self {
            Category::Temperature => Category::Length,
            Category::Length => Category::Weight,
            Category::Weight => Category::Temperature,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Category::Temperature => Category::Weight,
            Category::Length => Category::Temperature,
            Category::Weight => Category::Length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Centimeter,
    Meter,
    Kilometer,
    Gram,
    Kilogram,
    Ton,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ton => "ton",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Unit::Celsius | Unit::Fahrenheit => Category::Temperature,
            Unit::Centimeter | Unit::Meter | Unit::Kilometer => Category::Length,
            Unit::Gram | Unit::Kilogram | Unit::Ton => Category::Weight,
        }
    }

    /// Value expressed in the category's base unit (meters or grams).
    fn scale_to_base(self, value: f64) -> f64 {
        match self {
            Unit::Centimeter => value / 100.0,
            Unit::Kilometer | Unit::Kilogram => value * 1000.0,
            Unit::Ton => value * 1_000_000.0,
            Unit::Meter | Unit::Gram | Unit::Celsius | Unit::Fahrenheit => value,
        }
    }

    fn scale_from_base(self, base: f64) -> f64 {
        match self {
            Unit::Centimeter => base * 100.0,
            Unit::Kilometer | Unit::Kilogram => base / 1000.0,
            Unit::Ton => base / 1_000_000.0,
            Unit::Meter | Unit::Gram | Unit::Celsius | Unit::Fahrenheit => base,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} to {to}: different categories")]
    CategoryMismatch { from: Unit, to: Unit },
    #[error("{unit} is not a {} unit", category.label())]
    UnitNotInCategory { unit: Unit, category: Category },
}

/// Converts `value` from one unit to another of the same category.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if from.category() != to.category() {
        return Err(ConversionError::CategoryMismatch { from, to });
    }
    if from == to {
        return Ok(value);
    }
    let converted = match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => to.scale_from_base(from.scale_to_base(value)),
    };
    Ok(converted)
}

/// Converts raw input text and formats the result. Returns an empty string
/// when the input is not a number or the units don't belong to `category`.
pub fn compute(input: &str, from: Unit, to: Unit, category: Category) -> String {
    let Ok(value) = input.trim().parse::<f64>() else {
        return String::new();
    };
    if !value.is_finite() {
        debug!("Input {:?} is out of range", input);
        return String::new();
    }
    if from.category() != category || to.category() != category {
        warn!("Units {} → {} outside category {}", from, to, category.label());
        return String::new();
    }
    match convert(value, from, to) {
        Ok(result) if result.is_finite() => format_number(result),
        Ok(_) => {
            debug!("Converting {} {} → {} is out of range", value, from, to);
            String::new()
        }
        Err(e) => {
            warn!("Conversion failed: {}", e);
            String::new()
        }
    }
}

/// What the converter screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub category: Category,
    pub input: String,
    pub from: Unit,
    pub to: Unit,
    pub result: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        let category = Category::default();
        let (from, to) = category.default_units();
        Self {
            category,
            input: String::new(),
            from,
            to,
            result: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    state: ConverterState,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(category: Category) -> Self {
        let mut converter = Self::new();
        converter.set_category(category);
        converter
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    pub fn available_units(&self) -> &'static [Unit] {
        self.state.category.units()
    }

    /// Switches category and resets the units to its defaults.
    pub fn set_category(&mut self, category: Category) {
        let (from, to) = category.default_units();
        self.state.category = category;
        self.state.from = from;
        self.state.to = to;
        self.recompute();
    }

    /// Replaces the input, keeping only digits and dots.
    pub fn set_input(&mut self, input: &str) {
        self.state.input = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        self.recompute();
    }

    /// Appends a typed character. Anything but a digit or dot is dropped.
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.') {
            return false;
        }
        self.state.input.push(c);
        self.recompute();
        true
    }

    pub fn backspace(&mut self) {
        if self.state.input.pop().is_some() {
            self.recompute();
        }
    }

    pub fn set_from(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.check_unit(unit)?;
        self.state.from = unit;
        self.recompute();
        Ok(())
    }

    pub fn set_to(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.check_unit(unit)?;
        self.state.to = unit;
        self.recompute();
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.state.from, &mut self.state.to);
        self.recompute();
    }

    fn check_unit(&self, unit: Unit) -> Result<(), ConversionError> {
        let category = self.state.category;
        if unit.category() == category {
            Ok(())
        } else {
            Err(ConversionError::UnitNotInCategory { unit, category })
        }
    }

    fn recompute(&mut self) {
        let s = &self.state;
        self.state.result = compute(&s.input, s.from, s.to, s.category);
        debug!(
            "Converted {:?} {} → {:?} {}",
            self.state.input, self.state.from, self.state.result, self.state.to
        );
    }
}
