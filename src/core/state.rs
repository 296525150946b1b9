//! # Application State
//!
//! Core business state for Kalkulator. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tab: Tab                  // selected screen
//! ├── calculator: Calculator    // operand, accumulator, history
//! ├── converter: Converter      // category, input, units, result
//! └── status_message: String    // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Each screen's state machine is owned here and nowhere else.

use crate::Tab;
use crate::core::calculator::Calculator;
use crate::core::config::ResolvedConfig;
use crate::core::converter::Converter;

#[derive(Debug, Clone)]
pub struct App {
    pub tab: Tab,
    pub calculator: Calculator,
    pub converter: Converter,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::default(),
            calculator: Calculator::new(),
            converter: Converter::new(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            tab: config.tab,
            calculator: Calculator::with_history_limit(config.history_limit),
            converter: Converter::with_category(config.category),
            status_message: String::new(),
        }
    }
}
