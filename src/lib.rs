//! Kalkulator library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Calculator,
    Converter,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Calculator, Tab::Converter];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Calculator => "Calculator",
            Tab::Converter => "Converter",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Calculator => Tab::Converter,
            Tab::Converter => Tab::Calculator,
        }
    }
}
