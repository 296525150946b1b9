//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: bottom navigation between the two screens
//! - `Keypad`: the calculator's button grid
//! - `CalculatorView`: header, display and keypad
//! - `ConverterView`: category tabs, input, unit fields and result card
//!
//! ### Stateful Overlays (Event-Driven)
//!
//! Overlays keep a small persistent state in `TuiState` while open and emit
//! events back to the adapter:
//! - `HistoryListState` / `HistoryList`: past calculations
//! - `UnitPickerState` / `UnitPicker`: From / To unit dropdown
//!
//! ### Hit Testing
//!
//! Every clickable component implements `HitTest` by splitting its area the
//! same way `render` does, so a mouse click resolves to the same target a key
//! press would.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── nav_bar.rs          (Calculator / Converter tabs)
//! ├── keypad.rs           (button grid)
//! ├── calculator_view.rs  (calculator screen)
//! ├── converter_view.rs   (converter screen)
//! ├── history_list.rs     (history overlay)
//! └── unit_picker.rs      (unit dropdown)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod calculator_view;
pub mod converter_view;
pub mod history_list;
pub mod keypad;
pub mod nav_bar;
pub mod unit_picker;

pub use calculator_view::{CalculatorTarget, CalculatorView};
pub use converter_view::{ConverterField, ConverterTarget, ConverterView};
pub use history_list::{HistoryEvent, HistoryList, HistoryListState};
pub use keypad::Keypad;
pub use nav_bar::NavBar;
pub use unit_picker::{UnitPicker, UnitPickerEvent, UnitPickerState};

/// A `width` x `height` rectangle centered in `outer`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
