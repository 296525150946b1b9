//! # Actions
//!
//! Everything that can happen in Kalkulator becomes an `Action`.
//! User presses `7`? That's `Action::Digit('7')`.
//! User picks km as the source unit? That's `Action::SelectFromUnit(Unit::Kilometer)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply a list of actions, assert on `App`.

use log::{debug, info, warn};

use crate::Tab;
use crate::core::calculator::Operator;
use crate::core::converter::{Category, Unit};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Calculator
    Digit(char),
    Dot,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    ClearHistory,

    // Converter
    SelectCategory(Category),
    NextCategory,
    PrevCategory,
    InputChar(char),
    InputBackspace,
    ClearInput,
    SelectFromUnit(Unit),
    SelectToUnit(Unit),
    SwapUnits,

    // Shell
    SelectTab(Tab),
    NextTab,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Applying {:?}", action);
    match action {
        Action::Digit(d) => app.calculator.digit(d),
        Action::Dot => app.calculator.dot(),
        Action::Operator(op) => app.calculator.operator(op),
        Action::Equals => app.calculator.equals(),
        Action::Clear => app.calculator.clear(),
        Action::Backspace => app.calculator.backspace(),
        Action::ClearHistory => {
            app.calculator.clear_history();
            app.status_message = String::from("History cleared");
        }

        Action::SelectCategory(category) => app.converter.set_category(category),
        Action::NextCategory => {
            let next = app.converter.state().category.next();
            app.converter.set_category(next);
        }
        Action::PrevCategory => {
            let prev = app.converter.state().category.prev();
            app.converter.set_category(prev);
        }
        Action::InputChar(c) => {
            app.converter.push_char(c);
        }
        Action::InputBackspace => app.converter.backspace(),
        Action::ClearInput => app.converter.set_input(""),
        Action::SelectFromUnit(unit) => {
            if let Err(e) = app.converter.set_from(unit) {
                warn!("Ignoring source unit: {}", e);
            }
        }
        Action::SelectToUnit(unit) => {
            if let Err(e) = app.converter.set_to(unit) {
                warn!("Ignoring target unit: {}", e);
            }
        }
        Action::SwapUnits => app.converter.swap_units(),

        Action::SelectTab(tab) => select_tab(app, tab),
        Action::NextTab => select_tab(app, app.tab.next()),
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
    }
    Effect::None
}

fn select_tab(app: &mut App, tab: Tab) {
    if app.tab != tab {
        info!("Switching to {} tab", tab.label());
        app.tab = tab;
        app.status_message.clear();
    }
}
