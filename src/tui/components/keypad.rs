//! # Keypad Component
//!
//! The calculator's button grid. Every key maps straight onto a core
//! `Action`, so a click and the matching keystroke go through the same path.
//!
//! ```text
//! ┌────┬────┬────┬────┐
//! │ AC │ ⌫  │ %  │ ÷  │
//! │ 7  │ 8  │ 9  │ ×  │
//! │ 4  │ 5  │ 6  │ -  │
//! │ 1  │ 2  │ 3  │ +  │
//! │   0     │ ,  │ =  │
//! └─────────┴────┴────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::calculator::Operator;
use crate::tui::component::{Component, HitTest, contains};
use crate::tui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Number,
    Operator,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub action: Action,
    pub kind: KeyKind,
    /// Relative width within its row.
    pub span: u16,
}

const fn num(label: &'static str, digit: char) -> Key {
    Key { label, action: Action::Digit(digit), kind: KeyKind::Number, span: 1 }
}

const fn op(label: &'static str, action: Action) -> Key {
    Key { label, action, kind: KeyKind::Operator, span: 1 }
}

pub static ROWS: [&[Key]; 5] = [
    &[
        op("AC", Action::Clear),
        op("⌫", Action::Backspace),
        op("%", Action::Operator(Operator::Percent)),
        op("÷", Action::Operator(Operator::Divide)),
    ],
    &[num("7", '7'), num("8", '8'), num("9", '9'), op("×", Action::Operator(Operator::Multiply))],
    &[num("4", '4'), num("5", '5'), num("6", '6'), op("-", Action::Operator(Operator::Subtract))],
    &[num("1", '1'), num("2", '2'), num("3", '3'), op("+", Action::Operator(Operator::Add))],
    &[
        Key { label: "0", action: Action::Digit('0'), kind: KeyKind::Number, span: 2 },
        Key { label: ",", action: Action::Dot, kind: KeyKind::Number, span: 1 },
        Key { label: "=", action: Action::Equals, kind: KeyKind::Accent, span: 1 },
    ],
];

/// Rows are separated by a blank line only when there is room for it.
const ROOMY_HEIGHT: u16 = 14;

/// Stateless keypad; all keys are static.
pub struct Keypad;

impl Keypad {
    /// Lays out every key inside `area`.
    pub fn key_rects(area: Rect) -> Vec<(Rect, &'static Key)> {
        let row_spacing = u16::from(area.height >= ROOMY_HEIGHT);
        let row_areas = Layout::vertical(ROWS.map(|_| Constraint::Fill(1)))
            .spacing(row_spacing)
            .split(area);

        ROWS.iter()
            .zip(row_areas.iter())
            .flat_map(|(keys, row_area)| {
                let cells = Layout::horizontal(keys.iter().map(|k| Constraint::Fill(k.span)))
                    .spacing(1)
                    .split(*row_area);
                keys.iter()
                    .zip(cells.iter())
                    .map(|(key, cell)| (*cell, key))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn key_style(kind: KeyKind) -> Style {
        match kind {
            KeyKind::Number => Style::default().fg(theme::WHITE).bg(theme::GREY_600),
            KeyKind::Operator => Style::default().fg(theme::ORANGE).bg(theme::GREY_600),
            KeyKind::Accent => Style::default().fg(theme::BLACK).bg(theme::ORANGE),
        }
        .add_modifier(Modifier::BOLD)
    }
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (cell, key) in Self::key_rects(area) {
            // Vertically center the label inside the button
            let top = cell.height.saturating_sub(1) / 2;
            let button = Paragraph::new(key.label)
                .alignment(Alignment::Center)
                .style(Self::key_style(key.kind))
                .block(Block::new().padding(Padding::top(top)));
            frame.render_widget(button, cell);
        }
    }
}

impl HitTest for Keypad {
    type Target = Action;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<Action> {
        Self::key_rects(area)
            .into_iter()
            .find(|(cell, _)| contains(*cell, column, row))
            .map(|(_, key)| key.action)
    }
}
