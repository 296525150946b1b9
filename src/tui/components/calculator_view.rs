//! # Calculator Screen
//!
//! Header, pending expression, error line, display and keypad, top to bottom.
//!
//! ```text
//! Kalkulator                 ⋮ History [h]
//!                                    12 ×
//!                      Cannot divide by 0
//! ╭──────────────────────────────────────╮
//! │                                    0 │
//! ╰──────────────────────────────────────╯
//! [ keypad ]
//! ```
//!
//! The display keeps the tail of long numbers visible: when the operand does
//! not fit, the leading digits are elided.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::core::calculator::Calculator;
use crate::tui::component::{Component, HitTest, contains};
use crate::tui::components::keypad::Keypad;
use crate::tui::theme;

const HISTORY_LABEL: &str = "⋮ History [h]";

/// What a click on the calculator screen landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorTarget {
    Key(Action),
    History,
}

/// Sub-areas of the calculator screen.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorAreas {
    pub header: Rect,
    pub expression: Rect,
    pub error: Rect,
    pub display: Rect,
    pub keypad: Rect,
}

impl CalculatorAreas {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let inner = area.inner(Margin::new(1, 0));
        let [header, expression, error, display, _, keypad] =
            Layout::vertical([Length(1), Length(1), Length(1), Length(3), Length(1), Min(5)])
                .areas(inner);
        Self { header, expression, error, display, keypad }
    }

    fn history_button(&self) -> Rect {
        let width = HISTORY_LABEL.width() as u16;
        Rect {
            x: self.header.right().saturating_sub(width),
            width: width.min(self.header.width),
            ..self.header
        }
    }
}

pub struct CalculatorView<'a> {
    pub calculator: &'a Calculator,
}

impl<'a> CalculatorView<'a> {
    pub fn new(calculator: &'a Calculator) -> Self {
        Self { calculator }
    }
}

impl Component for CalculatorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = CalculatorAreas::new(area);
        let state = self.calculator.state();

        let header = Line::from(vec![Span::styled("Kalkulator", theme::title())]);
        frame.render_widget(Paragraph::new(header), areas.header);
        frame.render_widget(
            Paragraph::new(HISTORY_LABEL)
                .style(theme::muted())
                .alignment(Alignment::Right),
            areas.history_button(),
        );

        if let Some(expression) = self.calculator.pending_expression() {
            frame.render_widget(
                Paragraph::new(expression)
                    .style(theme::muted())
                    .alignment(Alignment::Right),
                areas.expression,
            );
        }

        if let Some(error) = state.error {
            frame.render_widget(
                Paragraph::new(error.to_string())
                    .style(Style::default().fg(theme::ERROR_RED))
                    .alignment(Alignment::Right),
                areas.error,
            );
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::GREY_600))
            .style(Style::default().bg(theme::DARK_GREY));
        let width = block.inner(areas.display).width.saturating_sub(1) as usize;
        let display = Paragraph::new(fit_right(&state.display, width))
            .style(Style::default().fg(theme::WHITE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right)
            .block(block);
        frame.render_widget(display, areas.display);

        Keypad.render(frame, areas.keypad);
    }
}

impl HitTest for CalculatorView<'_> {
    type Target = CalculatorTarget;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<CalculatorTarget> {
        let areas = CalculatorAreas::new(area);
        if contains(areas.history_button(), column, row) {
            return Some(CalculatorTarget::History);
        }
        Keypad
            .hit(areas.keypad, column, row)
            .map(CalculatorTarget::Key)
    }
}

/// Keeps the end of `text` within `width` columns, eliding the start with `…`.
pub fn fit_right(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut used = 1; // the ellipsis
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::Operator;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(calculator: &Calculator) -> String {
        let backend = TestBackend::new(40, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CalculatorView::new(calculator).render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_render_shows_display_and_header() {
        let mut calc = Calculator::new();
        calc.digit('4');
        calc.digit('2');
        let text = render(&calc);
        assert!(text.contains("Kalkulator"));
        assert!(text.contains("History"));
        assert!(text.contains("42"));
    }

    #[test]
    fn test_render_shows_pending_expression() {
        let mut calc = Calculator::new();
        calc.digit('1');
        calc.digit('2');
        calc.operator(Operator::Multiply);
        assert!(render(&calc).contains("12 ×"));
    }

    #[test]
    fn test_render_shows_error() {
        let mut calc = Calculator::new();
        calc.digit('5');
        calc.operator(Operator::Divide);
        calc.digit('0');
        calc.equals();
        assert!(render(&calc).contains("Cannot divide by 0"));
    }

    #[test]
    fn test_hit_history_button_and_keys() {
        let calc = Calculator::new();
        let view = CalculatorView::new(&calc);
        let area = Rect::new(0, 0, 40, 24);
        let areas = CalculatorAreas::new(area);

        let button = areas.history_button();
        assert_eq!(view.hit(area, button.x, button.y), Some(CalculatorTarget::History));

        let (cell, key) = Keypad::key_rects(areas.keypad)[0];
        assert_eq!(view.hit(area, cell.x, cell.y), Some(CalculatorTarget::Key(key.action)));
        assert_eq!(key.action, Action::Clear);

        assert_eq!(view.hit(area, areas.display.x + 2, areas.display.y + 1), None);
    }

    #[test]
    fn test_fit_right() {
        assert_eq!(fit_right("12345", 10), "12345");
        assert_eq!(fit_right("123456789", 5), "…6789");
        assert_eq!(fit_right("123", 0), "");
    }
}
