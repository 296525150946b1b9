//! # Converter Screen
//!
//! ```text
//! Converter
//! ╭Temperature╮ ╭  Length  ╮ ╭  Weight  ╮
//! ╭ Input ───────────────────────────────╮
//! ╭ From ────────────────────────────────╮
//! ╭ To ──────────────────────────────────╮
//! ╭ Result ──────────────────────────────╮
//! ```
//!
//! One of Input / From / To has focus (green border). The focus lives in
//! `TuiState`; this component only draws it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::converter::{Category, ConverterState};
use crate::tui::component::{Component, HitTest, contains};
use crate::tui::theme;

/// Focusable fields, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConverterField {
    #[default]
    Input,
    From,
    To,
}

impl ConverterField {
    pub fn next(self) -> Self {
        match self {
            ConverterField::Input => ConverterField::From,
            ConverterField::From => ConverterField::To,
            ConverterField::To => ConverterField::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ConverterField::Input => ConverterField::To,
            ConverterField::From => ConverterField::Input,
            ConverterField::To => ConverterField::From,
        }
    }
}

/// What a click on the converter screen landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterTarget {
    Category(Category),
    Field(ConverterField),
}

#[derive(Debug, Clone, Copy)]
pub struct ConverterAreas {
    pub title: Rect,
    pub categories: [Rect; 3],
    pub input: Rect,
    pub from: Rect,
    pub to: Rect,
    pub result: Rect,
}

impl ConverterAreas {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let inner = area.inner(Margin::new(1, 0));
        let [title, category_row, input, from, to, result, _] = Layout::vertical([
            Length(1),
            Length(3),
            Length(3),
            Length(3),
            Length(3),
            Length(3),
            Min(0),
        ])
        .areas(inner);
        let categories = Layout::horizontal(Category::ALL.map(|_| Constraint::Fill(1)))
            .spacing(1)
            .areas(category_row);
        Self { title, categories, input, from, to, result }
    }

    pub fn field(&self, field: ConverterField) -> Rect {
        match field {
            ConverterField::Input => self.input,
            ConverterField::From => self.from,
            ConverterField::To => self.to,
        }
    }
}

pub struct ConverterView<'a> {
    pub state: &'a ConverterState,
    pub focus: ConverterField,
    /// Place the terminal cursor in the input field when it has focus.
    pub show_cursor: bool,
}

impl<'a> ConverterView<'a> {
    pub fn new(state: &'a ConverterState, focus: ConverterField, show_cursor: bool) -> Self {
        Self { state, focus, show_cursor }
    }

    fn field_block(&self, title: &'static str, field: ConverterField) -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::field_border(self.focus == field))
            .title(title)
            .title_style(Style::default().fg(theme::WHITE))
            .style(Style::default().bg(theme::DARK_GREY))
    }
}

impl Component for ConverterView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = ConverterAreas::new(area);

        frame.render_widget(Paragraph::new("Converter").style(theme::title()), areas.title);

        for (category, cell) in Category::ALL.into_iter().zip(areas.categories) {
            let selected = category == self.state.category;
            let (fg, bg) = if selected {
                (theme::BLACK, theme::GREEN)
            } else {
                (theme::WHITE, theme::CARD_GREY)
            };
            let tab = Paragraph::new(category.label())
                .alignment(Alignment::Center)
                .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(bg)),
                );
            frame.render_widget(tab, cell);
        }

        let input = Paragraph::new(self.state.input.as_str())
            .style(Style::default().fg(theme::WHITE))
            .block(self.field_block(" Input ", ConverterField::Input));
        frame.render_widget(input, areas.input);

        for (title, field, unit) in [
            (" From ", ConverterField::From, self.state.from),
            (" To ", ConverterField::To, self.state.to),
        ] {
            let picker = Paragraph::new(format!("{unit} ▾"))
                .style(Style::default().fg(theme::WHITE))
                .block(self.field_block(title, field));
            frame.render_widget(picker, areas.field(field));
        }

        let result_text = if self.state.result.is_empty() {
            String::from("-")
        } else {
            format!("{} {}", self.state.result, self.state.to)
        };
        let result = Paragraph::new(result_text)
            .style(
                Style::default()
                    .fg(theme::BLACK)
                    .bg(theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Result "),
            );
        frame.render_widget(result, areas.result);

        if self.show_cursor && self.focus == ConverterField::Input {
            let inner = areas.input.inner(Margin::new(1, 1));
            let offset = (self.state.input.width() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + offset, inner.y));
        }
    }
}

impl HitTest for ConverterView<'_> {
    type Target = ConverterTarget;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<ConverterTarget> {
        let areas = ConverterAreas::new(area);
        if let Some((category, _)) = Category::ALL
            .into_iter()
            .zip(areas.categories)
            .find(|(_, cell)| contains(*cell, column, row))
        {
            return Some(ConverterTarget::Category(category));
        }
        [ConverterField::Input, ConverterField::From, ConverterField::To]
            .into_iter()
            .find(|field| contains(areas.field(*field), column, row))
            .map(ConverterTarget::Field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Converter;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &ConverterState, focus: ConverterField) -> Terminal<TestBackend> {
        let backend = TestBackend::new(50, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ConverterView::new(state, focus, true).render(f, area);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_render_shows_fields_and_result() {
        let mut converter = Converter::new();
        converter.set_input("100");
        let terminal = render(converter.state(), ConverterField::Input);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Temperature"));
        assert!(text.contains("Length"));
        assert!(text.contains("Weight"));
        assert!(text.contains("100"));
        assert!(text.contains("°C"));
        assert!(text.contains("212 °F"));
    }

    #[test]
    fn test_empty_result_shows_dash() {
        let converter = Converter::new();
        let terminal = render(converter.state(), ConverterField::From);
        let areas = ConverterAreas::new(Rect::new(0, 0, 50, 20));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(areas.result.x + 1, areas.result.y + 1)].symbol(), "-");
    }

    #[test]
    fn test_focused_field_has_green_border() {
        let converter = Converter::new();
        let terminal = render(converter.state(), ConverterField::To);
        let areas = ConverterAreas::new(Rect::new(0, 0, 50, 20));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(areas.to.x, areas.to.y)].fg, theme::GREEN);
        assert_ne!(buffer[(areas.input.x, areas.input.y)].fg, theme::GREEN);
    }

    #[test]
    fn test_hit_categories_and_fields() {
        let converter = Converter::new();
        let view = ConverterView::new(converter.state(), ConverterField::Input, false);
        let area = Rect::new(0, 0, 50, 20);
        let areas = ConverterAreas::new(area);

        let weight = areas.categories[2];
        assert_eq!(
            view.hit(area, weight.x + 1, weight.y + 1),
            Some(ConverterTarget::Category(Category::Weight))
        );
        assert_eq!(
            view.hit(area, areas.from.x + 2, areas.from.y + 1),
            Some(ConverterTarget::Field(ConverterField::From))
        );
        assert_eq!(view.hit(area, areas.result.x + 2, areas.result.y + 1), None);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(ConverterField::Input.next(), ConverterField::From);
        assert_eq!(ConverterField::To.next(), ConverterField::Input);
        assert_eq!(ConverterField::Input.prev(), ConverterField::To);
    }
}
