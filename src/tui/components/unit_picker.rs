//! # Unit Picker Component
//!
//! Dropdown for the converter's From / To fields. Opened with Enter (or a
//! click) on a unit field, it drops down under that field and lists the
//! units of the current category.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UnitPickerState` lives in `TuiState` while the dropdown is open
//! - `UnitPicker` is created each frame with borrowed state and the anchor

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState};

use crate::core::converter::Unit;
use crate::tui::component::{Component, EventHandler, HitTest, contains};
use crate::tui::components::converter_view::ConverterField;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Persistent state for an open unit dropdown.
pub struct UnitPickerState {
    /// Which field the chosen unit goes into (From or To).
    pub field: ConverterField,
    pub units: &'static [Unit],
    pub selected: usize,
    pub list_state: ListState,
}

impl UnitPickerState {
    /// Opens with `current` preselected, or the first unit if it is not listed.
    pub fn new(field: ConverterField, units: &'static [Unit], current: Unit) -> Self {
        let selected = units.iter().position(|u| *u == current).unwrap_or(0);
        let mut list_state = ListState::default();
        if !units.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            field,
            units,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Events emitted by the unit picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPickerEvent {
    Select(Unit),
    Dismiss,
}

impl EventHandler for UnitPickerState {
    type Event = UnitPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<UnitPickerEvent> {
        match event {
            TuiEvent::Escape => Some(UnitPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.units.is_empty() {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.units.is_empty() {
                    self.select((self.selected + 1).min(self.units.len() - 1));
                }
                None
            }
            TuiEvent::Submit => self
                .units
                .get(self.selected)
                .map(|unit| UnitPickerEvent::Select(*unit)),
            // 1-based shortcut: "2" picks the second unit
            TuiEvent::InputChar(c) => c
                .to_digit(10)
                .and_then(|n| (n as usize).checked_sub(1))
                .and_then(|i| self.units.get(i))
                .map(|unit| UnitPickerEvent::Select(*unit)),
            _ => None,
        }
    }
}

/// Where the dropdown goes: directly under `anchor`, or above it when the
/// space below runs out. Clamped to `bounds`.
pub fn dropdown_rect(anchor: Rect, bounds: Rect, items: usize) -> Rect {
    let height = (items as u16).saturating_add(2).min(bounds.height);
    let below = anchor.bottom();
    let y = if below.saturating_add(height) <= bounds.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    Rect {
        x: anchor.x,
        y,
        width: anchor.width.min(bounds.right().saturating_sub(anchor.x)),
        height,
    }
}

/// Transient render wrapper for the unit dropdown.
pub struct UnitPicker<'a> {
    state: &'a mut UnitPickerState,
    /// The field the dropdown belongs to.
    anchor: Rect,
}

impl<'a> UnitPicker<'a> {
    pub fn new(state: &'a mut UnitPickerState, anchor: Rect) -> Self {
        Self { state, anchor }
    }
}

impl Component for UnitPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = dropdown_rect(self.anchor, area, self.state.units.len());

        frame.render_widget(Clear, overlay);

        let items: Vec<ListItem> = self
            .state
            .units
            .iter()
            .enumerate()
            .map(|(i, unit)| ListItem::new(Line::from(format!("{} {}", i + 1, unit))))
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::GREEN))
                    .style(Style::default().bg(theme::CARD_GREY)),
            )
            .style(Style::default().fg(theme::WHITE))
            .highlight_style(
                Style::default()
                    .fg(theme::BLACK)
                    .bg(theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

impl HitTest for UnitPicker<'_> {
    type Target = Unit;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<Unit> {
        let overlay = dropdown_rect(self.anchor, area, self.state.units.len());
        let inner = Block::bordered().inner(overlay);
        if !contains(inner, column, row) {
            return None;
        }
        self.state.units.get(usize::from(row - inner.y)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Category;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn length_picker() -> UnitPickerState {
        UnitPickerState::new(ConverterField::To, Category::Length.units(), Unit::Kilometer)
    }

    #[test]
    fn test_preselects_current_unit() {
        let state = length_picker();
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_navigation_and_submit() {
        let mut state = length_picker();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(UnitPickerEvent::Select(Unit::Centimeter))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(UnitPickerEvent::Dismiss));
    }

    #[test]
    fn test_number_shortcut() {
        let mut state = length_picker();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('2')),
            Some(UnitPickerEvent::Select(Unit::Meter))
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('0')), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('9')), None);
    }

    #[test]
    fn test_dropdown_flips_above_when_no_room() {
        let bounds = Rect::new(0, 0, 40, 20);
        let below = dropdown_rect(Rect::new(2, 4, 30, 3), bounds, 3);
        assert_eq!((below.y, below.height), (7, 5));

        let above = dropdown_rect(Rect::new(2, 16, 30, 3), bounds, 3);
        assert_eq!((above.y, above.height), (11, 5));
    }

    #[test]
    fn test_render_and_hit() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = length_picker();
        let anchor = Rect::new(2, 4, 30, 3);

        terminal
            .draw(|f| {
                let area = f.area();
                UnitPicker::new(&mut state, anchor).render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("1 cm"));
        assert!(text.contains("2 m"));
        assert!(text.contains("3 km"));

        let picker = UnitPicker::new(&mut state, anchor);
        let area = Rect::new(0, 0, 40, 20);
        // Dropdown starts at row 7; first item sits inside the border at row 8.
        assert_eq!(picker.hit(area, 5, 8), Some(Unit::Centimeter));
        assert_eq!(picker.hit(area, 5, 10), Some(Unit::Kilometer));
        assert_eq!(picker.hit(area, 5, 7), None);
        assert_eq!(picker.hit(area, 5, 2), None);
    }
}
