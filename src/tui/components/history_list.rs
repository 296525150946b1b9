//! # History Overlay
//!
//! Centered overlay listing past calculations, most recent first.
//! Opened with `h` (or the header button), dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryListState` lives in `TuiState` while the overlay is open
//! - `HistoryList` is created each frame with borrowed state and entries

use std::collections::VecDeque;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Persistent state for the history overlay.
pub struct HistoryListState {
    len: usize,
    pub selected: usize,
    pub list_state: ListState,
}

impl HistoryListState {
    pub fn new(len: usize) -> Self {
        let mut state = Self {
            len: 0,
            selected: 0,
            list_state: ListState::default(),
        };
        state.set_len(len);
        state
    }

    /// Keeps the selection valid after the history changed size.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the history overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Clear,
    Dismiss,
}

impl EventHandler for HistoryListState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('h') | TuiEvent::InputChar('q') => {
                Some(HistoryEvent::Dismiss)
            }
            TuiEvent::InputChar('c') => Some(HistoryEvent::Clear),
            TuiEvent::CursorUp => {
                if self.len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the history overlay.
pub struct HistoryList<'a> {
    state: &'a mut HistoryListState,
    entries: &'a VecDeque<String>,
}

impl<'a> HistoryList<'a> {
    pub fn new(state: &'a mut HistoryListState, entries: &'a VecDeque<String>) -> Self {
        Self { state, entries }
    }
}

impl Component for HistoryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.entries.len());

        let height = (self.entries.len().max(1) as u16).saturating_add(2);
        let overlay = centered_rect(44, height, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ORANGE))
            .title(" History ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" c Clear  Esc Back ").centered())
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme::DARK_GREY));

        if self.entries.is_empty() {
            let empty = Paragraph::new("No calculations yet.")
                .style(theme::muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(Line::from(entry.as_str()).right_aligned()))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(theme::WHITE))
            .highlight_style(
                Style::default()
                    .fg(theme::BLACK)
                    .bg(theme::ORANGE)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
