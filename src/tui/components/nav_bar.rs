//! # NavBar Component
//!
//! The navigation shell: one cell per screen, the selected one highlighted.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! NavBar is purely presentational. It receives the selected tab as a prop
//! and has no internal state:
//!
//! ```rust,ignore
//! let mut nav = NavBar::new(app.tab);
//! nav.render(frame, nav_area);
//! ```
//!
//! ### Equal-width cells
//!
//! Each tab gets the same share of the width. That keeps hit testing a
//! matter of splitting the area the same way `render` does.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Tab;
use crate::tui::component::{Component, HitTest, contains};
use crate::tui::theme;

/// Navigation bar showing every `Tab`.
pub struct NavBar {
    /// Currently selected screen
    pub selected: Tab,
}

impl NavBar {
    pub fn new(selected: Tab) -> Self {
        Self { selected }
    }

    fn cells(area: Rect) -> Vec<Rect> {
        Layout::horizontal(Tab::ALL.map(|_| Constraint::Fill(1)))
            .split(area)
            .to_vec()
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::GREY_600))
            .style(theme::screen());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (tab, cell) in Tab::ALL.into_iter().zip(Self::cells(inner)) {
            let style = if tab == self.selected {
                Style::default()
                    .fg(theme::BLACK)
                    .bg(theme::ORANGE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::WHITE)
            };
            let label = Paragraph::new(Line::from(tab.label()))
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(label, cell);
        }
    }
}

impl HitTest for NavBar {
    type Target = Tab;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<Tab> {
        let inner = Block::new().borders(Borders::TOP).inner(area);
        Tab::ALL
            .into_iter()
            .zip(Self::cells(inner))
            .find(|(_, cell)| contains(*cell, column, row))
            .map(|(tab, _)| tab)
    }
}
