use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::Tab;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::converter_view::ConverterAreas;
use crate::tui::components::{
    CalculatorView, ConverterView, HistoryList, NavBar, UnitPicker,
};
use crate::tui::theme;

const CALCULATOR_HINTS: &str = "0-9 . + - * / % Enter  ⌫ Back  c AC  h History  Tab Switch  Esc Quit";
const CONVERTER_HINTS: &str = "↑↓ Field  ←→ Category  Enter Units  s Swap  Tab Switch  Esc Quit";

/// Top-level screen split: active screen, navigation bar, footer.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub body: Rect,
    pub nav: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [body, nav, footer] = Layout::vertical([Min(0), Length(2), Length(1)]).areas(area);
        Self { body, nav, footer }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let areas = ScreenAreas::new(area);

    frame.render_widget(Block::new().style(theme::screen()), area);

    let overlay_open = tui.history.is_some() || tui.unit_picker.is_some();
    match app.tab {
        Tab::Calculator => CalculatorView::new(&app.calculator).render(frame, areas.body),
        Tab::Converter => {
            ConverterView::new(app.converter.state(), tui.converter_focus, !overlay_open)
                .render(frame, areas.body)
        }
    }

    NavBar::new(app.tab).render(frame, areas.nav);
    draw_footer(frame, areas.footer, app);

    if let Some(history) = tui.history.as_mut() {
        HistoryList::new(history, app.calculator.history()).render(frame, areas.body);
    }
    if let Some(picker) = tui.unit_picker.as_mut() {
        let anchor = ConverterAreas::new(areas.body).field(picker.field);
        UnitPicker::new(picker, anchor).render(frame, areas.body);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.status_message.is_empty() {
        let hints = match app.tab {
            Tab::Calculator => CALCULATOR_HINTS,
            Tab::Converter => CONVERTER_HINTS,
        };
        Line::from(Span::styled(hints, theme::muted()))
    } else {
        Line::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(theme::GREEN),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(theme::screen()), area);
}
