//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Dispatch
//!
//! ```text
//! TuiEvent ─┬─ Ctrl+C ──────────────────────────────→ Action::Quit
//!           ├─ overlay open? → overlay.handle_event ─→ Action / close
//!           ├─ mouse click   → HitTest on nav / screen → Action
//!           ├─ Tab / Esc     → NextTab / Quit
//!           └─ per-screen key map ────────────────────→ Action
//! ```
//!
//! `handle_event` is pure over `App` + `TuiState`, so the whole key map is
//! testable without a terminal.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event. A `SteadyBlock` cursor is used because ratatui's
//! `set_cursor_position` resets the blink timer on every `draw()`.

mod component;
pub mod components;
pub mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::Tab;
use crate::core::action::{Action, Effect, update};
use crate::core::calculator::Operator;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::{EventHandler, HitTest};
use crate::tui::components::converter_view::ConverterAreas;
use crate::tui::components::{
    CalculatorTarget, CalculatorView, ConverterField, ConverterTarget, ConverterView,
    HistoryEvent, HistoryListState, NavBar, UnitPicker, UnitPickerEvent, UnitPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenAreas;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    // History overlay (None = hidden)
    pub history: Option<HistoryListState>,
    // Unit dropdown on the converter screen (None = hidden)
    pub unit_picker: Option<UnitPickerState>,
    pub converter_focus: ConverterField,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_history(&mut self, app: &App) {
        debug!("Opening history overlay");
        self.history = Some(HistoryListState::new(app.calculator.history().len()));
    }

    fn open_unit_picker(&mut self, app: &App, field: ConverterField) {
        let state = app.converter.state();
        let current = match field {
            ConverterField::From => state.from,
            ConverterField::To => state.to,
            ConverterField::Input => return,
        };
        debug!("Opening unit picker for {:?}", field);
        self.converter_focus = field;
        self.unit_picker = Some(UnitPickerState::new(
            field,
            app.converter.available_units(),
            current,
        ));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let area = terminal.get_frame().area();
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, area) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

/// Routes one terminal event. `area` is the full frame, used for hit tests.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, area: Rect) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    if tui.history.is_some() {
        return handle_history_event(app, tui, &event);
    }
    if tui.unit_picker.is_some() {
        return handle_picker_event(app, tui, &event, area);
    }

    match event {
        TuiEvent::MouseClick(column, row) => handle_click(app, tui, column, row, area),
        TuiEvent::NextTab | TuiEvent::PrevTab => update(app, Action::NextTab),
        TuiEvent::Escape => update(app, Action::Quit),
        event => match app.tab {
            Tab::Calculator => handle_calculator_key(app, tui, event),
            Tab::Converter => handle_converter_key(app, tui, event),
        },
    }
}

fn handle_history_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // A click anywhere closes the overlay
    let overlay_event = match event {
        TuiEvent::MouseClick(..) => Some(HistoryEvent::Dismiss),
        event => tui.history.as_mut().and_then(|h| h.handle_event(event)),
    };
    match overlay_event {
        Some(HistoryEvent::Clear) => {
            let effect = update(app, Action::ClearHistory);
            if let Some(history) = tui.history.as_mut() {
                history.set_len(0);
            }
            effect
        }
        Some(HistoryEvent::Dismiss) => {
            tui.history = None;
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_picker_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent, area: Rect) -> Effect {
    let Some(picker) = tui.unit_picker.as_mut() else {
        return Effect::None;
    };
    let field = picker.field;
    let picker_event = match event {
        TuiEvent::MouseClick(column, row) => {
            let body = ScreenAreas::new(area).body;
            let anchor = ConverterAreas::new(body).field(field);
            // Clicking outside the list closes it
            Some(
                UnitPicker::new(picker, anchor)
                    .hit(body, *column, *row)
                    .map_or(UnitPickerEvent::Dismiss, UnitPickerEvent::Select),
            )
        }
        event => picker.handle_event(event),
    };

    match picker_event {
        Some(UnitPickerEvent::Select(unit)) => {
            tui.unit_picker = None;
            match field {
                ConverterField::From => update(app, Action::SelectFromUnit(unit)),
                ConverterField::To => update(app, Action::SelectToUnit(unit)),
                ConverterField::Input => Effect::None,
            }
        }
        Some(UnitPickerEvent::Dismiss) => {
            tui.unit_picker = None;
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16, area: Rect) -> Effect {
    let areas = ScreenAreas::new(area);

    if let Some(tab) = NavBar::new(app.tab).hit(areas.nav, column, row) {
        return update(app, Action::SelectTab(tab));
    }

    match app.tab {
        Tab::Calculator => {
            let target = CalculatorView::new(&app.calculator).hit(areas.body, column, row);
            match target {
                Some(CalculatorTarget::Key(action)) => update(app, action),
                Some(CalculatorTarget::History) => {
                    tui.open_history(app);
                    Effect::None
                }
                None => Effect::None,
            }
        }
        Tab::Converter => {
            let target = ConverterView::new(app.converter.state(), tui.converter_focus, false)
                .hit(areas.body, column, row);
            match target {
                Some(ConverterTarget::Category(category)) => {
                    update(app, Action::SelectCategory(category))
                }
                Some(ConverterTarget::Field(ConverterField::Input)) => {
                    tui.converter_focus = ConverterField::Input;
                    Effect::None
                }
                Some(ConverterTarget::Field(field)) => {
                    tui.open_unit_picker(app, field);
                    Effect::None
                }
                None => Effect::None,
            }
        }
    }
}

fn handle_calculator_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::InputChar('h') => {
            tui.open_history(app);
            Effect::None
        }
        TuiEvent::InputChar(c) => calculator_char(app, c),
        TuiEvent::Paste(text) => {
            for c in text.chars() {
                calculator_char(app, c);
            }
            Effect::None
        }
        TuiEvent::Submit => update(app, Action::Equals),
        TuiEvent::Backspace => update(app, Action::Backspace),
        TuiEvent::Delete => update(app, Action::Clear),
        _ => Effect::None,
    }
}

fn calculator_char(app: &mut App, c: char) -> Effect {
    let action = match c {
        '0'..='9' => Action::Digit(c),
        '.' | ',' => Action::Dot,
        '=' => Action::Equals,
        'c' | 'C' => Action::Clear,
        c => match Operator::from_char(c) {
            Some(op) => Action::Operator(op),
            None => return Effect::None,
        },
    };
    update(app, action)
}

fn handle_converter_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::CursorUp => {
            tui.converter_focus = tui.converter_focus.prev();
            Effect::None
        }
        TuiEvent::CursorDown => {
            tui.converter_focus = tui.converter_focus.next();
            Effect::None
        }
        TuiEvent::CursorLeft => update(app, Action::PrevCategory),
        TuiEvent::CursorRight => update(app, Action::NextCategory),
        TuiEvent::InputChar('s') => update(app, Action::SwapUnits),
        event => match tui.converter_focus {
            ConverterField::Input => match event {
                TuiEvent::InputChar(c) => update(app, Action::InputChar(c)),
                TuiEvent::Paste(text) => {
                    for c in text.chars() {
                        update(app, Action::InputChar(c));
                    }
                    Effect::None
                }
                TuiEvent::Backspace => update(app, Action::InputBackspace),
                TuiEvent::Delete => update(app, Action::ClearInput),
                _ => Effect::None,
            },
            field => {
                if matches!(event, TuiEvent::Submit | TuiEvent::InputChar(' ')) {
                    tui.open_unit_picker(app, field);
                }
                Effect::None
            }
        },
    }
}
