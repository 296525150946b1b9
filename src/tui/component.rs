use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use super::event::TuiEvent;

/// Something drawn into a `Rect` of the frame.
///
/// Props come in as struct fields, so `render` has one fixed signature for
/// every component. `&mut self` lets stateful components (lists) update
/// their ratatui state while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns low-level `TuiEvent`s into its own events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// A component that can tell what was under a mouse click.
///
/// Implementations must lay out `area` the same way their `render` does,
/// otherwise clicks land on the wrong target.
pub trait HitTest {
    type Target;

    fn hit(&self, area: Rect, column: u16, row: u16) -> Option<Self::Target>;
}

/// Whether a terminal cell lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}
