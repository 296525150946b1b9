//! Dark palette shared by every screen.

use ratatui::style::{Color, Modifier, Style};

pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Converter accents: selected category, focused field, result card.
pub const GREEN: Color = Color::Rgb(0x00, 0xC8, 0x53);
pub const DARK_GREY: Color = Color::Rgb(0x12, 0x12, 0x12);
/// Keypad button background.
pub const GREY_600: Color = Color::Rgb(0x2A, 0x2A, 0x2A);
pub const ORANGE: Color = Color::Rgb(0xFF, 0x98, 0x00);
pub const ERROR_RED: Color = Color::Rgb(0xFF, 0x52, 0x52);
pub const MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Unselected category tab.
pub const CARD_GREY: Color = Color::Rgb(0x1E, 0x1E, 0x1E);

pub fn screen() -> Style {
    Style::default().fg(WHITE).bg(BLACK)
}

pub fn title() -> Style {
    Style::default().fg(WHITE).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Border of a field; green when it has focus.
pub fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(GREEN)
    } else {
        Style::default().fg(GREY_600)
    }
}
