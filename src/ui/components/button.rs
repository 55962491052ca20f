//! Bordered push button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by a button: border, label, border
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Focused,
    /// Drawn dimmed; key presses on it are ignored by the caller
    Disabled,
}

impl ButtonState {
    pub fn new(focused: bool, enabled: bool) -> Self {
        match (enabled, focused) {
            (false, _) => ButtonState::Disabled,
            (true, true) => ButtonState::Focused,
            (true, false) => ButtonState::Normal,
        }
    }

    fn styles(self) -> (Style, Style) {
        match self {
            ButtonState::Focused => (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonState::Normal => (Style::default().fg(Color::Gray), Style::default()),
            ButtonState::Disabled => (
                Style::default().fg(Color::DarkGray),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        }
    }
}

/// Render a button with its label centred
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let (border_style, label_style) = state.styles();
    let border_type = if state == ButtonState::Focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let paragraph = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(label_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
