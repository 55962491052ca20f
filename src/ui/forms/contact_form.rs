//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, SubmitPhase, SUBMIT_ROW};
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form with its status line and submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Company
            Constraint::Length(3),             // Client Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Contact Number
            Constraint::Length(3),             // Disposition
            Constraint::Min(5),                // Query
            Constraint::Length(1),             // Status
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let form = &app.state.form;
    for (index, chunk) in chunks.iter().take(SUBMIT_ROW).enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *chunk, field, form.active_field() == index);
        }
    }

    draw_status(frame, chunks[6], app);

    let submitting = app.is_submitting();
    let label = if submitting { "Submitting…" } else { "Submit" };
    let button_area = Rect {
        width: chunks[7].width.min(16),
        ..chunks[7]
    };
    let state = ButtonState::new(form.is_submit_row_active(), !submitting);
    render_button(frame, button_area, label, state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.state.status_message() else {
        return;
    };
    let color = match app.state.submission.phase() {
        SubmitPhase::Succeeded => Color::Green,
        SubmitPhase::Submitting => Color::Yellow,
        SubmitPhase::Failed | SubmitPhase::Idle => Color::Red,
    };
    let status = Paragraph::new(Line::from(message)).style(
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(status, area);
}
