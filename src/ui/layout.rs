//! Layout components (content split, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the result/history column
const SIDE_PANEL_WIDTH: u16 = 44;

/// Split the screen into (form, side panel), reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form
            Constraint::Length(SIDE_PANEL_WIDTH), // Result + history
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let phase = app.state.controller.phase();
    let (symbol, color) = phase_indicator(phase);
    let mut spans = vec![
        Span::styled(format!(" {symbol} "), Style::default().fg(color)),
        Span::styled(status_hints(phase), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Help hint on the right
    let help_hint = " F1:keys ";
    let help_area = Rect {
        x: area.width.saturating_sub(help_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (help_hint.len() as u16).min(area.width),
        height: 1,
    };
    let help_widget =
        Paragraph::new(help_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(help_widget, help_area);
}

fn phase_indicator(phase: Phase) -> (&'static str, Color) {
    match phase {
        Phase::Idle => ("○", Color::Gray),
        Phase::Submitting => ("◐", Color::Cyan),
        Phase::Success => ("●", Color::Green),
        Phase::ValidationFailed => ("✗", Color::Red),
    }
}

/// Keyboard hints for the current phase
fn status_hints(phase: Phase) -> String {
    match phase {
        Phase::Submitting => "Analyzing...  Tab:next  ←/→:slider".to_string(),
        Phase::Success => format!(
            "Tab:next  ←/→:slider  {SUBMIT_SHORTCUT}:assess  {COPY_SHORTCUT}:copy  ^C^C:quit"
        ),
        Phase::Idle | Phase::ValidationFailed => {
            format!("Tab:next  ←/→:slider  {SUBMIT_SHORTCUT}:assess  ^C^C:quit")
        }
    }
}
