//! Risk assessment form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::FieldKey;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of the field grid, two fields per row
const FIELD_ROWS: usize = FieldKey::ALL.len() / 2;
/// Field block height: borders + value line + slider line
const FIELD_HEIGHT: u16 = 4;

/// Draw the eight-field form and its Assess button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Diabetes Risk Assessment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Intro text
    constraints.extend(std::iter::repeat(Constraint::Length(FIELD_HEIGHT)).take(FIELD_ROWS));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new(Line::from(Span::styled(
        "Enter the eight measurements, then assess.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(intro, chunks[0]);

    let state = &app.state;
    let data = state.controller.form_data();
    for (row, pair) in FieldKey::ALL.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[row + 1]);

        for (column, field) in pair.iter().enumerate() {
            draw_field(
                frame,
                columns[column],
                FieldView {
                    field: *field,
                    value: data.value(*field),
                    slider_position: data.slider_position(*field),
                    is_active: state.active_field() == Some(*field),
                    is_invalid: state.invalid_field == Some(*field),
                },
            );
        }
    }

    draw_button(frame, chunks[FIELD_ROWS + 1], app);
}

fn draw_button(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let submitting = state.controller.is_submitting();
    let label = if submitting {
        "Analyzing..."
    } else {
        "Assess Risk"
    };

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        row[1],
        label,
        state.focus.is_buttons_row_active(),
        !submitting,
    );
}
