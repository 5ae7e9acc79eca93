//! Result and history panel

use crate::app::App;
use crate::state::{AssessmentRecord, Prediction};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the current result above the session history
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    draw_result(frame, chunks[0], app);
    draw_history(frame, chunks[1], app);
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(progress) = &state.progress {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .margin(1)
            .split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Analyzing your data...",
                Style::default().fg(Color::Cyan),
            )),
            rows[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                .ratio(progress.ratio())
                .label(""),
            rows[1],
        );
        return;
    }

    let result = state.controller.result();
    let content = match result.prediction {
        Some(prediction) => {
            let color = prediction_color(prediction);
            vec![
                Line::from(Span::styled(
                    prediction.headline(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(result.message.as_str()),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Fill in all eight measurements and press Enter to assess.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let history = &app.state.history;
    let block = Block::default()
        .title(format!(" History ({}) ", history.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No assessments yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history.records().iter().map(history_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn history_item(record: &AssessmentRecord) -> ListItem<'static> {
    let time = record
        .assessed_at
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S");
    ListItem::new(Line::from(vec![
        Span::styled(format!("{time} "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<8}", record.prediction.label()),
            Style::default().fg(prediction_color(record.prediction)),
        ),
        Span::raw(format!(" glucose {} bmi {}", record.glucose, record.bmi)),
    ]))
}

fn prediction_color(prediction: Prediction) -> Color {
    match prediction {
        Prediction::Positive => Color::Red,
        Prediction::Negative => Color::Green,
    }
}
