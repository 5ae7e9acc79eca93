//! Field rendering utilities for forms

use crate::state::{parse_number, FieldKey};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a field should be drawn
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub field: FieldKey,
    pub value: &'a str,
    pub slider_position: f64,
    pub is_active: bool,
    pub is_invalid: bool,
}

/// Draw a measurement field: text value on the first line, paired slider
/// on the second
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let border_style = if view.is_invalid {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if !view.value.is_empty() && parse_number(view.value).is_none() {
        // Typed text that will not pass validation
        Style::default().fg(Color::Yellow)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_str = if view.value.is_empty() && !view.is_active {
        "(empty)"
    } else {
        view.value
    };
    let cursor = if view.is_active { "▌" } else { "" };

    let title = match view.field.unit() {
        Some(unit) => format!(" {} ({unit}) ", view.field.label()),
        None => format!(" {} ", view.field.label()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = block.inner(area).width as usize;
    let range = view.field.range();
    let bar = slider_bar(inner_width, range.ratio(view.slider_position));
    let slider_color = if view.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let content = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(bar, Style::default().fg(slider_color))),
    ]);

    frame.render_widget(content.block(block), area);
}

/// Text slider of `width` cells with the knob at `ratio` along the track
pub fn slider_bar(width: usize, ratio: f64) -> String {
    if width == 0 {
        return String::new();
    }
    let knob = ((width - 1) as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slider_bar_at_min() {
        assert_eq!(slider_bar(5, 0.0), "●────");
    }

    #[test]
    fn test_slider_bar_at_max() {
        assert_eq!(slider_bar(5, 1.0), "━━━━●");
    }

    #[test]
    fn test_slider_bar_midpoint() {
        assert_eq!(slider_bar(5, 0.5), "━━●──");
    }

    #[test]
    fn test_slider_bar_clamps_ratio() {
        assert_eq!(slider_bar(3, 4.0), "━━●");
    }

    #[test]
    fn test_slider_bar_zero_width() {
        assert_eq!(slider_bar(0, 0.5), "");
    }
}
