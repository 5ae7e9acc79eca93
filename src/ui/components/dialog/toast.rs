//! Toast overlay

use super::base::{render_dialog, DialogConfig, Placement};
use crate::state::{Toast, ToastVariant};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a toast in the top-right corner. `queued` is the number of
/// toasts waiting behind this one.
pub fn render_toast(frame: &mut Frame, toast: &Toast, queued: usize) {
    let color = match toast.variant {
        ToastVariant::Default => Color::Cyan,
        ToastVariant::Destructive => Color::Red,
    };

    let mut hint = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];
    if queued > 0 {
        hint.push(Span::styled(
            format!("  (+{queued} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: &toast.title,
            title_color: color,
            border_color: color,
            message: &toast.description,
            hint: Some(hint),
            max_width: 44,
            placement: Placement::TopRight,
        },
    );
}
