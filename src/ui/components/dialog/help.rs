//! Key map overlay

use super::base::{render_dialog, DialogConfig, Placement};
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the key map centered on screen
pub fn render_help(frame: &mut Frame) {
    let message = format!(
        "Tab/Down      next field\n\
         BackTab/Up    previous field\n\
         Typing        enter a value\n\
         Backspace     delete a character\n\
         ^U            clear the field\n\
         Left/Right    slider one step\n\
         Shift+arrows  slider ten steps\n\
         {SUBMIT_SHORTCUT:<13} assess risk\n\
         {COPY_SHORTCUT:<13} copy result\n\
         Esc           dismiss notification\n\
         ^C^C          quit"
    );
    let hint = vec![
        Span::styled(
            "F1",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Keys",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 44,
            placement: Placement::Center,
        },
    );
}
