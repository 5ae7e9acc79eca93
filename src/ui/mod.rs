//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, side_area) = layout::create_layout(area);

    forms::draw_risk_form(frame, form_area, app);
    result_panel::draw(frame, side_area, app);

    layout::draw_status_bar(frame, app);

    // Overlays last so they sit on top
    if let Some(toast) = app.state.toasts.current() {
        components::render_toast(frame, toast, app.state.toasts.len() - 1);
    }
    if app.state.show_help {
        components::render_help(frame);
    }
}
