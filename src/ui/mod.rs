//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use crate::state::View;
use components::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Form => forms::draw_intake_form(frame, main_area, app),
        View::Summary => summary::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if app.state.submitting {
        render_dialog(
            frame,
            DialogConfig {
                title: "Submitting",
                accent: Color::Yellow,
                message: "Sending your application. You can keep editing; changes made now are not part of this submission.",
                hint: Some("Please wait"),
                ..Default::default()
            },
        );
    }
}
