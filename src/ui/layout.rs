//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{RESTORE_SHORTCUT, SAVE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{NotificationKind, SaveStatus, View};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Split the frame into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Title, save indicator and completion gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status = app.state.save_status;
    let status_color = match status {
        SaveStatus::Saving => Color::Yellow,
        SaveStatus::Saved => Color::Green,
        SaveStatus::Error => Color::Red,
        SaveStatus::Idle => Color::DarkGray,
    };
    let title = Line::from(vec![
        Span::styled(
            " HPAIR Conference Application ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            save_label(status, app.state.last_saved_at),
            Style::default().fg(status_color),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    if app.state.current_view == View::Form {
        let progress = app.state.form.progress();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(u16::from(progress))
            .label(format!("{progress}% complete"));
        frame.render_widget(gauge, rows[1]);
    }
}

/// Save indicator text, with the local time of the last save once there is one
fn save_label(status: SaveStatus, last_saved_at: Option<i64>) -> String {
    let saved_at = last_saved_at
        .and_then(DateTime::from_timestamp_millis)
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string());
    match (status, saved_at) {
        (SaveStatus::Saved, Some(at)) => format!("{} at {at}", status.label()),
        _ => status.label().to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Notification takes the front of the bar while it lasts
    if let Some(notification) = &app.state.notification {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::White,
        };
        spans.push(Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("| "));
    }

    let error_count = app.state.form.errors().len();
    if app.state.current_view == View::Form && error_count > 0 {
        spans.push(Span::styled(
            format!(" {} ", error_summary(error_count)),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw("| "));
    }

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn error_summary(count: usize) -> String {
    match count {
        1 => "1 field needs attention".to_string(),
        n => format!("{n} fields need attention"),
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Form if app.state.form.is_buttons_row_active() => {
            "←/→:choose  Enter:run  Tab:next".to_string()
        }
        View::Form => format!(
            "Tab:next  ←/→/Space:choose  {SAVE_SHORTCUT}:save  {RESTORE_SHORTCUT}:restore  {SUBMIT_SHORTCUT}:submit"
        ),
        View::Summary => "d:download summary  n:new application  q:quit".to_string(),
    }
}
