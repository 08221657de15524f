//! Confirmation screen shown after a successful submission

use crate::app::App;
use crate::state::EmailStatus;
use crate::summary::SubmissionRecord;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(submitted) = &app.state.submitted else {
        return;
    };
    let record = &submitted.record;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Banner
            Constraint::Length(3), // Stats
            Constraint::Min(0),    // Details
        ])
        .split(area);

    let mut banner = vec![
        Line::from(Span::styled(
            "✓ Application Submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Reference {} · received {}",
            submitted.receipt.id,
            submitted.receipt.received_at.format("%Y-%m-%d %H:%M UTC")
        )),
    ];
    if let Some(line) = email_line(app.state.email_status, &record.email) {
        banner.push(line);
    }
    frame.render_widget(Paragraph::new(banner), chunks[0]);

    let stats = record.stats();
    let stats_line = Line::from(vec![
        Span::styled(
            format!(" {} ", stats.fields_completed),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("Fields Completed   "),
        Span::styled(
            format!(" {} ", stats.interests_selected),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("Interests Selected   "),
        Span::styled(
            if stats.cv_uploaded { " ✓ " } else { " ✗ " },
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("CV Uploaded"),
    ]);
    frame.render_widget(
        Paragraph::new(stats_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(detail_lines(record))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Your Submission ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        chunks[2],
    );
}

fn email_line(status: EmailStatus, email: &str) -> Option<Line<'static>> {
    let (text, color) = match status {
        EmailStatus::Idle => return None,
        EmailStatus::Sending => (format!("Sending confirmation to {email}..."), Color::Yellow),
        EmailStatus::Sent => (format!("Confirmation sent to {email}"), Color::Green),
        EmailStatus::Failed => ("Confirmation email could not be sent".to_string(), Color::Red),
    };
    Some(Line::from(Span::styled(text, Style::default().fg(color))))
}

fn detail_lines(record: &SubmissionRecord) -> Vec<Line<'static>> {
    let interests = record.interests.join(", ");
    let linkedin = if record.linkedin_url.is_empty() {
        "Not provided".to_string()
    } else {
        record.linkedin_url.clone()
    };
    let details: [(&str, &str); 8] = [
        ("Address", &record.address),
        ("Phone", &record.phone),
        ("Nationality", &record.nationality),
        ("Language", &record.preferred_language),
        ("Experience", record.experience_label()),
        ("Institution", &record.current_institution),
        ("LinkedIn", &linkedin),
        ("CV", &record.cv_file_name),
    ];

    let mut lines: Vec<Line> = details
        .iter()
        .map(|(label, value)| detail(label, value))
        .collect();
    if !interests.is_empty() {
        lines.push(detail("Interests", &interests));
    }
    if !record.email.is_empty() {
        lines.push(detail("Email", &record.email));
    }
    lines
}

fn detail(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}
