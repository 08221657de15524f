//! Field rendering utilities for the intake form

use crate::state::{FieldId, FieldKind, IntakeForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(field: FieldId) -> u16 {
    match field.kind() {
        FieldKind::LongText => 5,
        FieldKind::MultiSelect(options) => 2 + (options.len() as u16).div_ceil(3),
        FieldKind::File => 4,
        _ => 3,
    }
}

/// Draw one field: label in the title, error or valid marker on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, form: &IntakeForm, field: FieldId) {
    let is_active = form.active() == Some(field);
    let error = form.error(field);

    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ));
    } else if form.is_field_valid_display(field) {
        block = block.title_bottom(Span::styled(" ✓ ", Style::default().fg(Color::Green)));
    }

    let content = match field.kind() {
        FieldKind::MultiSelect(options) => interest_lines(form, options, is_active),
        FieldKind::File => file_lines(form, field, is_active),
        _ => value_lines(form, field, is_active),
    };

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn cursor() -> Span<'static> {
    Span::styled("▌", Style::default().fg(Color::Cyan))
}

fn value_lines(form: &IntakeForm, field: FieldId, is_active: bool) -> Vec<Line<'static>> {
    let kind = field.kind();
    let display = form.snapshot().get(field).display_value(kind);
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    match kind {
        FieldKind::Choice(_) => {
            let text = if display.is_empty() {
                "(not selected)".to_string()
            } else {
                display
            };
            let arrows = Style::default().fg(if is_active {
                Color::Cyan
            } else {
                Color::DarkGray
            });
            vec![Line::from(vec![
                Span::styled("‹ ", arrows),
                Span::styled(text, style),
                Span::styled(" ›", arrows),
            ])]
        }
        FieldKind::Flag => vec![Line::from(Span::styled(display, style))],
        _ => {
            if display.is_empty() && !is_active {
                return vec![Line::from(Span::styled(
                    "(empty)",
                    Style::default().fg(Color::DarkGray),
                ))];
            }
            let mut lines: Vec<Line> = display
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), style)))
                .collect();
            if is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(cursor());
                }
            }
            lines
        }
    }
}

fn file_lines(form: &IntakeForm, field: FieldId, is_active: bool) -> Vec<Line<'static>> {
    let attached = match form.snapshot().file(field) {
        Some(_) => Span::raw(form.snapshot().get(field).display_value(field.kind())),
        None => Span::styled("(no file)", Style::default().fg(Color::DarkGray)),
    };
    let mut lines = vec![Line::from(attached)];
    if is_active {
        lines.push(Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                form.file_path_input.clone(),
                Style::default().fg(Color::Cyan),
            ),
            cursor(),
        ]));
    }
    lines
}

fn interest_lines(
    form: &IntakeForm,
    options: &'static [&'static str],
    is_active: bool,
) -> Vec<Line<'static>> {
    let selected = form.snapshot().set_items(FieldId::Interests);
    options
        .chunks(3)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .flat_map(|(col, &option)| {
                    let index = row * 3 + col;
                    let mark = if selected.iter().any(|s| s == option) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    let mut style = Style::default();
                    if is_active && index == form.option_cursor {
                        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                    }
                    [
                        Span::styled(format!("{mark} {option:<30}"), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
