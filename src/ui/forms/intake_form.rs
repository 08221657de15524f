//! The intake form: sectioned fields followed by the actions row

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FieldId, FormAction, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One vertical slot in the scrolling form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Heading(Section),
    Field(FieldId),
    Actions,
}

impl Row {
    fn height(self) -> u16 {
        match self {
            Row::Heading(_) => 1,
            Row::Field(field) => field_height(field),
            Row::Actions => BUTTON_HEIGHT,
        }
    }
}

fn rows(visible: &[FieldId]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(visible.len() + 8);
    let mut section = None;
    for &field in visible {
        if section != Some(field.section()) {
            section = Some(field.section());
            rows.push(Row::Heading(field.section()));
        }
        rows.push(Row::Field(field));
    }
    rows.push(Row::Actions);
    rows
}

/// Scroll just far enough that rows `start..end` end inside the viewport
fn scroll_offset(start: u16, end: u16, viewport: u16) -> u16 {
    end.saturating_sub(viewport).min(start)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let block = Block::default()
        .title(" HPAIR Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = form.visible_fields();
    let rows = rows(&visible);
    let active_row = match form.active() {
        Some(field) => Row::Field(field),
        None => Row::Actions,
    };

    // Top of each row in form coordinates
    let mut tops = Vec::with_capacity(rows.len());
    let mut y = 0u16;
    for row in &rows {
        tops.push(y);
        y = y.saturating_add(row.height());
    }

    let active_index = rows.iter().position(|&r| r == active_row).unwrap_or(0);
    // Keep the section heading above the active field in view when it fits
    let start = match active_index.checked_sub(1).map(|i| rows[i]) {
        Some(Row::Heading(_)) => tops[active_index - 1],
        _ => tops[active_index],
    };
    let end = tops[active_index] + rows[active_index].height();
    let offset = scroll_offset(start, end, inner.height);

    for (row, &top) in rows.iter().zip(&tops) {
        let height = row.height();
        if top < offset || top + height > offset + inner.height {
            continue;
        }
        let row_area = Rect {
            x: inner.x,
            y: inner.y + (top - offset),
            width: inner.width,
            height,
        };
        match *row {
            Row::Heading(section) => draw_heading(frame, row_area, section),
            Row::Field(field) => draw_field(frame, row_area, form, field),
            Row::Actions => draw_actions(frame, row_area, app),
        }
    }
}

fn draw_heading(frame: &mut Frame, area: Rect, section: Section) {
    let heading = Paragraph::new(Line::from(Span::styled(
        section.title(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_row = form.is_buttons_row_active();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(FormAction::ALL.map(|_| Constraint::Ratio(1, FormAction::ALL.len() as u32)))
        .split(area);

    let restore_label = match app.drafts.len() {
        0 => FormAction::RestoreDraft.label().to_string(),
        n => format!("{} ({n})", FormAction::RestoreDraft.label()),
    };

    for (i, action) in FormAction::ALL.iter().copied().enumerate() {
        let (label, enabled, accent) = match action {
            FormAction::Submit if app.state.submitting => ("Submitting...", false, None),
            FormAction::Submit => (
                action.label(),
                true,
                Some(if form.is_valid() {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
            FormAction::RestoreDraft => (restore_label.as_str(), !app.drafts.is_empty(), None),
            _ => (action.label(), true, None),
        };
        render_button(
            frame,
            chunks[i],
            label,
            on_row && form.selected_action() == action,
            enabled,
            accent,
        );
    }
}
