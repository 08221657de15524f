//! Centered modal overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What to show in a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Border and title color
    pub accent: Color,
    /// Plain text, `\n` separates paragraphs
    pub message: &'a str,
    /// Dimmed line under the message
    pub hint: Option<&'a str>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "",
            accent: Color::Cyan,
            message: "",
            hint: None,
            max_width: 50,
        }
    }
}

/// Render a dialog over the middle of the frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    // 2 borders + 1 space each side
    let chrome = 4u16;
    let text_width = config.max_width.min(area.width).saturating_sub(chrome).max(1);
    let lines = wrap_text(config.message, text_width as usize);

    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(config.hint.map(|h| h.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (widest.max(config.title.chars().count() as u16 + 2) + chrome)
        .min(config.max_width)
        .min(area.width);
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (lines.len() as u16 + hint_rows + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut content: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(format!(" {l}")))
        .collect();
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(Paragraph::new(content).block(block), dialog_area);
}

/// Greedy word wrap; an over-long word gets a line to itself
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
