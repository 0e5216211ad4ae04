//! Field rendering utilities for forms

use crate::state::{FieldFeedback, FieldKind, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the message line
pub const FIELD_HEIGHT: u16 = 4;

/// Border color for a field given focus and its last indicator
fn border_color(is_active: bool, feedback: Option<&FieldFeedback>) -> Color {
    match feedback {
        Some(FieldFeedback::Error(_)) => Color::Red,
        _ if is_active => Color::Cyan,
        Some(FieldFeedback::Valid) => Color::Green,
        None => Color::DarkGray,
    }
}

/// Draw a form field with its inline indicator beneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    feedback: Option<&FieldFeedback>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = Style::default().fg(border_color(is_active, feedback));
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if is_active && field.spec.kind != FieldKind::Checkbox {
        "▌"
    } else {
        ""
    };

    let mut spans = vec![Span::styled(field.display_value(), text_style)];
    if field.spec.kind == FieldKind::Checkbox {
        spans.push(Span::styled(
            " Space to toggle",
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));

    let required = if field.spec.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label(), required))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    let message = match feedback {
        Some(FieldFeedback::Error(text)) => {
            Line::from(Span::styled(format!(" {text}"), Style::default().fg(Color::Red)))
        }
        Some(FieldFeedback::Valid) => {
            Line::from(Span::styled(" ✓", Style::default().fg(Color::Green)))
        }
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(message), chunks[1]);
}
