//! Delivery error dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the failed-delivery message centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to edit and try again"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Not sent",
            color: Color::Red,
            message: error_message,
            hint,
            max_width: 60,
        },
    );
}
