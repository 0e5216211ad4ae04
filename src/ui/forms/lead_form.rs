//! Lead form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, SubmissionState, SENDING_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form card gets on large terminals
const MAX_FORM_WIDTH: u16 = 64;

/// Bordered single-line button
const BUTTON_HEIGHT: u16 = 3;

/// How a step button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonRole {
    /// Going back
    Secondary,
    /// Next step or submit
    Primary,
    /// Submit while the form is not accepting a submission
    Disabled,
}

impl ButtonRole {
    fn styles(self) -> (Style, Style) {
        match self {
            ButtonRole::Primary => (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonRole::Secondary => (Style::default().fg(Color::Gray), Style::default()),
            ButtonRole::Disabled => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            ),
        }
    }
}

/// Draw the visible step of the lead form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(MAX_FORM_WIDTH);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(format!(" Step {} ", app.form.current_step()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let fields = app.form.visible_fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (idx, id) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            app.form.field(*id),
            idx == app.form.active_field(),
            app.state.feedback_for(*id),
        );
    }

    draw_buttons(frame, chunks[fields.len()], app);
}

/// Previous on the left, Next or the submit affordance on the right
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let steps = app.form.step_state();
    if !steps.is_first() {
        draw_button(frame, halves[0], "Previous [PgUp]", ButtonRole::Secondary);
    }

    if !steps.is_last() {
        draw_button(frame, halves[1], "Next [PgDn]", ButtonRole::Primary);
        return;
    }

    let label = if app.form.submission_state() == SubmissionState::Pending {
        SENDING_LABEL
    } else {
        app.form.source().call_to_action()
    };
    let role = if app.form.can_submit() {
        ButtonRole::Primary
    } else {
        ButtonRole::Disabled
    };
    draw_button(frame, halves[1], &format!("{label} [^S]"), role);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, role: ButtonRole) {
    let (border_style, text_style) = role.styles();
    let button = Paragraph::new(label)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_is_greyed_out() {
        let (border, text) = ButtonRole::Disabled.styles();
        assert_eq!(border.fg, Some(Color::DarkGray));
        assert_eq!(text.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_primary_button_is_highlighted() {
        let (border, text) = ButtonRole::Primary.styles();
        assert_eq!(border.fg, Some(Color::Cyan));
        assert!(text.add_modifier.contains(Modifier::BOLD));
    }
}
