//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Header height: title, step markers, progress gauge
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title, step markers and progress gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.form.source().call_to_action()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let steps = app.form.step_state();
    if steps.total() > 1 {
        frame.render_widget(Paragraph::new(step_markers(app)), rows[1]);
    }

    // A delivered lead fills the bar
    let ratio = if app.state.current_view == View::Confirmation {
        1.0
    } else {
        app.form.progress()
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("Step {} of {}", steps.current(), steps.total()));
    frame.render_widget(gauge, rows[2]);
}

/// One marker per step: ticked when completed, highlighted when current
fn step_markers(app: &App) -> Line<'static> {
    let steps = app.form.step_state();
    let mut spans = vec![Span::raw(" ")];
    for step in 1..=steps.total() {
        let (marker, style) = if step == steps.current() {
            (
                format!("● {step}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if app.form.is_step_completed(step) {
            (format!("✓ {step}"), Style::default().fg(Color::Green))
        } else {
            (format!("○ {step}"), Style::default().fg(Color::DarkGray))
        };
        if step > 1 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(marker, style));
    }
    Line::from(spans)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.state.has_error() {
        "Enter/Esc:dismiss"
    } else {
        get_view_hints(app.state.current_view, app.form.step_state().is_last())
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray));
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

/// Get keyboard hints for the current view
fn get_view_hints(view: View, last_step: bool) -> &'static str {
    match view {
        View::Form if last_step => "Tab:next field  Space:toggle  Enter/^S:submit  PgUp:back",
        View::Form => "Tab:next field  Enter/^S:continue  PgDn/PgUp:step",
        View::Confirmation => "Enter:start over  q:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_header_and_status() {
        let (header, main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(main.height, 24 - HEADER_HEIGHT - 1);
    }

    #[test]
    fn test_hints_depend_on_step() {
        assert!(get_view_hints(View::Form, true).contains("submit"));
        assert!(!get_view_hints(View::Form, false).contains("submit"));
        assert!(get_view_hints(View::Confirmation, false).contains("start over"));
    }
}
