//! Thank-you screen with the dropping success banner

use crate::app::App;
use crate::state::LeadSource;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BANNER_WIDTH: u16 = 30;
const BANNER_HEIGHT: u16 = 3;

fn follow_up(source: LeadSource) -> &'static str {
    match source {
        LeadSource::Download => "Your guide is on its way to your inbox.",
        LeadSource::Consultation => "We will be in touch shortly to arrange your consultation.",
    }
}

/// Draw the confirmation view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(follow_up(app.form.source())),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to submit another request.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    let text_height = 6u16.min(area.height);
    let text_area = Rect {
        y: area.y + area.height.saturating_sub(text_height) / 2,
        height: text_height,
        ..area
    };
    frame.render_widget(message, text_area);

    if let Some(celebration) = &app.state.celebration {
        if !celebration.is_complete() {
            draw_banner(frame, area, celebration.drop_offset);
        }
    }
}

/// Banner resting above the message, `offset` rows higher while it drops in
fn draw_banner(frame: &mut Frame, area: Rect, offset: f32) {
    let rest_y = area.y + area.height.saturating_sub(BANNER_HEIGHT + 8) / 2;
    let lifted = offset.round().max(0.0) as u16;
    // Hidden until it enters the content area
    let Some(y) = rest_y.checked_sub(lifted).filter(|y| *y >= area.y) else {
        return;
    };

    let width = BANNER_WIDTH.min(area.width);
    let banner_area = Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height: BANNER_HEIGHT.min(area.height),
    };
    let banner = Paragraph::new(Span::styled(
        "✦ Request received ✦",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(banner, banner_area);
}
