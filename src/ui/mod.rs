//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Form => forms::draw_lead_form(frame, main_area, app),
        View::Confirmation => confirmation::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog on top of everything
    if let Some(message) = &app.state.error_message {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftStore, MemoryStorage};
    use crate::state::{FormEvents, LeadForm, LeadSource, StepLayout, SubmissionState};
    use crate::webhook::MockLeadTransport;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app(source: LeadSource) -> App {
        App::with_parts(
            LeadForm::new(StepLayout::multi_step(), source),
            DraftStore::new(MemoryStorage::default()),
            Arc::new(MockLeadTransport::new()),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_first_step_shows_its_fields_and_next() {
        let screen = render(&app(LeadSource::Consultation));
        assert!(screen.contains("Full Name"));
        assert!(screen.contains("Email"));
        assert!(screen.contains("Phone"));
        assert!(!screen.contains("Company Name"));
        assert!(screen.contains("Next"));
        assert!(screen.contains("Step 1 of 2"));
    }

    #[test]
    fn test_inline_error_is_rendered() {
        let mut app = app(LeadSource::Consultation);
        app.form.go_next(&mut app.state);
        let screen = render(&app);
        assert!(screen.contains("Full Name is required."));
    }

    #[test]
    fn test_last_step_shows_call_to_action() {
        let mut app = app(LeadSource::Download);
        app.form.field_mut(crate::state::FieldId::FullName).set_text("Kim");
        app.form
            .field_mut(crate::state::FieldId::Email)
            .set_text("kim@example.com");
        app.form
            .field_mut(crate::state::FieldId::Phone)
            .set_text("010-1234-5678");
        app.form.go_next(&mut app.state);

        let screen = render(&app);
        assert!(screen.contains("Company Name"));
        assert!(screen.contains("Download free guide"));
        assert!(screen.contains("Previous"));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = app(LeadSource::Consultation);
        app.state.on_submit_state_changed(SubmissionState::Failed);
        app.state.on_submit_error("Could not send your request.");
        let screen = render(&app);
        assert!(screen.contains("Could not send"));
    }

    #[test]
    fn test_confirmation_view() {
        let mut app = app(LeadSource::Consultation);
        app.state.on_submit_state_changed(SubmissionState::Succeeded);
        let screen = render(&app);
        assert!(screen.contains("Thank you"));
    }
}
