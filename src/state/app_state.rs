//! Application state definitions

use super::celebration_state::CelebrationState;
use super::events::FormEvents;
use super::forms::{FieldId, SubmissionState, ValidationError};
use std::collections::HashMap;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The wizard itself
    #[default]
    Form,
    /// Thank-you screen shown after delivery
    Confirmation,
}

/// Inline indicator shown next to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    Valid,
    Error(String),
}

/// Presentation state, fed by the form through [`FormEvents`]
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Step currently shown (1-based)
    pub current_step: usize,
    pub feedback: HashMap<FieldId, FieldFeedback>,
    pub submission: SubmissionState,
    /// Delivery error waiting to be dismissed
    pub error_message: Option<String>,
    pub celebration: Option<CelebrationState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            ..Default::default()
        }
    }

    pub fn feedback_for(&self, field: FieldId) -> Option<&FieldFeedback> {
        self.feedback.get(&field)
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Advance the celebration and drop it once it has played
    pub fn update_celebration(&mut self, terminal_height: u16) {
        if let Some(ref mut celebration) = self.celebration {
            celebration.update(terminal_height);
            if celebration.is_complete() {
                self.celebration = None;
            }
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.as_ref().is_some_and(|c| !c.is_complete())
    }
}

impl FormEvents for AppState {
    fn on_step_changed(&mut self, step: usize) {
        self.current_step = step;
    }

    fn on_field_error(&mut self, field: FieldId, error: &ValidationError) {
        self.feedback
            .insert(field, FieldFeedback::Error(error.to_string()));
    }

    fn on_field_valid(&mut self, field: FieldId) {
        self.feedback.insert(field, FieldFeedback::Valid);
    }

    fn on_field_cleared(&mut self, field: FieldId) {
        self.feedback.remove(&field);
    }

    fn on_submit_state_changed(&mut self, state: SubmissionState) {
        self.submission = state;
        match state {
            SubmissionState::Pending => self.error_message = None,
            SubmissionState::Succeeded => self.current_view = View::Confirmation,
            SubmissionState::Idle => {
                self.current_view = View::Form;
                self.celebration = None;
            }
            SubmissionState::Failed => {}
        }
    }

    fn on_submit_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }

    fn on_celebrate(&mut self) {
        self.celebration = Some(CelebrationState::new());
    }
}
