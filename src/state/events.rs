//! Notifications the form core sends to whatever renders it

use super::forms::{FieldId, SubmissionState, ValidationError};

/// Callback contract between the form state machine and the presentation layer
#[cfg_attr(test, mockall::automock)]
pub trait FormEvents {
    /// A different step is now visible
    fn on_step_changed(&mut self, step: usize);

    /// A field failed validation
    fn on_field_error(&mut self, field: FieldId, error: &ValidationError);

    /// A field passed validation
    fn on_field_valid(&mut self, field: FieldId);

    /// Any indicator on the field should be removed
    fn on_field_cleared(&mut self, field: FieldId);

    fn on_submit_state_changed(&mut self, state: SubmissionState);

    /// Single user-visible message for a failed delivery
    fn on_submit_error(&mut self, message: &str);

    /// Play the success effect
    fn on_celebrate(&mut self);
}
