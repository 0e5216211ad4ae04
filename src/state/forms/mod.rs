//! Form domain layer
//!
//! Field model, validation, phone formatting, step navigation and the
//! submission lifecycle of the lead form. Nothing here touches the terminal.

mod field;
mod form_state;
mod phone;
mod steps;
mod submission;
mod validation;

pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{Form, LeadForm};
pub use steps::StepLayout;
pub use submission::{LeadPayload, LeadSource, SubmissionState, SENDING_LABEL};
pub use validation::ValidationError;
