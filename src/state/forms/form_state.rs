//! The lead form: fixed fields, step layout and submission lifecycle

use super::field::{FieldId, FieldKind, FormField};
use super::phone;
use super::steps::{StepController, StepLayout, StepState};
use super::submission::{LeadPayload, LeadSource, SubmissionController, SubmissionState};
use super::validation::{self, ValidationReport};
use crate::draft::{DraftStore, FormDraft};
use crate::state::FormEvents;
use crate::webhook::TransportError;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Lead capture wizard state
#[derive(Debug, Clone)]
pub struct LeadForm {
    fields: Vec<FormField>,
    layout: StepLayout,
    steps: StepController,
    submission: SubmissionController,
    source: LeadSource,
    /// Index of the focused field within the visible step
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new(layout: StepLayout, source: LeadSource) -> Self {
        let steps = StepController::new(layout.total_steps());
        Self {
            fields: FieldId::ALL.iter().map(|id| FormField::new(*id)).collect(),
            layout,
            steps,
            submission: SubmissionController::new(),
            source,
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        let index = FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0);
        &self.fields[index]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        let index = FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0);
        &mut self.fields[index]
    }

    pub fn step_state(&self) -> StepState {
        self.steps.state()
    }

    pub fn current_step(&self) -> usize {
        self.steps.current()
    }

    pub fn progress(&self) -> f64 {
        self.steps.progress()
    }

    pub fn is_step_completed(&self, step: usize) -> bool {
        self.steps.is_completed(step)
    }

    pub fn source(&self) -> LeadSource {
        self.source
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self) -> bool {
        self.submission.accepts_submission()
    }

    /// Ids of the fields on the visible step
    pub fn visible_fields(&self) -> &[FieldId] {
        self.layout.fields(self.steps.current())
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(id) = self.active_field_id() else {
            return;
        };
        let field = self.field_mut(id);
        field.push_char(c);
        if field.spec.kind == FieldKind::Phone {
            let formatted = phone::format(field.as_text());
            field.set_text(formatted);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(id) = self.active_field_id() else {
            return;
        };
        let field = self.field_mut(id);
        field.pop_char();
        if field.spec.kind == FieldKind::Phone {
            let formatted = phone::format(field.as_text());
            field.set_text(formatted);
        }
    }

    /// Move focus forward, running the blur check on the field being left
    pub fn focus_next(&mut self, events: &mut dyn FormEvents) {
        self.blur_active(events);
        self.next_field();
    }

    pub fn focus_prev(&mut self, events: &mut dyn FormEvents) {
        self.blur_active(events);
        self.prev_field();
    }

    /// Focus leaves the active field; emails are checked on the spot
    pub fn blur_active(&mut self, events: &mut dyn FormEvents) {
        if let Some(id) = self.active_field_id() {
            let field = self.field(id);
            if field.spec.kind == FieldKind::Email {
                validation::check_email_on_blur(field, events);
            }
        }
    }

    /// Validate the visible step without moving
    pub fn validate_step(&self, events: &mut dyn FormEvents) -> ValidationReport {
        let ids = self.visible_fields();
        validation::validate(ids.iter().map(|id| self.field(*id)), events)
    }

    /// Validate every field of every step
    pub fn validate_all(&self, events: &mut dyn FormEvents) -> ValidationReport {
        validation::validate(&self.fields, events)
    }

    /// Validate the visible step and advance when it passes.
    ///
    /// Returns the validation outcome; the step is unchanged on failure.
    pub fn go_next(&mut self, events: &mut dyn FormEvents) -> ValidationReport {
        let report = self.validate_step(events);
        if !report.is_valid() {
            self.focus_first_failure(&report);
            return report;
        }
        if let Some(step) = self.steps.advance() {
            self.active_field_index = 0;
            events.on_step_changed(step);
        }
        report
    }

    /// Go back one step without validation
    pub fn go_previous(&mut self, events: &mut dyn FormEvents) {
        if let Some(step) = self.steps.retreat() {
            self.active_field_index = 0;
            events.on_step_changed(step);
        }
    }

    /// Fill the remembered fields from a saved draft.
    ///
    /// A restored email is checked immediately so its indicator shows.
    pub fn apply_draft(&mut self, draft: &FormDraft, events: &mut dyn FormEvents) {
        let restored = [
            (FieldId::FullName, &draft.full_name),
            (FieldId::Email, &draft.email),
            (FieldId::CompanyName, &draft.company_name),
        ];
        for (id, value) in restored {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                self.field_mut(id).set_text(value);
            }
        }
        if draft.email.as_deref().is_some_and(|v| !v.is_empty()) {
            validation::check_email_on_blur(self.field(FieldId::Email), events);
        }
    }

    /// The subset of values remembered between visits
    pub fn draft(&self) -> FormDraft {
        let value = |id| {
            let text = self.field(id).as_text().trim();
            (!text.is_empty()).then(|| text.to_string())
        };
        FormDraft {
            full_name: value(FieldId::FullName),
            email: value(FieldId::Email),
            company_name: value(FieldId::CompanyName),
        }
    }

    /// Validate the whole form, remember the draft and enter `Pending`.
    ///
    /// Returns the payload to deliver, or `None` when the form is invalid
    /// or a submission is already in flight or done.
    pub fn begin_submit(
        &mut self,
        drafts: &DraftStore,
        events: &mut dyn FormEvents,
    ) -> Option<LeadPayload> {
        if !self.submission.accepts_submission() {
            return None;
        }
        let report = self.validate_all(events);
        if !report.is_valid() {
            tracing::debug!(failures = report.failures.len(), "submission blocked by validation");
            self.focus_first_failure(&report);
            return None;
        }

        let payload = LeadPayload::build(&self.fields, self.source);
        drafts.save(&self.draft());
        if !self.submission.start(events) {
            return None;
        }
        Some(payload)
    }

    /// Apply the delivery outcome; a delivered lead forgets its draft
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), TransportError>,
        drafts: &DraftStore,
        events: &mut dyn FormEvents,
    ) -> SubmissionState {
        let state = self.submission.complete(outcome, events);
        if state == SubmissionState::Succeeded {
            drafts.clear();
        }
        state
    }

    /// Start over: empty fields, step 1, no indicators, idle submission
    pub fn reset(&mut self, events: &mut dyn FormEvents) {
        for field in &mut self.fields {
            field.clear();
            events.on_field_cleared(field.id());
        }
        self.steps.reset();
        self.submission.reset(events);
        self.active_field_index = 0;
        events.on_step_changed(self.steps.current());
    }

    /// Jump to the step and field of the first reported failure
    fn focus_first_failure(&mut self, report: &ValidationReport) {
        let Some((id, _)) = report.first() else {
            return;
        };
        if self.layout.step_of(*id) != Some(self.steps.current()) {
            return;
        }
        if let Some(index) = self.visible_fields().iter().position(|f| f == id) {
            self.active_field_index = index;
        }
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(StepLayout::default(), LeadSource::default())
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}
