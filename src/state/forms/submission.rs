//! Submission lifecycle and payload packaging
//!
//! "Succeeded" means the webhook accepted the request. The transport reads
//! the response status, so a non-2xx answer counts as a failure unless
//! opaque delivery is configured, in which case any response is accepted
//! and success only means the request left this machine.

use super::field::{FieldKind, FormField};
use super::phone::strip_separators;
use crate::state::FormEvents;
use crate::webhook::TransportError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message shown when delivery fails
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Something went wrong while sending your details. Please try again shortly.";

/// Label of the submit affordance while a request is in flight
pub const SENDING_LABEL: &str = "Sending…";

/// Where the lead came from, attached to every payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    /// Free resource download page
    Download,
    /// Consultation and demo request page
    #[default]
    Consultation,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Download => "download",
            LeadSource::Consultation => "consultation",
        }
    }

    /// Idle label of the submit affordance
    pub fn call_to_action(&self) -> &'static str {
        match self {
            LeadSource::Download => "Download free guide",
            LeadSource::Consultation => "Request free consultation",
        }
    }
}

impl std::str::FromStr for LeadSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "download" => Ok(LeadSource::Download),
            "consultation" => Ok(LeadSource::Consultation),
            other => Err(format!("unknown lead source `{other}`")),
        }
    }
}

/// Flat record sent to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    pub lead_source: LeadSource,
}

impl LeadPayload {
    /// Package every field.
    ///
    /// Phone separators are removed and a ticked checkbox is sent as `"on"`;
    /// an unticked one is left out.
    pub fn build<'a>(fields: impl IntoIterator<Item = &'a FormField>, source: LeadSource) -> Self {
        let mut record = BTreeMap::new();
        for field in fields {
            let value = match field.spec.kind {
                FieldKind::Checkbox if field.is_checked() => "on".to_string(),
                FieldKind::Checkbox => continue,
                FieldKind::Phone => strip_separators(field.as_text().trim()),
                FieldKind::Text | FieldKind::Email => field.as_text().trim().to_string(),
            };
            record.insert(field.id().as_str().to_string(), value);
        }
        Self {
            fields: record,
            lead_source: source,
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Enforces the lifecycle transitions and the one-request-in-flight rule
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether a new attempt may start (idle, or retrying after a failure)
    pub fn accepts_submission(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }

    /// Enter `Pending`. Returns false when a request is in flight or the
    /// lead was already delivered.
    pub fn start(&mut self, events: &mut dyn FormEvents) -> bool {
        if !self.accepts_submission() {
            tracing::debug!(state = ?self.state, "submission ignored");
            return false;
        }
        self.transition(SubmissionState::Pending, events);
        true
    }

    /// Apply the outcome of the in-flight request
    pub fn complete(
        &mut self,
        outcome: Result<(), TransportError>,
        events: &mut dyn FormEvents,
    ) -> SubmissionState {
        if self.state != SubmissionState::Pending {
            tracing::warn!(state = ?self.state, "delivery outcome without a pending submission");
            return self.state;
        }
        match outcome {
            Ok(()) => {
                tracing::info!("lead delivered");
                self.transition(SubmissionState::Succeeded, events);
                events.on_celebrate();
            }
            Err(err) => {
                tracing::error!(error = %err, "lead delivery failed");
                self.transition(SubmissionState::Failed, events);
                events.on_submit_error(SUBMIT_ERROR_MESSAGE);
            }
        }
        self.state
    }

    /// Start over for a new lead
    pub fn reset(&mut self, events: &mut dyn FormEvents) {
        if self.state != SubmissionState::Idle {
            self.transition(SubmissionState::Idle, events);
        }
    }

    fn transition(&mut self, next: SubmissionState, events: &mut dyn FormEvents) {
        self.state = next;
        events.on_submit_state_changed(next);
    }
}
