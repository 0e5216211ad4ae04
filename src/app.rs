//! Application state and core logic

use crate::config::FormConfig;
use crate::draft::{DraftStore, FileStorage, MemoryStorage};
use crate::state::{AppState, Form, LeadForm, SubmissionState, View};
use crate::webhook::{LeadTransport, TransportError, WebhookClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

type DeliveryOutcome = Result<(), TransportError>;

/// Main application struct
pub struct App {
    /// Presentation state, updated through form events
    pub state: AppState,
    /// The lead form being filled in
    pub form: LeadForm,
    drafts: DraftStore,
    transport: Arc<dyn LeadTransport>,
    outcome_tx: mpsc::UnboundedSender<DeliveryOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<DeliveryOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app from configuration
    pub fn new(config: &FormConfig) -> Result<Self> {
        let transport = WebhookClient::new(
            config.endpoint()?,
            config.timeout(),
            config.opaque_delivery(),
        )?;
        tracing::info!(endpoint = transport.endpoint(), "leads are posted to the webhook");
        let form = LeadForm::new(config.step_layout()?, config.lead_source());

        let drafts = match FileStorage::default_dir() {
            Some(dir) => DraftStore::new(FileStorage::new(dir)),
            None => {
                tracing::warn!("no data directory available; drafts last for this session only");
                DraftStore::new(MemoryStorage::default())
            }
        };

        Ok(Self::with_parts(form, drafts, Arc::new(transport)))
    }

    /// Assemble the app and pre-fill the form from any saved draft
    pub fn with_parts(
        form: LeadForm,
        drafts: DraftStore,
        transport: Arc<dyn LeadTransport>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::new(),
            form,
            drafts,
            transport,
            outcome_tx,
            outcome_rx,
            quit: false,
        };
        app.restore_draft();
        app
    }

    fn restore_draft(&mut self) {
        if let Some(draft) = self.drafts.load() {
            tracing::info!("restored saved draft");
            self.form.apply_draft(&draft, &mut self.state);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something is animating or waiting and the UI should redraw often
    pub fn is_busy(&self) -> bool {
        self.state.is_celebrating() || self.state.submission == SubmissionState::Pending
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.advance_or_submit(),
            KeyCode::Char('n') if ctrl => self.next_step(),
            KeyCode::Char('p') if ctrl => self.previous_step(),
            KeyCode::PageDown => self.next_step(),
            KeyCode::PageUp | KeyCode::Esc => self.previous_step(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(&mut self.state),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(&mut self.state),
            KeyCode::Enter => {
                let on_last_field = self.form.active_field() + 1 >= self.form.field_count();
                if on_last_field {
                    self.advance_or_submit();
                } else {
                    self.form.focus_next(&mut self.state);
                }
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !ctrl => self.form.input_char(c),
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        if self.state.is_celebrating() {
            if let Some(celebration) = self.state.celebration.as_mut() {
                celebration.skip();
            }
            return;
        }
        match key.code {
            KeyCode::Enter => self.reset(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn next_step(&mut self) {
        self.form.blur_active(&mut self.state);
        self.form.go_next(&mut self.state);
    }

    fn previous_step(&mut self) {
        self.form.blur_active(&mut self.state);
        self.form.go_previous(&mut self.state);
    }

    /// Next step, or submit once the final step is showing
    fn advance_or_submit(&mut self) {
        if self.form.step_state().is_last() {
            self.submit();
        } else {
            self.next_step();
        }
    }

    /// Validate and dispatch the lead without blocking the UI.
    ///
    /// Only the final step sends; earlier steps have not been shown yet.
    pub fn submit(&mut self) {
        if !self.form.step_state().is_last() {
            tracing::debug!(
                step = self.form.current_step(),
                "submit ignored before the final step"
            );
            return;
        }
        let Some(payload) = self.form.begin_submit(&self.drafts, &mut self.state) else {
            return;
        };
        let transport = Arc::clone(&self.transport);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = transport.deliver(&payload).await;
            if tx.send(outcome).is_err() {
                tracing::warn!("delivery finished after the form closed");
            }
        });
    }

    /// Apply any delivery outcome that arrived since the last frame
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.form.finish_submit(outcome, &self.drafts, &mut self.state);
        }
    }

    /// Start over with a fresh form, pre-filled from the saved draft
    pub fn reset(&mut self) {
        self.form.reset(&mut self.state);
        self.state.dismiss_error();
        self.restore_draft();
    }

    /// Advance time-based animation
    pub fn tick(&mut self, terminal_height: u16) {
        self.state.update_celebration(terminal_height);
    }
}
