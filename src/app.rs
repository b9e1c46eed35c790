//! Application state and core logic

use crate::config::LeadTuiConfig;
use crate::delivery::{DeliveryError, LeadSink, WebhookClient};
use crate::state::{AppState, SubmissionState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sink the captured leads are delivered to
    sink: Arc<dyn LeadSink>,
    /// Handle of the in-flight delivery, if any
    inflight: Option<JoinHandle<Result<(), DeliveryError>>>,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance with the configured webhook client
    pub fn new() -> Result<Self> {
        let config = LeadTuiConfig::load().unwrap_or_default();
        let sink = Arc::new(WebhookClient::new(&config)?);
        Ok(Self::with_sink(sink))
    }

    /// Create an App backed by an arbitrary lead sink
    pub fn with_sink(sink: Arc<dyn LeadSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            inflight: None,
            terminal_size: None,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let submitting = self.state.submission.is_submitting();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Enter => self.begin_submit(),
            KeyCode::Esc => self.dismiss_feedback(),
            // Inputs are disabled while a submission is in flight
            KeyCode::Char(c) if !submitting => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                    self.state.field_hint = None;
                }
            }
            KeyCode::Backspace if !submitting => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                    self.state.field_hint = None;
                }
            }
            _ => {}
        }
    }

    /// Dispatch the captured lead unless a submission is already in flight.
    pub fn begin_submit(&mut self) {
        // A second submit while one is in flight is ignored.
        if self.state.submission.is_submitting() {
            return;
        }

        // Required-field checks belong to the input surface; the offending
        // field gets focus together with a hint, and nothing is dispatched.
        if let Some((index, hint)) = self.state.form.first_invalid() {
            self.state.form.set_active_field(index);
            self.state.field_hint = Some(hint.to_string());
            return;
        }

        self.state.field_hint = None;
        self.state.submission = SubmissionState::Submitting;

        let sink = Arc::clone(&self.sink);
        let lead = self.state.form.to_lead();
        self.inflight = Some(tokio::spawn(async move { sink.deliver(lead).await }));
    }

    /// Non-blocking check used by the event loop each tick
    pub async fn poll_delivery(&mut self) {
        if self.inflight.as_ref().is_some_and(|h| h.is_finished()) {
            self.resolve_delivery().await;
        }
    }

    /// Wait for the in-flight delivery and apply its outcome.
    ///
    /// The submitting flag clears on every exit path, including a panicked
    /// delivery task.
    pub async fn resolve_delivery(&mut self) {
        let Some(handle) = self.inflight.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!("delivery task failed to complete: {err}");
                self.state.submission = SubmissionState::Failed;
                return;
            }
        };

        match outcome {
            Ok(()) => {
                self.state.submission = SubmissionState::Succeeded;
                self.state.form.reset();
            }
            Err(err) => {
                tracing::error!("lead delivery failed: {err}");
                // Field values are kept so the visitor can retry.
                self.state.submission = SubmissionState::Failed;
            }
        }
    }

    /// Clear the outcome message and field hint
    fn dismiss_feedback(&mut self) {
        if !self.state.submission.is_submitting() {
            self.state.submission = SubmissionState::Idle;
        }
        self.state.field_hint = None;
    }

    fn scroll_up(&mut self) {
        self.state.page_scroll = self.state.page_scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        if self.state.page_scroll < self.max_page_scroll() {
            self.state.page_scroll += 1;
        }
    }

    /// Largest useful scroll offset for the page content
    fn max_page_scroll(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        // Page viewport = terminal minus signup section and status bar
        let viewport = height.saturating_sub(crate::ui::SIGNUP_HEIGHT + 1);
        (crate::ui::page_line_count() as u16).saturating_sub(viewport)
    }
}
