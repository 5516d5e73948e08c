// src/state/mod.rs
use crate::api::{AnalysisResult, HistoryEntry};

/// Rendering state derived from whether an analysis is held. There is
/// no transition back to Empty; uploads only ever replace the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No analysis yet: the history list is the whole view.
    Empty,
    /// Stats, chart, table, plus a compact history panel.
    Loaded,
}

/// Core application state: the held analysis, the history list and the
/// upload busy flag, each mutated through exactly one entry point. All
/// mutations happen on the UI thread when a worker event is applied, so
/// no field is ever written concurrently.
#[derive(Default)]
pub struct AppState {
    analysis: Option<AnalysisResult>,
    history: Vec<HistoryEntry>,
    upload_busy: bool,
    selected_dataset: Option<i64>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        if self.analysis.is_some() {
            ViewState::Loaded
        } else {
            ViewState::Empty
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn upload_busy(&self) -> bool {
        self.upload_busy
    }

    /// Dataset id eligible for a report download: the current analysis
    /// or whichever history entry the user last selected.
    pub fn selected_dataset(&self) -> Option<i64> {
        self.selected_dataset
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Mark an upload as dispatched. Returns false (and changes
    /// nothing) if one is already in flight; a second attempt while
    /// busy is rejected rather than queued.
    pub fn begin_upload(&mut self) -> bool {
        if self.upload_busy {
            return false;
        }
        self.upload_busy = true;
        self.status_message = None;
        true
    }

    /// Settle a successful upload: the held analysis is replaced
    /// wholesale with the server payload. Clearing the busy flag is the
    /// final step of settlement.
    pub fn upload_succeeded(&mut self, result: AnalysisResult) {
        self.selected_dataset = result.id;
        self.analysis = Some(result);
        self.upload_busy = false;
    }

    /// Settle a failed upload: the prior analysis stays untouched and
    /// the failure is surfaced to the user. Busy flag cleared last.
    pub fn upload_failed(&mut self, message: String) {
        self.error_message = Some(message);
        self.upload_busy = false;
    }

    /// Replace the history list entirely. Never merged or deduplicated;
    /// the server's ordering is authoritative.
    pub fn replace_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = entries;
    }

    pub fn select_dataset(&mut self, id: i64) {
        self.selected_dataset = Some(id);
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
