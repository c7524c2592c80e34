use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokenscope_engine::{
    cost_display, text_counts, ModelKey, ModelTable, RequestId, ResolvedToken, Stats, TextCounts,
    EMPTY_AVG_LABEL, EMPTY_COST_DISPLAY,
};

use crate::view_model::AppViewModel;

/// Tokenize orchestration phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A tokenize request is waiting out its delay.
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenView {
    /// Token chips with their ids.
    #[default]
    Text,
    /// Bare id array.
    Ids,
}

impl fmt::Display for TokenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenView::Text => f.write_str("text"),
            TokenView::Ids => f.write_str("ids"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view {0:?} (expected text or ids)")]
pub struct ParseTokenViewError(pub String);

impl FromStr for TokenView {
    type Err = ParseTokenViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(TokenView::Text),
            "ids" | "id" => Ok(TokenView::Ids),
            _ => Err(ParseTokenViewError(s.to_string())),
        }
    }
}

/// Output of the most recent completed tokenization.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenResults {
    /// Model whose offsets the ids carry; may differ from the active model.
    pub model: ModelKey,
    pub tokens: Vec<ResolvedToken>,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    models: ModelTable,
    input: String,
    model: ModelKey,
    view: TokenView,
    phase: Phase,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    counts: TextCounts,
    token_count: usize,
    token_count_label: String,
    avg_label: String,
    cost_display: String,
    cost_model_label: String,
    results: Option<TokenResults>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ModelTable::builtin())
    }
}

impl AppState {
    pub fn new(models: ModelTable) -> Self {
        let mut state = Self {
            models,
            input: String::new(),
            model: ModelKey::default(),
            view: TokenView::default(),
            phase: Phase::Idle,
            next_request_id: 1,
            pending_request: None,
            counts: text_counts(""),
            token_count: 0,
            token_count_label: String::new(),
            avg_label: String::new(),
            cost_display: String::new(),
            cost_model_label: String::new(),
            results: None,
            dirty: false,
        };
        state.reset_display();
        state.dirty = false;
        state
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn model(&self) -> ModelKey {
        self.model
    }

    pub fn token_view(&self) -> TokenView {
        self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    pub fn models(&self) -> &ModelTable {
        &self.models
    }

    pub fn counts(&self) -> &TextCounts {
        &self.counts
    }

    pub fn results(&self) -> Option<&TokenResults> {
        self.results.as_ref()
    }

    pub(crate) fn token_count_label(&self) -> &str {
        &self.token_count_label
    }

    pub(crate) fn avg_label(&self) -> &str {
        &self.avg_label
    }

    pub(crate) fn cost_display(&self) -> &str {
        &self.cost_display
    }

    pub(crate) fn cost_model_label(&self) -> &str {
        &self.cost_model_label
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.counts = text_counts(&text);
        self.input = text;
        self.mark_dirty();
    }

    pub(crate) fn set_view(&mut self, view: TokenView) {
        if self.view != view {
            self.view = view;
            self.mark_dirty();
        }
    }

    /// Switches the active model and reprices the tokens already on display.
    pub(crate) fn select_model(&mut self, model: ModelKey) {
        self.model = model;
        let profile = self.models.profile(model);
        if self.token_count > 0 {
            self.cost_display = cost_display(self.token_count, profile);
        }
        self.cost_model_label = profile.cost_model_label();
        self.mark_dirty();
    }

    pub(crate) fn start_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        self.phase = Phase::Pending;
        self.mark_dirty();
        request_id
    }

    /// Drops any outstanding request; its completion will be ignored.
    pub(crate) fn abandon_request(&mut self) {
        self.pending_request = None;
        self.phase = Phase::Idle;
    }

    pub(crate) fn apply_results(
        &mut self,
        model: ModelKey,
        tokens: Vec<ResolvedToken>,
        stats: Stats,
    ) {
        self.abandon_request();
        self.token_count = stats.token_count;
        self.token_count_label = stats.token_count_label.clone();
        self.avg_label = stats.avg_label.clone();
        self.cost_display = stats.cost_display.clone();
        self.cost_model_label = self.models.profile(model).cost_model_label();
        self.results = Some(TokenResults {
            model,
            tokens,
            stats,
        });
        self.mark_dirty();
    }

    pub(crate) fn reset_display(&mut self) {
        self.token_count = 0;
        self.token_count_label = "0".to_string();
        self.avg_label = EMPTY_AVG_LABEL.to_string();
        self.cost_display = EMPTY_COST_DISPLAY.to_string();
        self.cost_model_label = self.models.profile(self.model).cost_model_label();
        self.results = None;
        self.mark_dirty();
    }
}
