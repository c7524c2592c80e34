use tokenscope_engine::{format_id_list, visible_whitespace, ModelKey, SpanKind};

use crate::{AppState, Phase, TokenView};

pub const TOKENIZE_LABEL: &str = "Tokenize";
pub const TOKENIZE_PENDING_LABEL: &str = "Processing";
pub const EMPTY_HINT: &str = "Enter text to see tokenization";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub model: ModelKey,
    pub model_name: String,
    pub view: TokenView,
    pub char_count_label: String,
    pub word_label: String,
    pub token_count_label: String,
    pub avg_label: String,
    pub cost_display: String,
    pub cost_model_label: String,
    pub tokenize_label: &'static str,
    pub tokenize_enabled: bool,
    pub chips: Vec<TokenChipView>,
    /// Shown instead of chips when there are no results.
    pub empty_hint: Option<&'static str>,
    pub id_list: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChipView {
    pub id_label: String,
    pub text: String,
    pub kind: SpanKind,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let pending = state.phase() == Phase::Pending;
        let (chips, empty_hint, id_list) = match state.results() {
            Some(results) => (
                results
                    .tokens
                    .iter()
                    .map(|token| TokenChipView {
                        id_label: format!("#{}", token.id),
                        text: match token.kind {
                            SpanKind::Whitespace => visible_whitespace(&token.text),
                            _ => token.text.clone(),
                        },
                        kind: token.kind,
                    })
                    .collect(),
                None,
                format_id_list(&results.tokens),
            ),
            None => (Vec::new(), Some(EMPTY_HINT), String::new()),
        };

        Self {
            phase: state.phase(),
            model: state.model(),
            model_name: state.models().profile(state.model()).display_name.clone(),
            view: state.token_view(),
            char_count_label: state.counts().char_count_label.clone(),
            word_label: state.counts().word_label.clone(),
            token_count_label: state.token_count_label().to_string(),
            avg_label: state.avg_label().to_string(),
            cost_display: state.cost_display().to_string(),
            cost_model_label: state.cost_model_label().to_string(),
            tokenize_label: if pending {
                TOKENIZE_PENDING_LABEL
            } else {
                TOKENIZE_LABEL
            },
            tokenize_enabled: !pending,
            chips,
            empty_hint,
            id_list,
            dirty: state.is_dirty(),
        }
    }
}
