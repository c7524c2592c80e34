use tokenscope_engine::{ModelKey, RequestId, ResolvedToken, Stats};

use crate::TokenView;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the input text.
    InputChanged(String),
    /// User asked for the current input to be tokenized.
    TokenizeClicked,
    /// Engine finished a scheduled tokenization.
    TokenizeCompleted {
        request_id: RequestId,
        model: ModelKey,
        tokens: Vec<ResolvedToken>,
        stats: Stats,
    },
    /// User cleared the input.
    ClearClicked,
    /// User asked for the active model's example text.
    ExampleClicked,
    /// User switched the active model.
    ModelSelected(ModelKey),
    /// User switched between the chip view and the id array view.
    ViewSelected(TokenView),
    /// Fallback for placeholder wiring.
    NoOp,
}
