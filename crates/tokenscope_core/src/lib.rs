//! Tokenscope core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, ParseTokenViewError, Phase, TokenResults, TokenView};
pub use update::update;
pub use view_model::{
    AppViewModel, TokenChipView, EMPTY_HINT, TOKENIZE_LABEL, TOKENIZE_PENDING_LABEL,
};
