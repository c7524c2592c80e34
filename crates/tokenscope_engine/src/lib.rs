//! Tokenscope engine: span segmentation, id resolution, statistics and the
//! delayed tokenize worker.
mod dictionary;
mod engine;
mod estimator;
mod format;
mod model;
mod resolve;
mod segment;
mod stats;
mod token;
mod types;

pub use dictionary::Dictionary;
pub use engine::{EngineHandle, TokenizeRequest};
pub use estimator::Estimator;
pub use format::{format_id_list, format_with_commas, to_fixed, visible_whitespace};
pub use model::{ModelKey, ModelProfile, ModelTable, ParseModelKeyError};
pub use resolve::{fallback_id, Resolver, FALLBACK_BASE, FALLBACK_RANGE};
pub use segment::{Segmenter, PUNCTUATION};
pub use stats::{
    cost_display, summarize, text_counts, Stats, TextCounts, EMPTY_AVG_LABEL, EMPTY_COST_DISPLAY,
};
pub use token::{WhitespaceWordCounter, WordCounter};
pub use types::{
    BaselineId, EngineError, EngineEvent, RequestId, ResolvedToken, SpanKind, TokenId, TokenSpan,
};
