use serde::Serialize;
use thiserror::Error;

use crate::{ModelKey, Stats};

/// Dictionary and fallback id before any model offset.
pub type BaselineId = u32;
/// Baseline id plus model offset; wide enough that the sum never overflows.
pub type TokenId = u64;
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Whitespace,
    Punctuation,
    Word,
}

/// A slice of the input text as produced by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    pub text: &'a str,
    pub kind: SpanKind,
}

impl<'a> TokenSpan<'a> {
    pub fn new(text: &'a str, kind: SpanKind) -> Self {
        Self { text, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedToken {
    pub text: String,
    pub id: TokenId,
    pub kind: SpanKind,
}

impl ResolvedToken {
    pub fn from_span(span: &TokenSpan<'_>, id: TokenId) -> Self {
        Self {
            text: span.text.to_string(),
            id,
            kind: span.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    TokenizeCompleted {
        request_id: RequestId,
        model: ModelKey,
        tokens: Vec<ResolvedToken>,
        stats: Stats,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid span pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to start engine worker: {0}")]
    Worker(#[from] std::io::Error),
}
