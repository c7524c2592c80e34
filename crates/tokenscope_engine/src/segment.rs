use regex::Regex;

use crate::{EngineError, SpanKind, TokenSpan};

/// Characters emitted as single-character punctuation spans.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

// Group 1: whitespace run, group 2: one punctuation mark, group 3: ASCII alphanumeric run.
const SPAN_PATTERN: &str = r#"(\s+)|([.,!?;:"'()\[\]{}])|([a-zA-Z0-9]+)"#;

/// Splits text into whitespace, punctuation and word spans.
///
/// Characters outside all three classes are skipped, so concatenating the
/// spans yields the input with those characters removed.
#[derive(Debug, Clone)]
pub struct Segmenter {
    pattern: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            pattern: Regex::new(SPAN_PATTERN)?,
        })
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<TokenSpan<'a>> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let kind = if caps.get(1).is_some() {
                    SpanKind::Whitespace
                } else if caps.get(2).is_some() {
                    SpanKind::Punctuation
                } else {
                    SpanKind::Word
                };
                caps.get(0).map(|m| TokenSpan::new(m.as_str(), kind))
            })
            .collect()
    }
}
