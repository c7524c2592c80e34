use serde::Serialize;

use crate::format::{format_with_commas, to_fixed};
use crate::{ModelProfile, ResolvedToken, WhitespaceWordCounter, WordCounter};

pub const EMPTY_AVG_LABEL: &str = "No text entered";
pub const EMPTY_COST_DISPLAY: &str = "$0.00";

/// Character and word counts; these never wait on tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TextCounts {
    pub char_count: usize,
    pub word_count: usize,
    pub char_count_label: String,
    pub word_label: String,
}

/// Character and word counts for `text`.
///
/// Characters are Unicode scalar values, so an astral character counts once.
/// Words split on Unicode `White_Space`, which includes U+0085 and excludes
/// U+FEFF.
pub fn text_counts(text: &str) -> TextCounts {
    let char_count = text.chars().count();
    let word_count = if text.trim().is_empty() {
        0
    } else {
        WhitespaceWordCounter.count(text.trim())
    };
    TextCounts {
        char_count,
        word_count,
        char_count_label: format_with_commas(char_count as u64),
        word_label: format!("{} words", format_with_commas(word_count as u64)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub token_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    /// `None` when there are no words to divide by.
    pub avg_tokens_per_word: Option<f64>,
    pub estimated_cost: f64,
    pub token_count_label: String,
    pub avg_label: String,
    pub cost_display: String,
    pub char_count_label: String,
    pub word_label: String,
}

/// `$` plus the input-price cost of `token_count` tokens at four decimals.
pub fn cost_display(token_count: usize, profile: &ModelProfile) -> String {
    format!("${}", to_fixed(estimated_cost(token_count, profile), 4))
}

fn estimated_cost(token_count: usize, profile: &ModelProfile) -> f64 {
    (token_count as f64 / 1000.0) * profile.input_price_per_thousand
}

pub fn summarize(text: &str, tokens: &[ResolvedToken], profile: &ModelProfile) -> Stats {
    let counts = text_counts(text);
    let token_count = tokens.len();

    let (avg_tokens_per_word, avg_label, estimated_cost, cost_display) = if text.trim().is_empty()
    {
        (None, EMPTY_AVG_LABEL.to_string(), 0.0, EMPTY_COST_DISPLAY.to_string())
    } else {
        let (avg, label) = if counts.word_count > 0 {
            let avg = token_count as f64 / counts.word_count as f64;
            (Some(avg), format!("{} tokens per word", to_fixed(avg, 1)))
        } else {
            (None, format!("{token_count} tokens total"))
        };
        (
            avg,
            label,
            estimated_cost(token_count, profile),
            cost_display(token_count, profile),
        )
    };

    Stats {
        token_count,
        char_count: counts.char_count,
        word_count: counts.word_count,
        avg_tokens_per_word,
        estimated_cost,
        token_count_label: format_with_commas(token_count as u64),
        avg_label,
        cost_display,
        char_count_label: counts.char_count_label,
        word_label: counts.word_label,
    }
}
