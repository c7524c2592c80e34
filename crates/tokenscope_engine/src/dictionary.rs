use std::collections::HashMap;

use crate::BaselineId;

// Later duplicates override earlier ones, so "you" resolves to 345.
const BUILTIN_ENTRIES: &[(&str, BaselineId)] = &[
    (" ", 220),
    ("the", 464),
    ("to", 284),
    ("and", 290),
    ("a", 257),
    ("in", 287),
    ("is", 258),
    ("it", 262),
    ("you", 288),
    ("that", 271),
    ("he", 592),
    ("was", 284),
    ("for", 286),
    ("on", 287),
    ("are", 286),
    ("with", 289),
    ("as", 272),
    ("I", 40),
    ("his", 614),
    ("they", 315),
    (".", 13),
    (",", 11),
    ("?", 93),
    ("!", 95),
    (":", 14),
    (";", 16),
    ("token", 5450),
    ("tokenizer", 2360),
    ("GPT", 3363),
    ("Claude", 8695),
    ("Gemini", 22042),
    ("model", 2569),
    ("AI", 38388),
    ("Hello", 15496),
    ("hello", 15496),
    ("world", 995),
    ("Hi", 3686),
    ("hi", 3686),
    ("there", 1354),
    ("am", 575),
    ("using", 939),
    ("this", 362),
    ("text", 289),
    ("tokenizing", 9478),
    ("check", 2943),
    ("how", 640),
    ("works", 3827),
    ("Thank", 8394),
    ("thank", 8394),
    ("you", 345),
    ("example", 6907),
    ("of", 271),
    ("an", 307),
    ("The", 465),
    ("process", 3730),
    ("models", 2899),
    ("language", 1974),
    ("id", 589),
    ("ids", 6205),
    ("OpenAI", 15756),
    ("shows", 2455),
    ("website", 5576),
];

/// Read-only table of known literals and their baseline ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, BaselineId>,
}

impl Dictionary {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, BaselineId)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(text, id)| (text.into(), id))
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, text: &str) -> Option<BaselineId> {
        self.entries.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FALLBACK_BASE;

    #[test]
    fn later_duplicate_wins() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.get("you"), Some(345));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.get("The"), Some(465));
        assert_eq!(dictionary.get("the"), Some(464));
        assert_eq!(dictionary.get("THE"), None);
        assert_eq!(dictionary.get("the "), None);
    }

    #[test]
    fn builtin_ids_stay_below_fallback_range() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.len(), 61);
        assert!(dictionary.entries.values().all(|id| (1..FALLBACK_BASE).contains(id)));
    }
}
