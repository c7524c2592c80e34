use crate::{BaselineId, Dictionary, ModelKey, ModelTable, TokenId, TokenSpan};

/// Lowest baseline id handed out to text missing from the dictionary.
pub const FALLBACK_BASE: BaselineId = 50_000;
/// Width of the fallback band; baseline fallbacks lie in `[50000, 99999]`.
pub const FALLBACK_RANGE: BaselineId = 50_000;

/// Deterministic id for text absent from the dictionary.
///
/// Rolling hash `h = 31 * h + c` wrapped to a signed 32-bit integer, folded
/// into the fallback band. `i32::MIN` folds as 2^31.
pub fn fallback_id(text: &str) -> BaselineId {
    let hash = text
        .chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    hash.unsigned_abs() % FALLBACK_RANGE + FALLBACK_BASE
}

/// Maps spans to ids: dictionary or fallback, then the model's offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolver {
    dictionary: Dictionary,
    models: ModelTable,
}

impl Resolver {
    pub fn new(dictionary: Dictionary, models: ModelTable) -> Self {
        Self { dictionary, models }
    }

    pub fn baseline_id(&self, text: &str) -> BaselineId {
        self.dictionary
            .get(text)
            .unwrap_or_else(|| fallback_id(text))
    }

    pub fn resolve(&self, span: &TokenSpan<'_>, model: ModelKey) -> TokenId {
        let offset = self.models.profile(model).id_offset;
        TokenId::from(self.baseline_id(span.text)) + TokenId::from(offset)
    }

    pub fn models(&self) -> &ModelTable {
        &self.models
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Dictionary::builtin(), ModelTable::builtin())
    }
}
