use crate::{
    summarize, Dictionary, EngineError, ModelKey, ModelTable, ResolvedToken, Resolver, Segmenter,
    Stats, TokenId, TokenSpan,
};

/// Segmenter plus resolver behind one read-only handle.
#[derive(Debug, Clone)]
pub struct Estimator {
    segmenter: Segmenter,
    resolver: Resolver,
}

impl Estimator {
    pub fn new(dictionary: Dictionary, models: ModelTable) -> Result<Self, EngineError> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            resolver: Resolver::new(dictionary, models),
        })
    }

    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(Dictionary::builtin(), ModelTable::builtin())
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<TokenSpan<'a>> {
        self.segmenter.segment(text)
    }

    pub fn resolve(&self, span: &TokenSpan<'_>, model: ModelKey) -> TokenId {
        self.resolver.resolve(span, model)
    }

    pub fn tokenize_all(&self, text: &str, model: ModelKey) -> Vec<ResolvedToken> {
        self.segment(text)
            .iter()
            .map(|span| ResolvedToken::from_span(span, self.resolve(span, model)))
            .collect()
    }

    pub fn summarize(&self, text: &str, tokens: &[ResolvedToken], model: ModelKey) -> Stats {
        summarize(text, tokens, self.models().profile(model))
    }

    pub fn models(&self) -> &ModelTable {
        self.resolver.models()
    }
}
