pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Counts whitespace-delimited chunks of the trimmed text.
///
/// Independent of the segmenter: `"don't"` is one word here but three spans there.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWordCounter;

impl WordCounter for WhitespaceWordCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chunks_not_spans() {
        let counter = WhitespaceWordCounter;
        assert_eq!(counter.count("don't stop"), 2);
        assert_eq!(counter.count("  a\tb\n\nc  "), 3);
        assert_eq!(counter.count("   "), 0);
        assert_eq!(counter.count(""), 0);
    }
}
