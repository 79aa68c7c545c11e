// stemma-en: English stemming engine.
//
// The engine reduces an inflected English word to its stem with the
// suffix-stripping algorithm of Porter, 1980, "An algorithm for suffix
// stripping" (Program, Vol. 14, no. 3, pp 130-137), including the two
// documented departures of the widely circulated reference code
// ("bli" -> "ble" instead of "abli" -> "able", and the extra
// "logi" -> "log" rule). Downstream word-frequency output depends on
// this exact variant, so the departures are kept as-is.

pub mod porter;

pub use porter::{PorterStemmer, stem_word};

/// Error type for stemmer construction failures.
#[derive(Debug, thiserror::Error)]
pub enum StemError {
    /// No stemmer is available for the requested language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Trait for stemming algorithms.
///
/// `stem` is the single real entry point; the sentence and document
/// wrappers iterate it over whitespace tokens and lines. Words never
/// interact, so implementations are expected to be re-entrant per call.
pub trait Stemmer {
    /// Reduce one word to its stem.
    ///
    /// Total over any input: words the rules cannot act on come back
    /// unchanged, and the result is never longer than the input.
    fn stem(&self, word: &str) -> String;

    /// Stem every whitespace-separated token of `sentence` independently
    /// and rejoin with single spaces. Whitespace style is not preserved.
    fn stem_sentence(&self, sentence: &str) -> String {
        let stems: Vec<String> = stemma_core::segment::words(sentence)
            .map(|w| self.stem(w))
            .collect();
        stems.join(" ")
    }

    /// Stem a document line by line. The output has exactly as many lines
    /// as the input; empty lines stay empty.
    fn stem_document(&self, document: &str) -> String {
        let lines: Vec<String> = stemma_core::segment::lines(document)
            .map(|line| self.stem_sentence(line))
            .collect();
        lines.join("\n")
    }
}
