// Whitespace and line segmentation, plus the document statistics the
// word-frequency tools are built on.
//
// Segmentation here is deliberately minimal: a word is a maximal run of
// non-whitespace characters and a document is a sequence of lines. No
// punctuation handling, no Unicode normalization.

use std::collections::HashSet;

/// Iterate over the words of a piece of text (maximal runs of
/// non-whitespace characters).
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Iterate over the lines of a document.
///
/// Unlike `str::lines`, a trailing newline does not produce a phantom
/// final line, matching the convention that an `N`-line input maps to an
/// `N`-line output.
pub fn lines(document: &str) -> impl Iterator<Item = &str> {
    document.split('\n')
}

/// Count the words of a document across all lines.
pub fn word_count(document: &str) -> usize {
    lines(document).map(|line| words(line).count()).sum()
}

/// Count the distinct words of a document across all lines.
pub fn unique_word_count(document: &str) -> usize {
    let mut seen: HashSet<&str> = HashSet::new();
    for line in lines(document) {
        for word in words(line) {
            seen.insert(word);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- words --

    #[test]
    fn words_splits_on_any_whitespace() {
        let w: Vec<&str> = words("one  two\tthree").collect();
        assert_eq!(w, ["one", "two", "three"]);
    }

    #[test]
    fn words_of_empty_text() {
        assert_eq!(words("").count(), 0);
        assert_eq!(words("   ").count(), 0);
    }

    // -- lines --

    #[test]
    fn lines_preserves_empty_lines() {
        let l: Vec<&str> = lines("a\n\nb").collect();
        assert_eq!(l, ["a", "", "b"]);
    }

    #[test]
    fn lines_of_empty_document() {
        let l: Vec<&str> = lines("").collect();
        assert_eq!(l, [""]);
    }

    // -- counts --

    #[test]
    fn word_count_over_lines() {
        assert_eq!(word_count("one two\nthree\n\nfour five six"), 6);
    }

    #[test]
    fn word_count_of_empty_document() {
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn unique_word_count_merges_repeats() {
        assert_eq!(unique_word_count("cat dog\ncat\ncat dog bird"), 3);
    }

    #[test]
    fn unique_word_count_is_case_sensitive() {
        // No normalization happens at this layer.
        assert_eq!(unique_word_count("Cat cat"), 2);
    }
}
