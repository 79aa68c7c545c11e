// The mutable word buffer and region markers the suffix rules operate on.
//
// Terminology follows Porter, 1980: the live word occupies the inclusive
// index range [start, end] of the buffer, and `j` marks the cut point
// between a retained stem and a candidate suffix. `j` is stored as the
// stem length (one past the last stem index), so it stays a plain usize
// even when a matched suffix covers the whole word.

use stemma_core::character::is_consonant_at;

/// Word buffer plus region markers for one stemming operation.
///
/// A fresh buffer is built per word and discarded when the stem is
/// extracted, so nothing persists between words. Invariant:
/// `start <= j && j <= end + 1 && end < word.len()`.
pub struct StemBuffer {
    /// The characters of the word being stemmed.
    pub word: Vec<char>,
    /// First index of the word region. Always 0 for single-word stemming;
    /// kept so every region predicate is explicitly bounded on the left.
    pub start: usize,
    /// Inclusive index of the last character still part of the word.
    pub end: usize,
    /// Cut point: length of the stem in front of the most recently
    /// matched suffix. Only meaningful after a successful [`ends`] call.
    ///
    /// [`ends`]: StemBuffer::ends
    pub j: usize,
}

impl StemBuffer {
    /// Load a word into a fresh buffer. The word must be non-empty.
    pub fn new(word: Vec<char>) -> Self {
        debug_assert!(!word.is_empty());
        let end = word.len() - 1;
        StemBuffer {
            word,
            start: 0,
            end,
            j: 0,
        }
    }

    /// Extract the final stem `word[start..=end]`.
    pub fn into_stem(self) -> String {
        self.word[self.start..=self.end].iter().collect()
    }

    // -----------------------------------------------------------------------
    // Character classification over the word region
    // -----------------------------------------------------------------------

    /// Positional consonant test (`y` rule included, bounded by `start`).
    pub fn is_consonant(&self, i: usize) -> bool {
        is_consonant_at(&self.word, self.start, i)
    }

    /// True when any index in the stem region `[start, j)` holds a
    /// vowel-classified character.
    pub fn contains_vowel(&self) -> bool {
        (self.start..self.j).any(|i| !self.is_consonant(i))
    }

    /// True when `word[i]` and `word[i - 1]` are the same consonant.
    /// False at the region start (there is no preceding character).
    pub fn double_consonant(&self, i: usize) -> bool {
        i > self.start && self.word[i] == self.word[i - 1] && self.is_consonant(i)
    }

    /// True when the three characters ending at `i` have the form
    /// consonant-vowel-consonant and the final consonant is not w, x or y.
    /// Used to restore a trailing `e` on short stems (cav(e), lov(e),
    /// hop(e) -- but not snow, box, tray).
    pub fn cvc(&self, i: usize) -> bool {
        if i < self.start + 2
            || !self.is_consonant(i)
            || self.is_consonant(i - 1)
            || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.word[i], 'w' | 'x' | 'y')
    }

    // -----------------------------------------------------------------------
    // Measure
    // -----------------------------------------------------------------------

    /// The measure `m` of the stem region `[start, j)`: the number of
    /// vowel-block to consonant-block transitions, which ignores a leading
    /// consonant run and a trailing vowel run.
    ///
    ///   <c><v>       gives 0   (tr, ee, tree, y, by)
    ///   <c>vc<v>     gives 1   (trouble, oats, trees, ivy)
    ///   <c>vcvc<v>   gives 2   (troubles, private, oaten)
    ///
    /// Most removals are gated on `m > 0` or `m > 1`; this is what keeps
    /// short words like "be" or "sky" intact.
    pub fn measure(&self) -> usize {
        let mut m = 0;
        let mut previous_was_vowel = false;
        for i in self.start..self.j {
            let consonant = self.is_consonant(i);
            if consonant && previous_was_vowel {
                m += 1;
            }
            previous_was_vowel = !consonant;
        }
        m
    }

    // -----------------------------------------------------------------------
    // Suffix matching and replacement
    // -----------------------------------------------------------------------

    /// True when the word region ends with `suffix`. On success the cut
    /// point `j` is moved to just before the suffix; a failed match never
    /// touches `j`.
    pub fn ends(&mut self, suffix: &str) -> bool {
        let n = suffix.len();
        if n > self.end - self.start + 1 {
            return false;
        }
        let from = self.end + 1 - n;
        if self.word[from..=self.end].iter().copied().eq(suffix.chars()) {
            self.j = from;
            true
        } else {
            false
        }
    }

    /// Replace everything after the cut point with `replacement` and move
    /// `end` onto the last replacement character.
    pub fn set_to(&mut self, replacement: &str) {
        self.word.truncate(self.j);
        self.word.extend(replacement.chars());
        self.end = self.j + replacement.len() - 1;
    }

    /// `set_to(replacement)`, but only when the stem in front of the cut
    /// point has `m > 0`. This is the recurring match-guard-replace idiom
    /// of the double-suffix rules.
    pub fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }
}
