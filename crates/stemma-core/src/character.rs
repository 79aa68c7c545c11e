// Character classification for English suffix stripping.
//
// The classification follows Porter, 1980, "An algorithm for suffix
// stripping" (Program, Vol. 14, no. 3, pp 130-137): the five letters
// a e i o u are always vowels, and y is context dependent.

// ---------------------------------------------------------------------------
// English phonological constants
// ---------------------------------------------------------------------------

/// English vowels (lowercase): a e i o u.
///
/// `y` is deliberately absent; its classification is positional, see
/// [`is_consonant_at`].
pub const ENGLISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is an unconditional English vowel.
///
/// Everything outside the vowel set counts as a consonant for stemming
/// purposes. That includes digits, punctuation and uppercase letters:
/// input is expected to be lowercase alphabetic, and anything else is
/// classified as a consonant rather than rejected.
pub fn is_vowel(c: char) -> bool {
    ENGLISH_VOWELS.contains(&c)
}

// ---------------------------------------------------------------------------
// Positional consonant test
// ---------------------------------------------------------------------------

/// Check whether the character at index `i` of `word` is a consonant,
/// considering only the region starting at `start`.
///
/// A plain vowel is never a consonant and a non-vowel other than `y` always
/// is. A `y` at the region start is a consonant; elsewhere a `y` is a
/// consonant exactly when the preceding character is a vowel ("toy" ends in
/// a consonant, "syzygy" starts with one).
///
/// The definition is recursive through runs of consecutive `y`s, so it is
/// resolved here with a left-to-right scan over the run: the first `y` of
/// the run is classified against its non-`y` neighbour (or `start`), and
/// classification alternates along the run.
///
/// # Panics
///
/// Panics if `i` is out of bounds for `word` (callers index within an
/// already validated word region).
pub fn is_consonant_at(word: &[char], start: usize, i: usize) -> bool {
    let c = word[i];
    if is_vowel(c) {
        return false;
    }
    if c != 'y' {
        return true;
    }

    // Walk back to the first 'y' of the run.
    let mut k = i;
    while k > start && word[k - 1] == 'y' {
        k -= 1;
    }
    let first_is_consonant = k == start || is_vowel(word[k - 1]);

    // Same parity as the run head means same classification.
    ((i - k) % 2 == 0) == first_is_consonant
}
