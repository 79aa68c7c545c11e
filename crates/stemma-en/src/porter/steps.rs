// The ordered transformation phases of the Porter algorithm.
//
// Each step runs exactly once, in sequence, on the buffer state the
// previous step left behind. Steps 2-4 dispatch on the character just
// before the candidate suffix; within a bucket the rules are tried in
// listed order and the first `ends` match wins, whether or not its
// measure guard then lets it fire.

use super::buffer::StemBuffer;

/// Ordered `(suffix, replacement)` rules, bucketed by dispatch character.
type RuleTable = &'static [(char, &'static [(&'static str, &'static str)])];

// ---------------------------------------------------------------------------
// Step 1ab: plurals and -ed / -ing
// ---------------------------------------------------------------------------

/// Remove plurals and the -ed / -ing verb endings.
///
/// ```text
/// caresses -> caress      feed    -> feed      matting -> mat
/// ponies   -> poni        agreed  -> agree     mating  -> mate
/// ties     -> ti          plastered -> plaster meeting -> meet
/// caress   -> caress      motoring  -> motor   milling -> mill
/// cats     -> cat         sing      -> sing    messing -> mess
/// ```
pub fn step1ab(b: &mut StemBuffer) {
    if b.word[b.end] == 's' {
        if b.ends("sses") {
            b.end -= 2;
        } else if b.ends("ies") {
            b.set_to("i");
        } else if b.end > b.start && b.word[b.end - 1] != 's' {
            b.end -= 1;
        }
    }
    if b.ends("eed") {
        if b.measure() > 0 {
            b.end -= 1;
        }
    } else if (b.ends("ed") || b.ends("ing")) && b.contains_vowel() {
        // contains_vowel guarantees a non-empty stem, so j >= 1 here.
        b.end = b.j - 1;
        if b.ends("at") {
            b.set_to("ate");
        } else if b.ends("bl") {
            b.set_to("ble");
        } else if b.ends("iz") {
            b.set_to("ize");
        } else if b.double_consonant(b.end) {
            b.end -= 1;
            if matches!(b.word[b.end], 'l' | 's' | 'z') {
                b.end += 1;
            }
        } else if b.measure() == 1 && b.cvc(b.end) {
            b.set_to("e");
        }
    }
}

// ---------------------------------------------------------------------------
// Step 1c: terminal y -> i
// ---------------------------------------------------------------------------

/// Turn a terminal `y` into `i` when the stem before it contains a vowel
/// (happy -> happi, but sky -> sky).
pub fn step1c(b: &mut StemBuffer) {
    if b.ends("y") && b.contains_vowel() {
        b.word[b.end] = 'i';
    }
}

// ---------------------------------------------------------------------------
// Step 2: double suffixes to single ones
// ---------------------------------------------------------------------------

/// Step 2 rules, keyed by the character immediately before the suffix.
///
/// The `bli` -> `ble` rule (in place of the published `abli` -> `able`)
/// and the whole `g` bucket (`logi` -> `log`) are deliberate departures
/// of the reference code from Porter's paper; they are kept because
/// downstream frequency counts depend on this exact variant.
const STEP2_RULES: RuleTable = &[
    ('a', &[("ational", "ate"), ("tional", "tion")]),
    ('c', &[("enci", "ence"), ("anci", "ance")]),
    ('e', &[("izer", "ize")]),
    (
        'l',
        &[
            ("bli", "ble"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
        ],
    ),
    ('o', &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")]),
    (
        's',
        &[
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
        ],
    ),
    ('t', &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")]),
    ('g', &[("logi", "log")]),
];

/// Map double suffixes onto single ones, so -ization (= -ize + -ation)
/// becomes -ize and so on. The stem in front of the suffix must have
/// `m > 0` for the replacement to fire.
pub fn step2(b: &mut StemBuffer) {
    let key_index = b.end.wrapping_sub(1);
    apply_rule_table(b, STEP2_RULES, key_index);
}

// ---------------------------------------------------------------------------
// Step 3: -icate, -ful, -ness and friends
// ---------------------------------------------------------------------------

/// Step 3 rules, keyed by the final character of the word.
const STEP3_RULES: RuleTable = &[
    ('e', &[("icate", "ic"), ("ative", ""), ("alize", "al")]),
    ('i', &[("iciti", "ic")]),
    ('l', &[("ical", "ic"), ("ful", "")]),
    ('s', &[("ness", "")]),
];

/// Strip the residual derivational suffixes (-icate, -ative, -alize,
/// -iciti, -ical, -ful, -ness), each gated on `m > 0`.
pub fn step3(b: &mut StemBuffer) {
    let key_index = b.end;
    apply_rule_table(b, STEP3_RULES, key_index);
}

/// Shared dispatch for steps 2 and 3: pick the bucket for the character at
/// `key_index`, try its rules in order, fire at most one.
fn apply_rule_table(b: &mut StemBuffer, table: RuleTable, key_index: usize) {
    // key_index underflows (wraps) when the region is a single character;
    // no suffix of two or more characters can match then anyway.
    if key_index < b.start || key_index > b.end {
        return;
    }
    let key = b.word[key_index];
    let Some((_, rules)) = table.iter().find(|(c, _)| *c == key) else {
        return;
    };
    for (suffix, replacement) in *rules {
        if b.ends(suffix) {
            b.replace_if_measured(replacement);
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Step 4: final suffix removal in context <c>vcvc<v>
// ---------------------------------------------------------------------------

/// Step 4 suffix catalogue, keyed by the character before the suffix.
/// Removal only, no replacement text; `ion` additionally requires an `s`
/// or `t` right before it.
const STEP4_SUFFIXES: &[(char, &[&str])] = &[
    ('a', &["al"]),
    ('c', &["ance", "ence"]),
    ('e', &["er"]),
    ('i', &["ic"]),
    ('l', &["able", "ible"]),
    ('n', &["ant", "ement", "ment", "ent"]),
    ('o', &["ion", "ou"]),
    ('s', &["ism"]),
    ('t', &["ate", "iti"]),
    ('u', &["ous"]),
    ('v', &["ive"]),
    ('z', &["ize"]),
];

/// Take off -ant, -ence and the rest of the fixed catalogue when the
/// remaining stem has `m > 1`.
pub fn step4(b: &mut StemBuffer) {
    if b.end <= b.start {
        return;
    }
    let key = b.word[b.end - 1];
    let Some((_, suffixes)) = STEP4_SUFFIXES.iter().find(|(c, _)| *c == key) else {
        return;
    };
    for suffix in *suffixes {
        if !b.ends(suffix) {
            continue;
        }
        if *suffix == "ion" && !(b.j > b.start && matches!(b.word[b.j - 1], 's' | 't')) {
            return;
        }
        if b.measure() > 1 {
            b.end = b.j - 1;
        }
        return;
    }
}

// ---------------------------------------------------------------------------
// Step 5: trailing -e and -ll cleanup
// ---------------------------------------------------------------------------

/// Remove a final -e when `m > 1`, or when `m == 1` and the stem before it
/// is not of CVC form; collapse a final -ll to -l when `m > 1`.
pub fn step5(b: &mut StemBuffer) {
    b.j = b.end + 1;
    if b.word[b.end] == 'e' {
        let m = b.measure();
        // m == 1 guarantees end >= start + 1, so `end - 1` cannot underflow.
        if m > 1 || (m == 1 && !b.cvc(b.end - 1)) {
            b.end -= 1;
        }
    }
    if b.word[b.end] == 'l' && b.double_consonant(b.end) && b.measure() > 1 {
        b.end -= 1;
    }
}
