// Criterion benchmarks for stemma-en.
//
// Run:
//   cargo bench -p stemma-en

use criterion::{Criterion, criterion_group, criterion_main};
use stemma_en::{PorterStemmer, Stemmer, stem_word};

/// A mixed bag of short, long and suffix-heavy words.
const WORDS: &[&str] = &[
    "caresses",
    "ponies",
    "ties",
    "caress",
    "cats",
    "feed",
    "agreed",
    "plastered",
    "motoring",
    "sing",
    "conflated",
    "relational",
    "conditional",
    "rational",
    "organization",
    "generalization",
    "oscillators",
    "hopefulness",
    "sensibiliti",
    "relativity",
    "controlled",
    "connection",
    "effective",
    "important",
    "a",
    "be",
    "sky",
];

/// Stem every word in the list once.
fn bench_stem_words(c: &mut Criterion) {
    c.bench_function("stem_word_list", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(stem_word(word));
            }
        });
    });
}

/// Stem a synthetic multi-line document through the sequence wrappers.
fn bench_stem_document(c: &mut Criterion) {
    let line = WORDS.join(" ");
    let document = vec![line.as_str(); 50].join("\n");
    let stemmer = PorterStemmer::new();

    c.bench_function("stem_document_50_lines", |b| {
        b.iter(|| std::hint::black_box(stemmer.stem_document(&document)));
    });
}

criterion_group!(benches, bench_stem_words, bench_stem_document);
criterion_main!(benches);
