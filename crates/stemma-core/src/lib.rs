// stemma-core: shared types and utilities for the stemma stemming tools.
//
// Holds the pieces that more than one crate needs: English character
// classification (the vowel set and the positional consonant test used by
// the suffix-stripping rules) and whitespace/line segmentation with the
// document statistics built on top of it.

pub mod character;
pub mod segment;
