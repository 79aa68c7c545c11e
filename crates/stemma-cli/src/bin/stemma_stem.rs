// stemma-stem: Stem running English text.
//
// Reads text from a file or stdin and writes the stemmed text to stdout.
// Line structure is preserved; within a line, words are stemmed one by
// one and rejoined with single spaces.
//
// The engine expects lowercase tokens. Pass --lower to fold the input to
// lowercase before stemming.
//
// Usage:
//   stemma-stem [--lower] [FILE]
//
// Options:
//   --lower        Lowercase the input before stemming
//   -h, --help     Print help

use std::io::{self, Write};

use stemma_en::{PorterStemmer, Stemmer};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = stemma_cli::parse_file_arg(&args);

    if stemma_cli::wants_help(&args) {
        println!("stemma-stem: Stem running English text.");
        println!();
        println!("Usage: stemma-stem [--lower] [FILE]");
        println!();
        println!("Reads text from FILE (or stdin) and writes the stemmed text");
        println!("to stdout, one output line per input line.");
        println!();
        println!("Options:");
        println!("  --lower        Lowercase the input before stemming");
        println!("  -h, --help     Print this help");
        return;
    }

    let lower = args.iter().any(|a| a == "--lower");
    for arg in &args {
        if arg != "--lower" {
            stemma_cli::fatal(&format!("unknown option {arg}"));
        }
    }

    let mut text =
        stemma_cli::read_input(file.as_deref()).unwrap_or_else(|e| stemma_cli::fatal(&e));
    if lower {
        text = text.to_lowercase();
    }

    let stemmer = PorterStemmer::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "{}", stemmer.stem_document(&text));
}
