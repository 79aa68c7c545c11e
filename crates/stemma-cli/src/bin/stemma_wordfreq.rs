// stemma-wordfreq: Stem frequency list for English text.
//
// Reads text from a file or stdin, stems every word, and produces a
// frequency list of stems sorted by count (descending), then
// alphabetically. A short summary of word and vocabulary counts before
// and after stemming precedes the list.
//
// Usage:
//   stemma-wordfreq [--lower] [FILE]
//
// Options:
//   --lower        Lowercase the input before stemming
//   -h, --help     Print help

use std::collections::HashMap;
use std::io::{self, Write};

use stemma_core::segment;
use stemma_en::stem_word;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = stemma_cli::parse_file_arg(&args);

    if stemma_cli::wants_help(&args) {
        println!("stemma-wordfreq: Stem frequency list for English text.");
        println!();
        println!("Usage: stemma-wordfreq [--lower] [FILE]");
        println!();
        println!("Reads text from FILE (or stdin), stems every word, and prints");
        println!("a frequency list of stems with a vocabulary summary.");
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

    let mut freqs: HashMap<String, u64> = HashMap::new();
    for word in segment::words(&text) {
        *freqs.entry(stem_word(word)).or_insert(0) += 1;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let _ = writeln!(out, "words:        {}", segment::word_count(&text));
    let _ = writeln!(out, "unique words: {}", segment::unique_word_count(&text));
    let _ = writeln!(out, "unique stems: {}", freqs.len());
    let _ = writeln!(out);

    // Sort by frequency (descending), then alphabetically
    let mut freq_list: Vec<(String, u64)> = freqs.into_iter().collect();
    freq_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (stem, count) in &freq_list {
        let _ = writeln!(out, "{stem}\t{count}");
    }
}
