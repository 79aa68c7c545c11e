// stemma-cli: shared utilities for CLI tools.

use std::io::Read;
use std::process;

/// Read the input text for a tool: the named file if a path was given,
/// otherwise everything from stdin.
pub fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("failed to read {p}: {e}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(text)
        }
    }
}

/// Parse the positional FILE argument from command line args.
///
/// Returns `(file, remaining_args)`. At most one positional argument is
/// accepted; a second one is an error.
pub fn parse_file_arg(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut file = None;
    let mut remaining = Vec::new();

    for arg in args {
        if arg.starts_with('-') {
            remaining.push(arg.clone());
        } else if file.is_none() {
            file = Some(arg.clone());
        } else {
            eprintln!("error: unexpected argument {arg}");
            process::exit(1);
        }
    }

    (file, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
