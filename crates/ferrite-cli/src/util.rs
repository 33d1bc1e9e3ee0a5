//! Shared plumbing for commands: source loading, table artifact handling,
//! and error reporting.

use std::path::Path;
use std::process::exit;

use ferrite_compiler::diagnostics::render_snippet;
use ferrite_compiler::grammar;
use ferrite_core::TableSet;

/// Reads a source file, exiting with code 1 on I/O failure.
pub fn read_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", path.display());
            exit(1);
        }
    }
}

/// Loads the table artifact, or rebuilds and persists it on any miss
/// (absent file, foreign format, stale grammar fingerprint).
pub fn load_or_build_tables(path: &Path) -> TableSet {
    let expected = grammar::language_grammar().fingerprint();
    if let Ok(bytes) = std::fs::read(path) {
        if let Ok(set) = ferrite_core::from_binary(&bytes, expected) {
            return set;
        }
    }

    match grammar::build() {
        Ok(build) => {
            // A failed cache write is not fatal; the tables are still good.
            let _ = std::fs::write(path, ferrite_core::to_binary(&build.set));
            build.set
        }
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

/// Prints the single-line error plus an annotated snippet, then exits 1.
pub fn fail(source: &str, path: &Path, err: ferrite_compiler::Error) -> ! {
    eprintln!("{err}");
    if let Some(offset) = err.offset() {
        eprintln!(
            "{}",
            render_snippet(
                source,
                path.to_str(),
                offset,
                &err.message()
            )
        );
    }
    exit(1);
}
