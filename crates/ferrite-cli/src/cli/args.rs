//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Default location of the table artifact.
pub const DEFAULT_TABLES_PATH: &str = "ferrite.tables";

/// Source file (positional, required).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Source file to process")
}

/// Table artifact location (--tables).
pub fn tables_arg() -> Arg {
    Arg::new("tables")
        .long("tables")
        .value_name("FILE")
        .default_value(DEFAULT_TABLES_PATH)
        .value_parser(value_parser!(PathBuf))
        .help("Table artifact to load (rebuilt and persisted on miss)")
}

/// Artifact output location for build-tables (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .default_value(DEFAULT_TABLES_PATH)
        .value_parser(value_parser!(PathBuf))
        .help("Where to write the table artifact")
}

/// Emit parse trace rows instead of the AST (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print parse trace rows as JSON lines instead of the AST")
}
