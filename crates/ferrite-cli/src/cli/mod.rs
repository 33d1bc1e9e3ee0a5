mod args;
mod commands;


pub use args::{output_arg, source_path_arg, tables_arg, trace_arg};
pub use commands::build_cli;
