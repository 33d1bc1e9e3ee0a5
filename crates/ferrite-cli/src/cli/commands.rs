//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ferrite")
        .about("Compiler front-end for the ferrite language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_tables_command())
        .subcommand(lex_command())
        .subcommand(parse_command())
        .subcommand(check_command())
        .subcommand(gen_ir_command())
}

fn build_tables_command() -> Command {
    Command::new("build-tables")
        .about("Construct the LR(1) ACTION/GOTO tables and persist them")
        .arg(output_arg())
}

fn lex_command() -> Command {
    Command::new("lex")
        .about("Print the token stream, one KIND(value)@line:col per line")
        .arg(source_path_arg())
}

fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse a source file and print its AST")
        .arg(source_path_arg())
        .arg(tables_arg())
        .arg(trace_arg())
}

fn check_command() -> Command {
    Command::new("check")
        .about("Parse and semantically check a source file")
        .arg(source_path_arg())
        .arg(tables_arg())
}

fn gen_ir_command() -> Command {
    Command::new("gen-ir")
        .about("Emit quadruples, one tab-separated per line")
        .arg(source_path_arg())
        .arg(tables_arg())
}
