mod cli;
mod commands;
mod util;

use cli::build_cli;
use commands::{check, gen_ir, lex, parse, tables};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("build-tables", m)) => tables::run(tables::TablesArgs::from_matches(m)),
        Some(("lex", m)) => lex::run(lex::LexArgs::from_matches(m)),
        Some(("parse", m)) => parse::run(parse::ParseArgs::from_matches(m)),
        Some(("check", m)) => check::run(check::CheckArgs::from_matches(m)),
        Some(("gen-ir", m)) => gen_ir::run(gen_ir::GenIrArgs::from_matches(m)),
        _ => unreachable!("clap should have caught this"),
    }
}
