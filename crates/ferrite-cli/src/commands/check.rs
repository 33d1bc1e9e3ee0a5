use std::path::PathBuf;

use clap::ArgMatches;

use ferrite_compiler::{Parser, analyze};

use crate::util::{fail, load_or_build_tables, read_source};

pub struct CheckArgs {
    pub source_path: PathBuf,
    pub tables: PathBuf,
}

impl CheckArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m
                .get_one::<PathBuf>("source_path")
                .cloned()
                .unwrap_or_default(),
            tables: m.get_one::<PathBuf>("tables").cloned().unwrap_or_default(),
        }
    }
}

pub fn run(args: CheckArgs) {
    let source = read_source(&args.source_path);
    let parser = Parser::new(load_or_build_tables(&args.tables));
    let tokens = ferrite_compiler::lex(&source);

    let program = match parser.parse(&tokens) {
        Ok(program) => program,
        Err(err) => fail(&source, &args.source_path, err.into()),
    };
    match analyze(&program) {
        Ok(_) => println!("OK"),
        Err(err) => fail(&source, &args.source_path, err.into()),
    }
}
