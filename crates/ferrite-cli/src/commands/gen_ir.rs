use std::path::PathBuf;

use clap::ArgMatches;

use ferrite_compiler::{Parser, analyze, ir};

use crate::util::{fail, load_or_build_tables, read_source};

pub struct GenIrArgs {
    pub source_path: PathBuf,
    pub tables: PathBuf,
}

impl GenIrArgs {
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

pub fn run(args: GenIrArgs) {
    let source = read_source(&args.source_path);
    let parser = Parser::new(load_or_build_tables(&args.tables));
    let tokens = ferrite_compiler::lex(&source);

    let program = match parser.parse(&tokens) {
        Ok(program) => program,
        Err(err) => fail(&source, &args.source_path, err.into()),
    };
    let analysis = match analyze(&program) {
        Ok(analysis) => analysis,
        Err(err) => fail(&source, &args.source_path, err.into()),
    };
    match ir::generate(&program, &analysis) {
        Ok(quads) => {
            for quad in quads {
                println!("{quad}");
            }
        }
        Err(err) => fail(&source, &args.source_path, err.into()),
    }
}
