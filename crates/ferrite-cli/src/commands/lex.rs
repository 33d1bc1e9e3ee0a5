use std::path::PathBuf;

use clap::ArgMatches;

use crate::util::read_source;

pub struct LexArgs {
    pub source_path: PathBuf,
}

impl LexArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m
                .get_one::<PathBuf>("source_path")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

pub fn run(args: LexArgs) {
    let source = read_source(&args.source_path);
    for token in ferrite_compiler::lex(&source) {
        println!("{token}");
    }
}
