use std::path::PathBuf;
use std::process::exit;

use clap::ArgMatches;

use ferrite_compiler::{Parser, ast};

use crate::util::{fail, load_or_build_tables, read_source};

pub struct ParseArgs {
    pub source_path: PathBuf,
    pub tables: PathBuf,
    pub trace: bool,
}

impl ParseArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m
                .get_one::<PathBuf>("source_path")
                .cloned()
                .unwrap_or_default(),
            tables: m.get_one::<PathBuf>("tables").cloned().unwrap_or_default(),
            trace: m.get_flag("trace"),
        }
    }
}

pub fn run(args: ParseArgs) {
    let source = read_source(&args.source_path);
    let parser = Parser::new(load_or_build_tables(&args.tables));
    let tokens = ferrite_compiler::lex(&source);

    if args.trace {
        let (result, rows) = parser.parse_traced(&tokens);
        for row in &rows {
            match serde_json::to_string(row) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    eprintln!("error: cannot serialize trace row: {err}");
                    exit(1);
                }
            }
        }
        if let Err(err) = result {
            fail(&source, &args.source_path, err.into());
        }
        return;
    }

    match parser.parse(&tokens) {
        Ok(program) => print!("{}", ast::dump(&program)),
        Err(err) => fail(&source, &args.source_path, err.into()),
    }
}
