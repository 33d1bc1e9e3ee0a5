use std::path::PathBuf;
use std::process::exit;

use clap::ArgMatches;

use ferrite_compiler::grammar;

pub struct TablesArgs {
    pub output: PathBuf,
}

impl TablesArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned().unwrap_or_default(),
        }
    }
}

pub fn run(args: TablesArgs) {
    let build = match grammar::build() {
        Ok(build) => build,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    let bytes = ferrite_core::to_binary(&build.set);
    if let Err(err) = std::fs::write(&args.output, bytes) {
        eprintln!("error: cannot write {}: {err}", args.output.display());
        exit(1);
    }

    let summary = build.summary;
    println!(
        "built {} states from {} productions ({} shift/reduce conflicts resolved in favour of shift)",
        summary.states, summary.productions, summary.shift_reduce_resolved
    );
    println!("tables written to {}", args.output.display());
}
