use std::process::ExitCode;

use clap::Parser;
use stringsmerge_cli::{Args, ExitStatus, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
