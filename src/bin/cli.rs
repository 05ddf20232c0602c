// src/bin/cli.rs
use clap::Parser;
use ecourts_desk::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    if let Err(e) = ecourts_desk::log::init_stderr(args.verbose) {
        eprintln!("Logging disabled: {e}");
    }
    cli::run(args)
}
