// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use patent_report::{cli, logger};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse();
    let level = logger::level_for_verbosity(args.verbose);
    if let Err(e) = logger::init(&args.log_file, level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    cli::run(&args)
        .wrap_err_with(|| format!("could not build report from {}", args.input.display()))?;
    Ok(())
}
