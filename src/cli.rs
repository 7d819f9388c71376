// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::ReportOptions;
use crate::file::resolve_output_path;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Consolidate saved INPI patent search pages into one HTML table.
#[derive(Parser, Debug, Clone)]
#[command(name = "patentes", version, about)]
pub struct Cli {
    /// Folder holding the saved result pages
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Report file, or a folder (trailing `/`) to put PATENTES.HTML in
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Extension of the pages to read, matched ignoring case (html also picks up .HTML)
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Prefix of the synthetic file labels (ARQUIVO1, ARQUIVO2, ...)
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_LABEL_PREFIX)]
    pub label_prefix: String,

    /// More detail in the log (-v info, -vv debug, -vvv trace); also lists each file
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Where log lines go
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn to_options(&self) -> ReportOptions {
        let mut opts = ReportOptions {
            input_dir: self.input.clone(),
            output: resolve_output_path(&self.output, DEFAULT_OUTPUT_FILE),
            label_prefix: self.label_prefix.clone(),
            ..ReportOptions::default()
        };
        opts.set_extension(&self.ext);
        opts
    }
}

/// Prints one line per parsed page when verbose.
pub struct ConsoleProgress {
    pub verbose: bool,
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, total: 0, done: 0 }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, label: &str, path: &Path) {
        self.done += 1;
        if self.verbose {
            eprintln!("[{}/{}] {label} <- {}", self.done, self.total, path.display());
        }
    }
}

/// Run with already-parsed arguments and print the success line.
pub fn run(cli: &Cli) -> crate::Result<RunSummary> {
    let opts = cli.to_options();
    let mut progress = ConsoleProgress::new(cli.verbose > 0);
    let summary = runner::run(&opts, &mut progress)?;
    println!("Arquivo HTML gerado com sucesso: {}", summary.output.display());
    Ok(summary)
}
