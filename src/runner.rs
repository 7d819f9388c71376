// src/runner.rs
use std::path::PathBuf;
use std::time::Instant;

use crate::{
    config::options::ReportOptions,
    data::FileSummary,
    error::Result,
    file::{list_input_files, read_source, write_report},
    progress::Progress,
    render::render_report,
    specs,
};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub files: usize,
    /// Rows written to the table, placeholder rows included.
    pub records: usize,
    /// Rows that came from the pages themselves.
    pub extracted: usize,
}

/// Scan → parse every page → render → write.
/// Pass `&mut NullProgress` when nobody is watching.
pub fn run(opts: &ReportOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let result = run_inner(opts, progress);
    progress.finish();
    result
}

fn run_inner(opts: &ReportOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let files = collect(opts, progress)?;
    let html = render_report(&files)?;
    let output = write_report(&opts.output, &html)?;

    let records: usize = files.iter().map(|f| f.records.len()).sum();
    let extracted: usize = files.iter().map(|f| f.real_records().len()).sum();
    log::info!(
        "Wrote {} ({} files, {} rows, {} extracted)",
        output.display(),
        files.len(),
        records,
        extracted
    );

    Ok(RunSummary { output, files: files.len(), records, extracted })
}

/// Parse every input page in sorted order. Labels follow the sorted position.
pub fn collect(opts: &ReportOptions, progress: &mut dyn Progress) -> Result<Vec<FileSummary>> {
    let paths = list_input_files(opts)?;
    log::info!("Found {} page(s) in {}", paths.len(), opts.input_dir.display());

    progress.begin(paths.len());
    if paths.is_empty() {
        log::warn!("No .{} files in {}", opts.extension, opts.input_dir.display());
        progress.log("No input pages found; the report will be empty.");
    }

    let mut out = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let label = opts.label_for(i);
        let t = Instant::now();

        let text = read_source(path)?;
        let summary = specs::patents::parse_doc(&label, &text);
        log::debug!("{label}: parsed {} in {:?}", path.display(), t.elapsed());

        progress.item_done(&label, path);
        out.push(summary);
    }
    Ok(out)
}
