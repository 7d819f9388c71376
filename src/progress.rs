// src/progress.rs
use std::path::Path;

/// Progress reporting for a report run. The CLI implements this to print
/// per-file lines; library callers can pass `NullProgress`.
pub trait Progress {
    /// Called once the input folder has been scanned.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One input file parsed.
    fn item_done(&mut self, _label: &str, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
