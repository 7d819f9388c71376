// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one run needs. CLI flags land here; defaults match the
/// folder layout the pages are usually delivered in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    /// Compared against file extensions ignoring ASCII case, without the dot.
    pub extension: String,
    pub label_prefix: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extension: s!(DEFAULT_EXTENSION),
            label_prefix: s!(DEFAULT_LABEL_PREFIX),
        }
    }
}

impl ReportOptions {
    /// Synthetic label for the file at sorted position `index` (0-based): ARQUIVO1, ARQUIVO2, ...
    pub fn label_for(&self, index: usize) -> String {
        join!(&self.label_prefix, &(index + 1).to_string())
    }

    /// Accepts ".html", "html" or "HTML" and stores the bare form.
    pub fn set_extension(&mut self, ext: &str) {
        self.extension = ext.trim().trim_start_matches('.').to_string();
    }

    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}
