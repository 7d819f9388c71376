// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures a report run can hit. Parsing itself never fails: missing
/// fields fall back to placeholders, so only I/O and rendering show up here.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input directory not found or not a directory: {}", .0.display())]
    InputDir(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render report: {0}")]
    Render(#[from] std::fmt::Error),
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
