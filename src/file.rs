// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ReportOptions;
use crate::core::encoding::decode_page;
use crate::error::{ReportError, Result};

/// Result pages directly inside `opts.input_dir` (no recursion), sorted by
/// file name. The report itself is skipped if it was written into the same folder.
pub fn list_input_files(opts: &ReportOptions) -> Result<Vec<PathBuf>> {
    let dir = &opts.input_dir;
    if !dir.is_dir() {
        return Err(ReportError::InputDir(dir.clone()));
    }

    let skip = fs::canonicalize(&opts.output).ok();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))? {
        let path = entry.map_err(|e| ReportError::io(dir, e))?.path();
        if !path.is_file() || !opts.matches_extension(&path) {
            continue;
        }
        if skip.is_some() && fs::canonicalize(&path).ok() == skip {
            log::debug!("Skipping previous report {}", path.display());
            continue;
        }
        files.push(path);
    }

    // Plain string order on the file name, like a directory listing sorted by name.
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read one saved page as Windows-1252 text.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
    Ok(decode_page(&bytes))
}

/// Write the rendered report as UTF-8, replacing any previous one.
/// Returns the path written to.
pub fn write_report(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html).map_err(|e| ReportError::io(path, e))?;
    Ok(path.to_path_buf())
}

/// `-o some/dir/` (trailing separator) or an existing directory means
/// "put the default file name in there". Nothing is created here;
/// `write_report` makes missing folders once there is a report to write.
pub fn resolve_output_path(user_o: &Path, default_filename: &str) -> PathBuf {
    if user_o.as_os_str().is_empty() {
        return PathBuf::from(default_filename);
    }
    if looks_like_dir_hint(user_o) || user_o.is_dir() {
        user_o.join(default_filename)
    } else {
        user_o.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ReportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"<html></html>").unwrap();
    }

    #[test]
    fn lists_only_matching_files_sorted_by_name() {
        let tmp = tempdir().unwrap();
        for name in ["b.html", "a.html", "notes.txt", "C.HTML", "a10.html"] {
            touch(tmp.path(), name);
        }
        fs::create_dir(tmp.path().join("sub.html")).unwrap();

        let opts = ReportOptions {
            input_dir: tmp.path().to_path_buf(),
            output: tmp.path().join("out.html.bak"),
            ..ReportOptions::default()
        };
        let names: Vec<String> = list_input_files(&opts)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["C.HTML", "a.html", "a10.html", "b.html"]);
    }

    #[test]
    fn previous_report_in_input_dir_is_skipped() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "01.html");
        touch(tmp.path(), "PATENTES.HTML");

        let opts = ReportOptions {
            input_dir: tmp.path().to_path_buf(),
            output: tmp.path().join("PATENTES.HTML"),
            ..ReportOptions::default()
        };
        let files = list_input_files(&opts).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("01.html"));
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        let tmp = tempdir().unwrap();
        let opts = ReportOptions {
            input_dir: tmp.path().join("nope"),
            ..ReportOptions::default()
        };
        assert!(matches!(list_input_files(&opts), Err(ReportError::InputDir(_))));
    }

    #[test]
    fn write_creates_parent_and_resolves_dir_hint() {
        let tmp = tempdir().unwrap();
        let hinted = PathBuf::from(format!("{}/reports/", tmp.path().display()));
        let out = resolve_output_path(&hinted, "PATENTES.HTML");
        assert!(out.ends_with("reports/PATENTES.HTML"));
        assert!(!tmp.path().join("reports").exists());

        write_report(&out, "<html></html>").unwrap();
        assert!(tmp.path().join("reports").is_dir());

        let nested = tmp.path().join("a/b/r.html");
        let written = write_report(&nested, "<html>ç</html>").unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "<html>ç</html>");
    }
}
