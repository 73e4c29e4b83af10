//! Batch folder driver
//!
//! Iterates a folder's `.docx` and `.pdf` files (`.xml` is excluded from
//! batch mode) in a stable filename sort, running the single-file
//! analyzer on each and interleaving banner lines between the per-file
//! blocks. A failure on one file is isolated to that file's block; the
//! remaining files are still processed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analyzer::analyze_file;
use crate::config::AnalysisConfig;
use crate::error::Error;
use crate::types::Finding;

const SEPARATOR_WIDTH: usize = 60;

/// Analyzes every supported file in one folder, strictly sequentially.
pub fn analyze_directory(dir: &Path, config: &AnalysisConfig) -> Vec<Finding> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            return vec![Finding::note(format!(
                "Error reading folder: {}",
                Error::from_io(e, dir)
            ))]
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_batch_candidate(path))
        .collect();
    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    if files.is_empty() {
        return vec![Finding::note(
            "No .docx or .pdf files found in the selected folder.",
        )];
    }

    info!(count = files.len(), dir = %dir.display(), "starting batch analysis");
    let mut findings = Vec::new();
    for file in &files {
        findings.push(Finding::section("=".repeat(SEPARATOR_WIDTH)));
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        findings.push(Finding::section(format!("=== FILE: {name} ===")));
        findings.extend(analyze_file(file, config));
    }
    findings
}

fn is_batch_candidate(path: &Path) -> bool {
    matches!(
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref(),
        Some("docx") | Some("pdf")
    )
}
