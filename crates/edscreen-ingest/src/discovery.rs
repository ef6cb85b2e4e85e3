//! Locating source snapshots in a databases folder.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use edscreen_model::SourceKind;

use crate::error::{IngestError, Result};
use crate::sheet::is_supported_file;

/// Lists tabular files in a directory.
///
/// Returns files sorted by filename.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_supported_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Whether `keyword` occurs in `stem` at the start of a word.
fn starts_word(stem: &str, keyword: &str) -> bool {
    stem.match_indices(keyword).any(|(index, _)| {
        stem[..index]
            .chars()
            .next_back()
            .is_none_or(|previous| !previous.is_alphanumeric())
    })
}

/// The single kind a file name identifies.
///
/// The longest matching keyword decides, so `BPR ED assessment.xlsx` is an
/// ED assessment snapshot rather than a BPR one. Ties go to the earlier kind.
pub fn classify_source_file(path: &Path) -> Option<SourceKind> {
    let stem = path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut best: Option<(usize, SourceKind)> = None;
    for kind in SourceKind::ALL {
        let longest = kind
            .file_keywords()
            .iter()
            .filter(|keyword| starts_word(&stem, keyword))
            .map(|keyword| keyword.len())
            .max();
        if let Some(len) = longest
            && best.is_none_or(|(best_len, _)| len > best_len)
        {
            best = Some((len, kind));
        }
    }
    best.map(|(_, kind)| kind)
}

/// Picks, per source kind, the last matching file by name.
///
/// Snapshots carry their download date in the name
/// (`PPP ED list 2025-01-31.xlsx`), so the last one is the newest. Each file
/// is claimed by at most one kind.
pub fn discover_source_files(files: &[PathBuf]) -> BTreeMap<SourceKind, PathBuf> {
    let mut discovered = BTreeMap::new();
    for path in files {
        if let Some(kind) = classify_source_file(path) {
            discovered.insert(kind, path.clone());
        }
    }
    discovered
}
