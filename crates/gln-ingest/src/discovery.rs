//! Source-document discovery.
//!
//! The mailbox/share fetchers drop their downloads into a source directory;
//! this module is the hand-off point. A feed names a filename pattern and we
//! pick the newest matching document, or every match for feeds that merge
//! multiple senders.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::{IngestError, Result};

fn is_tabular_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.eq_ignore_ascii_case("csv")
                || ext.eq_ignore_ascii_case("txt")
                || ext.eq_ignore_ascii_case("tsv")
        })
        .unwrap_or(false)
}

fn file_name_matches(path: &Path, pattern: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase().contains(&pattern.to_lowercase()))
        .unwrap_or(false)
}

fn list_matching(dir: &Path, pattern: &str) -> Result<Vec<(PathBuf, SystemTime)>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut matches = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() || !is_tabular_file(&path) || !file_name_matches(&path, pattern) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        matches.push((path, modified));
    }
    // Newest first; filename as a stable tiebreak.
    matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.file_name().cmp(&a.0.file_name())));
    Ok(matches)
}

/// Find the newest source document matching `pattern`.
pub fn find_latest_source(dir: &Path, pattern: &str) -> Result<PathBuf> {
    let matches = list_matching(dir, pattern)?;
    match matches.into_iter().next() {
        Some((path, _)) => {
            debug!(path = %path.display(), pattern, "selected source document");
            Ok(path)
        }
        None => Err(IngestError::NoSourceDocument {
            pattern: pattern.to_string(),
        }),
    }
}

/// Find every source document matching `pattern`, newest first.
pub fn find_all_sources(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matches = list_matching(dir, pattern)?;
    if matches.is_empty() {
        return Err(IngestError::NoSourceDocument {
            pattern: pattern.to_string(),
        });
    }
    Ok(matches.into_iter().map(|(path, _)| path).collect())
}
