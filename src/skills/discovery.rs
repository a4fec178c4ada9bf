//! Source document discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{BuildConfig, REFERENCES_DIR, SKILL_FILE_NAME};
use crate::error::{Result, SiteError};

/// Recursively find every skill document under the configured root.
///
/// The output directory and hidden directories are pruned. Results come
/// back sorted so downstream page and summary ordering is deterministic.
pub fn find_skill_files(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(&config.root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry.path(), &config.output_dir));

    for entry in walker {
        let entry = entry.map_err(|err| SiteError::Walk(err.to_string()))?;
        if entry.file_type().is_file() && entry.file_name() == SKILL_FILE_NAME {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_pruned(path: &Path, output_dir: &Path) -> bool {
    if path == output_dir {
        return true;
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// List a skill folder's reference documents, sorted by file name.
///
/// A missing `references/` subfolder is the common case and yields an
/// empty list.
pub fn find_reference_files(skill_folder: &Path) -> Result<Vec<PathBuf>> {
    let dir = skill_folder.join(REFERENCES_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
