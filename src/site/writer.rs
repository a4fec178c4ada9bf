//! Output persistence.
//!
//! All writes are full-file overwrites; there is no incremental update.
//! Files written before a fatal error stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::BuildConfig;
use crate::error::{Result, SiteError};

/// One generated page, addressed relative to the output root.
#[derive(Debug)]
pub struct Page {
    pub path: PathBuf,
    pub content: String,
}

impl Page {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Persist the generated site: stylesheet asset first, then every page.
///
/// A missing stylesheet is the one template asset the build cannot proceed
/// without and aborts the run.
pub fn write_site(config: &BuildConfig, pages: &[Page]) -> Result<()> {
    ensure_dir(&config.output_dir)?;

    if !config.stylesheet.is_file() {
        return Err(SiteError::MissingAsset(
            config.stylesheet.display().to_string(),
        ));
    }
    fs::copy(&config.stylesheet, config.output_dir.join("styles.css"))?;

    for page in pages {
        let target = config.output_dir.join(&page.path);
        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&target, &page.content)?;
        debug!("wrote {}", target.display());
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
