//! Build configuration.
//!
//! Everything the pipeline needs travels in an explicit [`BuildConfig`]
//! handed to [`crate::site::build`] instead of module-level path constants,
//! so tests and embedders can point the builder anywhere.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// File name the discovery pass looks for.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Conventional subfolder holding a skill's supplementary documents.
pub const REFERENCES_DIR: &str = "references";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Repository root that is scanned for skill documents.
    pub root: PathBuf,
    /// Directory the generated site is written to.
    pub output_dir: PathBuf,
    /// Stylesheet asset copied verbatim into the output directory.
    pub stylesheet: PathBuf,
    /// Site name shown in every page header.
    pub site_title: String,
    /// Tagline shown under the site name.
    pub site_subtitle: String,
    /// Repository link shown in every page footer.
    pub repo_url: String,
    /// Fixed generation timestamp for `llm.txt`; `None` uses the current time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl BuildConfig {
    /// Build the default configuration for a repository root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output_dir: root.join("docs"),
            stylesheet: root.join("assets").join("styles.css"),
            site_title: "Skills Repository".to_string(),
            site_subtitle: "Development patterns and configurations organized for easy reference"
                .to_string(),
            repo_url: "https://github.com/joshspicer/skills".to_string(),
            timestamp: None,
            root,
        }
    }

    /// Generation timestamp recorded in `llm.txt`.
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}
