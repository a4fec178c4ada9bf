//! Site build pipeline: discover, parse, render, write.
//!
//! One synchronous pass. A document that fails to parse is logged and
//! dropped from every downstream artifact; only filesystem failures and a
//! missing stylesheet asset abort the run.

pub mod links;
pub mod render;
pub mod summary;
pub mod templates;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{BuildConfig, REFERENCES_DIR};
use crate::error::Result;
use crate::skills::types::Skill;
use crate::skills::{discovery, parser};

use self::writer::Page;

/// Outcome of one build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Successfully parsed skills.
    pub skills: usize,
    /// Source documents dropped as malformed or unreadable.
    pub skipped: usize,
    /// Pages written to the output directory (including `llm.txt`).
    pub pages_written: usize,
}

/// Run the full pipeline against one configuration.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let files = discovery::find_skill_files(config)?;
    info!("found {} skill documents", files.len());

    let mut skills = Vec::new();
    let mut skipped = 0usize;
    for path in &files {
        match load_skill(config, path) {
            Ok(skill) => {
                info!("parsed {}", skill.id);
                skills.push(skill);
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                skipped += 1;
            }
        }
    }

    let pages = render_pages(config, &skills);
    writer::write_site(config, &pages)?;

    Ok(BuildReport {
        skills: skills.len(),
        skipped,
        pages_written: pages.len(),
    })
}

/// Read and parse one skill document together with its references.
///
/// Any error here (unreadable file, malformed structure, undecodable
/// metadata) makes the caller skip the document.
fn load_skill(config: &BuildConfig, path: &Path) -> Result<Skill> {
    let text = fs::read_to_string(path)?;
    let mut skill = parser::parse_skill(&config.root, path, &text)?;

    let folder = config.root.join(&skill.folder);
    for reference_path in discovery::find_reference_files(&folder)? {
        match fs::read_to_string(&reference_path) {
            Ok(text) => skill
                .references
                .push(parser::parse_reference(&reference_path, &text)),
            Err(err) => warn!("skipping reference {}: {err}", reference_path.display()),
        }
    }
    Ok(skill)
}

/// Render every page for the parsed skills: index, one detail page per
/// skill, one page per reference, and the `llm.txt` summary.
fn render_pages(config: &BuildConfig, skills: &[Skill]) -> Vec<Page> {
    let mut pages = Vec::new();
    pages.push(Page::new("index.html", templates::index_page(config, skills)));

    for skill in skills {
        let body = render::markdown_to_html(&links::rewrite_links(&skill.body));
        pages.push(Page::new(
            format!("{}.html", skill.id),
            templates::skill_page(config, skill, &body),
        ));

        for reference in &skill.references {
            let body = render::markdown_to_html(&links::rewrite_links(&reference.body));
            pages.push(Page::new(
                PathBuf::from(REFERENCES_DIR).join(format!("{}.html", reference.slug)),
                templates::reference_page(config, skill, reference, &body),
            ));
        }
    }

    pages.push(Page::new("llm.txt", summary::llm_txt(config, skills)));
    pages
}
