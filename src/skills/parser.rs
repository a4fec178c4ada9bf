//! Parsing of skill documents and their references.
//!
//! A skill document is `---\n<yaml>\n---\n<body>`. Anything that fails the
//! structural split or the YAML decode comes back as
//! [`SiteError::InvalidSkill`]; the pipeline logs it and drops the file
//! rather than aborting the build.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, SiteError};

use super::types::{
    DEFAULT_DESCRIPTION, DEFAULT_NAME, Frontmatter, Reference, Skill, scalar_to_string,
};

/// Split a document into its raw frontmatter block and body.
///
/// The document must open with `---` on the first line and close the block
/// with a `---` line followed by a newline; anything else is structurally
/// malformed.
#[must_use]
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---\n")?;
    let end = rest.find("\n---\n")?;
    Some((&rest[..end], &rest[end + "\n---\n".len()..]))
}

/// Parse one skill document.
///
/// Missing `name`/`description` fall back to placeholder strings; only a
/// broken structure or undecodable metadata block rejects the document.
pub fn parse_skill(root: &Path, path: &Path, text: &str) -> Result<Skill> {
    let (raw_frontmatter, body) = split_frontmatter(text).ok_or_else(|| {
        SiteError::InvalidSkill(format!("{}: missing frontmatter delimiters", path.display()))
    })?;

    let front: Frontmatter = serde_yaml::from_str(raw_frontmatter)
        .map_err(|err| SiteError::InvalidSkill(format!("{}: {err}", path.display())))?;

    let folder = path.parent().unwrap_or(root);
    let folder = folder.strip_prefix(root).unwrap_or(folder).to_path_buf();

    let mut metadata = BTreeMap::new();
    for (key, value) in &front.metadata {
        if let Some(display) = scalar_to_string(value) {
            metadata.insert(key.clone(), display);
        } else {
            warn!(
                "{}: dropping non-scalar metadata field `{key}`",
                path.display()
            );
        }
    }

    Ok(Skill {
        id: slug_from_folder(&folder),
        name: front.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        description: front
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        metadata,
        compatibility: front.compatibility.unwrap_or_default(),
        body: body.trim().to_string(),
        folder,
        references: Vec::new(),
    })
}

/// Derive the page slug from a skill folder path relative to the root.
#[must_use]
pub fn slug_from_folder(folder: &Path) -> String {
    let slug = folder
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        // SKILL.md sitting at the repository root has no folder to name it.
        "root".to_string()
    } else {
        slug
    }
}

/// Parse one reference document. Never fails: the title falls back to the
/// file stem when the document has no leading heading.
#[must_use]
pub fn parse_reference(path: &Path, text: &str) -> Reference {
    let slug = path.file_stem().map_or_else(
        || "reference".to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    );
    let title = text
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map_or_else(|| slug.clone(), |heading| heading.trim().to_string());
    Reference {
        slug,
        title,
        body: text.trim().to_string(),
    }
}
