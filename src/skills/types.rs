//! Skill and reference data model.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_yaml::Value;

/// Placeholder for documents whose frontmatter omits `name`.
pub const DEFAULT_NAME: &str = "Unnamed Skill";

/// Placeholder for documents whose frontmatter omits `description`.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// One documented practice, parsed from a `SKILL.md` file.
///
/// Immutable after parse. The pipeline builds exactly one per source file
/// whose metadata block decodes cleanly.
#[derive(Debug, Clone)]
pub struct Skill {
    /// Slug derived from the skill folder path (separators become `-`).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Populated scalar metadata fields (author, version, ...).
    pub metadata: BTreeMap<String, String>,
    /// Compatibility note; empty when the frontmatter omits it.
    pub compatibility: String,
    /// Markdown body following the metadata block.
    pub body: String,
    /// Skill folder relative to the repository root.
    pub folder: PathBuf,
    /// Supplementary documents from the `references/` subfolder.
    pub references: Vec<Reference>,
}

/// Supplementary markdown document scoped to one skill.
#[derive(Debug, Clone)]
pub struct Reference {
    /// File stem; names the generated page.
    pub slug: String,
    /// First `#` heading, falling back to the file stem.
    pub title: String,
    pub body: String,
}

/// Raw frontmatter record as decoded from the metadata block.
///
/// Known fields are explicit and optional; unknown keys land in `extra` so
/// newer frontmatter does not break older builds.
#[derive(Debug, Deserialize)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
    pub compatibility: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Display form of a YAML scalar; `None` for nested values, which have no
/// defined rendering in metadata rows.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
