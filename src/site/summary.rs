//! Machine-readable site summary (`llm.txt`).

use crate::config::BuildConfig;
use crate::skills::types::Skill;

use super::templates::field_label;

/// Render the aggregate knowledge-base document: one section per parsed
/// skill with its populated metadata fields, plus a generation timestamp.
#[must_use]
pub fn llm_txt(config: &BuildConfig, skills: &[Skill]) -> String {
    let mut sections = String::new();
    for skill in skills {
        sections.push_str(&format!(
            "\n### {}\n**Description:** {}\n",
            skill.name, skill.description
        ));
        if let Some(author) = skill.metadata.get("author") {
            sections.push_str(&format!("**Author:** {author}\n"));
        }
        if let Some(version) = skill.metadata.get("version") {
            sections.push_str(&format!("**Version:** {version}\n"));
        }
        if !skill.compatibility.is_empty() {
            sections.push_str(&format!("**Compatibility:** {}\n", skill.compatibility));
        }
        for (key, value) in &skill.metadata {
            if key == "author" || key == "version" {
                continue;
            }
            sections.push_str(&format!("**{}:** {value}\n", field_label(key)));
        }
        sections.push_str("\n---\n");
    }

    let updated = config.generated_at().format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r"# {title} - LLM Knowledge Base

This file provides structured information about available skills in this repository for LLM consumption.

## Repository Information
- Repository: {repo_url}
- Purpose: Collection of development skills and patterns
- Format: Each skill is documented in a SKILL.md file with YAML frontmatter

## Available Skills
{sections}

## How to Use This Knowledge Base

### For LLMs:
1. When a user asks about skills in this repository, reference the skill descriptions above
2. Each skill provides comprehensive patterns for specific development tasks
3. Pay attention to the compatibility requirements and metadata
4. Skills are self-contained and can be referenced independently

### For Humans:
- Each skill includes detailed documentation with code examples
- Click on individual skills in the web interface to see full documentation

## Update Information
This file is regenerated on every site build.
Last updated: {updated}
",
        title = config.site_title,
        repo_url = config.repo_url,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn config() -> BuildConfig {
        let mut config = BuildConfig::new("/repo");
        config.timestamp = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
        config
    }

    fn skill(name: &str) -> Skill {
        Skill {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: "Does things".to_string(),
            metadata: BTreeMap::new(),
            compatibility: String::new(),
            body: String::new(),
            folder: PathBuf::from(name),
            references: Vec::new(),
        }
    }

    #[test]
    fn lists_each_skill_with_description() {
        let text = llm_txt(&config(), &[skill("Alpha"), skill("Beta")]);
        assert!(text.contains("### Alpha"));
        assert!(text.contains("### Beta"));
        assert!(text.contains("**Description:** Does things"));
    }

    #[test]
    fn absent_fields_produce_no_lines() {
        let text = llm_txt(&config(), &[skill("Alpha")]);
        assert!(!text.contains("**Author:**"));
        assert!(!text.contains("**Version:**"));
        assert!(!text.contains("**Compatibility:**"));
    }

    #[test]
    fn populated_fields_are_listed() {
        let mut s = skill("Alpha");
        s.compatibility = "any".to_string();
        s.metadata
            .insert("author".to_string(), "alice".to_string());
        s.metadata
            .insert("license".to_string(), "MIT".to_string());

        let text = llm_txt(&config(), &[s]);
        assert!(text.contains("**Author:** alice"));
        assert!(text.contains("**Compatibility:** any"));
        assert!(text.contains("**License:** MIT"));
    }

    #[test]
    fn fixed_timestamp_renders_in_utc_format() {
        let text = llm_txt(&config(), &[]);
        assert!(text.contains("Last updated: 2024-05-01 12:30:00 UTC"));
    }
}
