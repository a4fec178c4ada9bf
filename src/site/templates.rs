//! Page templates.
//!
//! Every user-controlled scalar (names, descriptions, metadata values,
//! titles) goes through [`escape_html`] before injection. The rendered
//! body fragment is inserted as-is; it is already HTML.

use crate::config::{BuildConfig, REFERENCES_DIR};
use crate::skills::types::{Reference, Skill};

/// Escape HTML special characters in user-controlled text.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display label for a metadata key: `author` becomes `Author`.
#[must_use]
pub fn field_label(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Collection index: one click-through card per skill.
#[must_use]
pub fn index_page(config: &BuildConfig, skills: &[Skill]) -> String {
    let mut cards = String::new();
    for skill in skills {
        let mut meta_parts = Vec::new();
        if let Some(author) = skill.metadata.get("author") {
            meta_parts.push(format!("<span>Author: {}</span>", escape_html(author)));
        }
        if let Some(version) = skill.metadata.get("version") {
            meta_parts.push(format!("<span>v{}</span>", escape_html(version)));
        }
        let meta_html = if meta_parts.is_empty() {
            String::new()
        } else {
            format!("<div class=\"skill-meta\">{}</div>", meta_parts.join(""))
        };

        cards.push_str(&format!(
            r#"                <div class="skill-card" onclick="location.href='{id}.html'">
                    <h3>{name}</h3>
                    <p>{description}</p>
                    {meta_html}
                </div>
"#,
            id = skill.id,
            name = escape_html(&skill.name),
            description = escape_html(&skill.description),
        ));
    }

    let main = format!(
        r#"        <section id="skills-list">
            <h2>Available Skills</h2>
            <div class="skills-grid">
{cards}            </div>
        </section>"#
    );

    page_shell(
        config,
        &config.site_title,
        "A collection of development skills and patterns organized for both humans and LLMs",
        "",
        &main,
    )
}

/// Detail page for a single skill.
#[must_use]
pub fn skill_page(config: &BuildConfig, skill: &Skill, body_html: &str) -> String {
    let main = format!(
        r#"        <section>
            <a href="index.html" class="btn-back">&larr; Back to Skills</a>

            <div id="skill-content">
                <h1>{name}</h1>
                <p><strong>Description:</strong> {description}</p>
                {meta_rows}{references}
                <hr style="margin: 20px 0; border: none; border-top: 1px solid var(--border-color);">
                {body_html}
            </div>
        </section>"#,
        name = escape_html(&skill.name),
        description = escape_html(&skill.description),
        meta_rows = metadata_rows(skill),
        references = references_block(skill),
    );

    page_shell(
        config,
        &format!("{} - {}", escape_html(&skill.name), config.site_title),
        &escape_html(&skill.description),
        "",
        &main,
    )
}

/// Page for a supplementary reference document, back-linked to its skill.
#[must_use]
pub fn reference_page(
    config: &BuildConfig,
    skill: &Skill,
    reference: &Reference,
    body_html: &str,
) -> String {
    let main = format!(
        r#"        <section>
            <a href="../{id}.html" class="btn-back">&larr; Back to {name}</a>

            <div id="skill-content">
                {body_html}
            </div>
        </section>"#,
        id = skill.id,
        name = escape_html(&skill.name),
    );

    page_shell(
        config,
        &format!("{} - {}", escape_html(&reference.title), config.site_title),
        &escape_html(&skill.description),
        "../",
        &main,
    )
}

/// Metadata rows shown only for populated fields: compatibility, author and
/// version first, then any remaining metadata keys in sorted order.
fn metadata_rows(skill: &Skill) -> String {
    let mut rows = String::new();
    if !skill.compatibility.is_empty() {
        rows.push_str(&format!(
            "<p><strong>Compatibility:</strong> {}</p>",
            escape_html(&skill.compatibility)
        ));
    }
    if let Some(author) = skill.metadata.get("author") {
        rows.push_str(&format!(
            "<p><strong>Author:</strong> {}</p>",
            escape_html(author)
        ));
    }
    if let Some(version) = skill.metadata.get("version") {
        rows.push_str(&format!(
            "<p><strong>Version:</strong> {}</p>",
            escape_html(version)
        ));
    }
    for (key, value) in &skill.metadata {
        if key == "author" || key == "version" {
            continue;
        }
        rows.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>",
            escape_html(&field_label(key)),
            escape_html(value)
        ));
    }
    rows
}

fn references_block(skill: &Skill) -> String {
    if skill.references.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for reference in &skill.references {
        items.push_str(&format!(
            "                        <li><a href=\"{dir}/{slug}.html\">{title}</a></li>\n",
            dir = REFERENCES_DIR,
            slug = reference.slug,
            title = escape_html(&reference.title),
        ));
    }

    format!(
        r#"
                <div class="skill-references">
                    <h2>References</h2>
                    <ul>
{items}                    </ul>
                </div>"#
    )
}

/// Shared document shell. `asset_prefix` is `""` for root-level pages and
/// `"../"` for pages in the references subfolder.
fn page_shell(
    config: &BuildConfig,
    title: &str,
    description: &str,
    asset_prefix: &str,
    main: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{asset_prefix}styles.css">
    <meta name="description" content="{description}">
</head>
<body>
    <header>
        <div class="container">
            <h1>{site_title}</h1>
            <p class="subtitle">{site_subtitle}</p>
        </div>
    </header>

    <main class="container">
{main}
    </main>

    <footer>
        <div class="container">
            <p>
                <a href="{repo_url}" target="_blank" rel="noopener">View on GitHub</a>
                |
                <a href="{asset_prefix}llm.txt">llm.txt</a>
            </p>
        </div>
    </footer>
</body>
</html>
"#,
        site_title = escape_html(&config.site_title),
        site_subtitle = escape_html(&config.site_subtitle),
        repo_url = config.repo_url,
    )
}
