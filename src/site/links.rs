//! Cross-reference rewriting.
//!
//! Intra-repository links point at source documents (`.md`); the generated
//! site serves `.html`. Rewriting only touches markdown link targets and
//! `href`/`src` attribute values, so `.md` substrings in prose or code stay
//! as written.

use std::sync::LazyLock;

use regex::Regex;

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^()\s]+)\.md([#?][^)\s]*)?\)").expect("valid pattern"));

static ATTRIBUTE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(href|src)="([^"]+)\.md([#?][^"]*)?""#).expect("valid pattern")
});

/// Rewrite source-extension cross-references to their output-extension
/// form, preserving any `#fragment` or `?query` suffix.
#[must_use]
pub fn rewrite_links(markdown: &str) -> String {
    let pass = MARKDOWN_LINK.replace_all(markdown, "](${1}.html${2})");
    ATTRIBUTE_LINK
        .replace_all(&pass, "${1}=\"${2}.html${3}\"")
        .into_owned()
}
