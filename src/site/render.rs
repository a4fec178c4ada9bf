//! Markdown rendering.

use pulldown_cmark::{Event, Options, Parser, html};

/// Convert a markdown body into an HTML fragment.
///
/// Tables, strikethrough and task lists are enabled, and soft line breaks
/// are promoted to hard breaks so single newlines inside a paragraph
/// survive as `<br>`.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, opts).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
