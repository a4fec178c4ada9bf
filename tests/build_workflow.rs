//! End-to-end pipeline tests over a temporary skill repository.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use skillsite::SiteError;
use skillsite::config::BuildConfig;
use skillsite::site;
use tempfile::TempDir;

struct SiteFixture {
    _dir: TempDir,
    root: PathBuf,
}

impl SiteFixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("assets")).expect("assets dir");
        fs::write(
            root.join("assets/styles.css"),
            ":root { --border-color: #ddd; }\n",
        )
        .expect("stylesheet");
        Self { _dir: dir, root }
    }

    fn write(&self, relative: &str, content: &str) {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("dirs");
        fs::write(path, content).expect("write fixture file");
    }

    fn config(&self) -> BuildConfig {
        let mut config = BuildConfig::new(&self.root);
        config.timestamp = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        config
    }

    fn output(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join("docs").join(relative)).expect("output file")
    }

    fn has_output(&self, relative: &str) -> bool {
        self.root.join("docs").join(relative).exists()
    }
}

const GIT_BASICS: &str = r#"---
name: Git Basics
description: Common git flows
metadata:
  author: alice
  version: "1.2.0"
---

# Hi

See [the cheat sheet](references/cheatsheet.md#aliases).

Plain mention of SKILL.md in prose stays untouched.
"#;

#[test]
fn build_generates_all_artifacts() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);

    let report = site::build(&fixture.config()).unwrap();
    assert_eq!(report.skills, 1);
    assert_eq!(report.skipped, 0);
    // index, detail page, llm.txt
    assert_eq!(report.pages_written, 3);

    let index = fixture.output("index.html");
    assert!(index.contains("git-basics.html"));
    assert!(index.contains("Git Basics"));
    assert!(index.contains("Common git flows"));
    assert!(index.contains("Author: alice"));

    let page = fixture.output("git-basics.html");
    assert!(page.contains("<h1>Hi</h1>"));
    assert!(page.contains("Git Basics"));
    assert!(page.contains("Common git flows"));
    assert!(page.contains("<strong>Author:</strong> alice"));
    assert!(page.contains("<strong>Version:</strong> 1.2.0"));

    assert!(fixture.has_output("styles.css"));
    let summary = fixture.output("llm.txt");
    assert!(summary.contains("### Git Basics"));
    assert!(summary.contains("**Author:** alice"));
    assert!(summary.contains("Last updated: 2024-05-01 12:00:00 UTC"));
}

#[test]
fn malformed_documents_are_skipped_not_fatal() {
    let fixture = SiteFixture::new();
    fixture.write("good/SKILL.md", "---\nname: Good\n---\nBody\n");
    fixture.write("no-frontmatter/SKILL.md", "# Just markdown\n");
    fixture.write("bad-yaml/SKILL.md", "---\nname: [unclosed\n---\nBody\n");

    let report = site::build(&fixture.config()).unwrap();
    assert_eq!(report.skills, 1);
    assert_eq!(report.skipped, 2);

    let index = fixture.output("index.html");
    assert!(index.contains("good.html"));
    assert!(!index.contains("no-frontmatter"));
    assert!(!index.contains("bad-yaml"));

    let summary = fixture.output("llm.txt");
    assert!(summary.contains("### Good"));
    assert!(!summary.contains("no-frontmatter"));

    assert!(!fixture.has_output("no-frontmatter.html"));
    assert!(!fixture.has_output("bad-yaml.html"));
}

#[test]
fn links_rewritten_only_inside_link_syntax() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);

    site::build(&fixture.config()).unwrap();

    let page = fixture.output("git-basics.html");
    assert!(page.contains(r#"href="references/cheatsheet.html#aliases""#));
    assert!(page.contains("Plain mention of SKILL.md in prose"));
}

#[test]
fn reference_documents_get_pages_with_backlinks() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);
    fixture.write(
        "git-basics/references/cheatsheet.md",
        "# Cheat Sheet\n\nAlias table.\n",
    );

    let report = site::build(&fixture.config()).unwrap();
    // index, detail page, reference page, llm.txt
    assert_eq!(report.pages_written, 4);

    let page = fixture.output("references/cheatsheet.html");
    assert!(page.contains("<h1>Cheat Sheet</h1>"));
    assert!(page.contains(r#"href="../git-basics.html""#));
    assert!(page.contains(r#"href="../styles.css""#));

    // The parent page lists its references.
    let detail = fixture.output("git-basics.html");
    assert!(detail.contains("references/cheatsheet.html"));
}

#[test]
fn rebuild_with_fixed_timestamp_is_byte_identical() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);
    fixture.write(
        "git-basics/references/cheatsheet.md",
        "# Cheat Sheet\n\nAlias table.\n",
    );
    let config = fixture.config();

    site::build(&config).unwrap();
    let first = [
        fixture.output("index.html"),
        fixture.output("git-basics.html"),
        fixture.output("references/cheatsheet.html"),
        fixture.output("llm.txt"),
    ];

    site::build(&config).unwrap();
    let second = [
        fixture.output("index.html"),
        fixture.output("git-basics.html"),
        fixture.output("references/cheatsheet.html"),
        fixture.output("llm.txt"),
    ];

    assert_eq!(first, second);
}

#[test]
fn output_directory_is_not_rescanned() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);
    // A stale copy inside the output directory must not become a skill.
    fixture.write("docs/stale/SKILL.md", "---\nname: Stale\n---\nBody\n");

    let report = site::build(&fixture.config()).unwrap();
    assert_eq!(report.skills, 1);
    assert!(!fixture.output("index.html").contains("Stale"));
}

#[test]
fn scalar_text_is_escaped_in_output() {
    let fixture = SiteFixture::new();
    fixture.write(
        "xss/SKILL.md",
        "---\nname: \"<script>alert(1)</script>\"\ndescription: \"a & b\"\n---\nBody\n",
    );

    site::build(&fixture.config()).unwrap();

    let page = fixture.output("xss.html");
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("a &amp; b"));
}

#[test]
fn missing_stylesheet_asset_aborts() {
    let fixture = SiteFixture::new();
    fixture.write("git-basics/SKILL.md", GIT_BASICS);
    fs::remove_file(fixture.root.join("assets/styles.css")).unwrap();

    let err = site::build(&fixture.config()).unwrap_err();
    assert!(matches!(err, SiteError::MissingAsset(_)));
}

#[test]
fn absent_optional_metadata_produces_no_rows() {
    let fixture = SiteFixture::new();
    fixture.write("bare/SKILL.md", "---\nname: Bare\n---\nBody\n");

    site::build(&fixture.config()).unwrap();

    let page = fixture.output("bare.html");
    assert!(!page.contains("Author:"));
    assert!(!page.contains("Version:"));
    assert!(!page.contains("Compatibility:"));

    let summary = fixture.output("llm.txt");
    assert!(!summary.contains("**Author:**"));
}

#[test]
fn placeholder_defaults_for_unnamed_documents() {
    let fixture = SiteFixture::new();
    fixture.write("anon/SKILL.md", "---\nmetadata:\n  author: bob\n---\nBody\n");

    site::build(&fixture.config()).unwrap();

    let index = fixture.output("index.html");
    assert!(index.contains("Unnamed Skill"));
    assert!(index.contains("No description"));
}
