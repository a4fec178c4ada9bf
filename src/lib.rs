//! skillsite - build a static documentation site from `SKILL.md` files.
//!
//! The crate is a single-pass batch pipeline: discover skill documents in a
//! repository tree, parse their YAML frontmatter, render markdown bodies to
//! HTML, and write the generated pages plus a machine-readable `llm.txt`
//! summary to the output directory.

pub mod config;
pub mod error;
pub mod site;
pub mod skills;

pub use error::{Result, SiteError};
