//! Skill document model, parsing and discovery.

pub mod discovery;
pub mod parser;
pub mod types;

pub use types::{Reference, Skill};
