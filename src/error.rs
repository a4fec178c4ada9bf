//! Error types for the site builder.
//!
//! Only [`SiteError::InvalidSkill`] is recoverable: the pipeline downgrades
//! it to a logged skip and continues. Everything else aborts the run.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing template asset: {0}")]
    MissingAsset(String),

    #[error("directory traversal failed: {0}")]
    Walk(String),

    #[error("invalid skill document: {0}")]
    InvalidSkill(String),
}
