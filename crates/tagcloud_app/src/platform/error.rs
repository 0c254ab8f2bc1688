use std::io;

use tagcloud_core::WordLimitError;
use tagcloud_engine::TagCloudError;
use thiserror::Error;

/// Everything that ends a run early. Displayed after `ERROR: ` on stderr.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("EMPTY words")]
    InvalidWordCount(#[from] WordLimitError),
    #[error("Invalid number of words - {0}")]
    InvalidNumber(String),
    #[error("Missing input - {0}")]
    MissingInput(&'static str),
    #[error("Cannot read answer - {0}")]
    Prompt(#[from] io::Error),
    #[error(transparent)]
    TagCloud(#[from] TagCloudError),
}
