//! Error type shared by the dictionary, grid and search modules.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list produced no usable words.
    #[error("dictionary contains no usable words")]
    EmptyDictionary,

    /// A word containing something other than `a-z`.
    #[error("invalid word {0:?}: only lower-case a-z letters are supported")]
    InvalidWord(String),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
