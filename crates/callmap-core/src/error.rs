//! Error type for callmap-core.

use std::path::PathBuf;

use crate::record::Malformed;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input line {line_no}")]
    Read {
        line_no: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Write(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("invalid output dialect: {0}")]
    InvalidDialect(String),

    #[error("malformed record on line {line_no} ({reason}): {line:?}")]
    Malformed {
        line_no: usize,
        line: String,
        reason: Malformed,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
