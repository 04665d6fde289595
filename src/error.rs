//! Error type for the fallible edges of the crate.
//!
//! The matrix derivations themselves never fail. Errors only come from
//! parsing user-supplied parameters and loading report files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Unknown article category: '{0}'")]
    UnknownCategory(String),

    #[error("Invalid page size {0}, expected one of 30, 50, 100")]
    InvalidPageSize(u32),

    #[error("Invalid {param} value: '{value}'")]
    InvalidParameter { param: &'static str, value: String },

    #[error("Language catalog must contain exactly one canonical language, found {0}")]
    InvalidCatalog(usize),

    #[error("Failed to read report {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse report {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
