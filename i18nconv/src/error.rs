//! All error types for the i18nconv crate.
//!
//! These are returned from all fallible operations (directory scanning, parsing,
//! serialization, conversion). Every error aborts the run it occurred in.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("no .properties files found in the input directory {}", .dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error(
        "expected 2 parts from split with \"_\" in the file name: {}, found {segments}",
        .path.display()
    )]
    MalformedFilename { path: PathBuf, segments: usize },

    #[error("{}: expected 2 parts found {parts} on line {line}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        parts: usize,
    },

    #[error("malformed table: {0}")]
    MalformedTable(String),

    #[error("missing translation for key `{key}` in language `{language}`")]
    MissingTranslation { key: String, language: String },
}

impl Error {
    /// Creates a new malformed table error.
    pub fn malformed_table(message: impl Into<String>) -> Self {
        Error::MalformedTable(message.into())
    }

    /// Replaces the source path of a [`Error::MalformedRecord`].
    ///
    /// Parsers working on an in-memory reader do not know which file they are
    /// reading; callers that do attach the path afterwards.
    pub fn with_path(self, source: impl Into<PathBuf>) -> Self {
        match self {
            Error::MalformedRecord { line, parts, .. } => Error::MalformedRecord {
                path: source.into(),
                line,
                parts,
            },
            other => other,
        }
    }
}
