//! File formats handled by i18nconv.
//!
//! - [`properties`]: one `key=value` resource file per language.
//! - [`csv`]: one comma-separated table with a column per language.

pub mod csv;
pub mod properties;

use std::{fs::File, io::Read, path::Path};

use crate::error::Error;

// Reexporting the formats for easier access
pub use self::csv::Format as TableFormat;
pub use properties::Format as PropertiesFormat;

/// Extension shared by every resource file.
const PROPERTIES_EXTENSION: &str = "properties";

/// Extension of the table file.
const TABLE_EXTENSION: &str = "csv";

/// The two formats the converter moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    Properties,
    Table,
}

impl FormatType {
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Properties => PROPERTIES_EXTENSION,
            FormatType::Table => TABLE_EXTENSION,
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Properties => write!(f, "Properties"),
            FormatType::Table => write!(f, "Table"),
        }
    }
}

/// Reads a whole file into a UTF-8 string.
///
/// A byte order mark selects the encoding (UTF-8 or UTF-16) and is stripped;
/// without one the content passes through as UTF-8.
pub(crate) fn read_decoded<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;
    Ok(decoded)
}
