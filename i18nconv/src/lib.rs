#![forbid(unsafe_code)]
//! Conversion between per-language `.properties` message files and a single
//! multi-language CSV table.
//!
//! A directory of `<prefix>_<language>.properties` files becomes one
//! `uiMessages.csv` with a column per language; a table becomes one
//! `uiMessages_<language>.properties` per column. Both directions go through
//! the shared [`MessageTable`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use i18nconv::{Config, KeyOrder, run};
//!
//! // Directory of resource files to ./uiMessages.csv
//! run(&Config::new("./resources"))?;
//!
//! // Table back to ./out/uiMessages_<language>.properties, sorted by key
//! run(&Config::new("uiMessages.csv")
//!     .with_output_dir("./out")
//!     .with_key_order(KeyOrder::Sorted))?;
//! # Ok::<(), i18nconv::Error>(())
//! ```
//!
//! # Formats
//!
//! - **Resource file**: `key=value` per line, blank lines and `#` comments ignored.
//! - **Table**: header `Key,<lang1>,<lang2>,...`, then `key,<value1>,<value2>,...`.
//!
//! Neither format escapes its delimiters: a value cannot contain `=` in a
//! resource file, and a comma inside a table value shifts the columns.

pub mod collect;
pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod table;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    collect::{ResourceFile, collect_resource_files},
    config::Config,
    converter::{Direction, Report, resources_to_table, run, table_to_resources},
    error::Error,
    formats::FormatType,
    table::{KeyOrder, MessageTable},
};
