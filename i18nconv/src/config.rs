//! Options controlling one conversion run.

use std::path::{Path, PathBuf};

use crate::table::KeyOrder;

/// Everything a conversion run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// A directory of `.properties` files or a single CSV table.
    pub input: PathBuf,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Row order of the generated files.
    pub key_order: KeyOrder,
}

impl Config {
    /// Creates a config writing into the current directory in first-seen key order.
    pub fn new<P: AsRef<Path>>(input: P) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output_dir: PathBuf::from("."),
            key_order: KeyOrder::default(),
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Sets the key order.
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }
}
