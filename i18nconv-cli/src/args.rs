use std::path::{Path, PathBuf};

use clap::Parser;
use i18nconv::{Config, KeyOrder};
use indoc::indoc;

/// Printed when the tool is started without any input.
pub const USAGE: &str = indoc! {"
    Usage: i18n -i ./path/to/my/resources OR i18n -i ./path/to/uiMessages.csv

    provided an input path i18n determines whether or not to generate a .csv
    file or a set of .properties files in the current directory.
"};

/// Convert .properties message files to one CSV table and back.
#[derive(Parser, Debug)]
#[command(name = "i18n", author, version, about, long_about = None)]
pub struct Args {
    /// Input path: either a directory or a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write rows sorted by key instead of the order keys were first seen
    #[arg(long)]
    pub sort_keys: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the run configuration, or `None` when no input was given.
    pub fn to_config<P: AsRef<Path>>(&self, output_dir: P) -> Option<Config> {
        let key_order = if self.sort_keys {
            KeyOrder::Sorted
        } else {
            KeyOrder::Insertion
        };

        self.input.as_ref().map(|input| {
            Config::new(input)
                .with_output_dir(output_dir)
                .with_key_order(key_order)
        })
    }
}
