//! Support for `.properties` resource files.
//!
//! One file holds the messages of one language as `key=value` lines. Blank
//! lines and lines starting with `#` are ignored. Values are taken verbatim
//! after trimming: there is no escaping, so a value can never contain `=`.

use std::{fmt::Display, io::BufRead, path::Path};

use crate::{error::Error, formats::read_decoded, traits::Parser};

/// Comment marker at the start of a line.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value.
pub const SEPARATOR: char = '=';

/// A single `.properties` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    /// Language code for this file, if known. Parsing leaves it empty; the
    /// language comes from the file name.
    pub language: String,
    /// All key-value pairs in file order, duplicates included.
    pub pairs: Vec<Pair>,
}

impl Format {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            pairs: Vec::new(),
        }
    }

    pub fn add_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push(Pair {
            key: key.into(),
            value: value.into(),
        });
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut pairs = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(pair) = Pair::parse_line(&line, index + 1)? {
                pairs.push(pair);
            }
        }

        Ok(Format {
            language: String::new(),
            pairs,
        })
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = String::new();
        for pair in &self.pairs {
            content.push_str(&pair.to_string());
            content.push('\n');
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)?;
        writer.flush().map_err(Error::Io)
    }

    /// Override default file reading to support BOM-aware decoding and to
    /// name the file in record errors.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let decoded = read_decoded(path)?;
        Self::from_str(&decoded).map_err(|e| e.with_path(path))
    }
}

/// One `key=value` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    /// Parses one line of a resource file.
    ///
    /// Returns `Ok(None)` for blank lines and for lines whose first character
    /// is `#`. An indented `#` is part of the key. Any other line has to
    /// split into exactly two parts on `=`; `line_number` is 1-based and only
    /// used for the error.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Pair>, Error> {
        if line.trim().is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        match parts.as_slice() {
            [key, value] => Ok(Some(Pair {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            })),
            _ => Err(Error::MalformedRecord {
                path: Default::default(),
                line: line_number,
                parts: parts.len(),
            }),
        }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.key, SEPARATOR, self.value)
    }
}
