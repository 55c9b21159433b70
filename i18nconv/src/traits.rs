//! The read/write contract shared by resource files and tables.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// Moves one message file between disk and its in-memory form.
///
/// Implementors only supply [`from_reader`](Parser::from_reader) and
/// [`to_writer`](Parser::to_writer). Both formats override
/// [`read_from`](Parser::read_from) to decode byte order marks and to name
/// the file in record errors.
///
/// # Example
///
/// ```rust
/// use i18nconv::{formats::TableFormat, traits::Parser};
///
/// let table = TableFormat::from_str("Key,en,fr\ngreeting,Hello,Bonjour\n")?;
/// assert_eq!(table.languages, ["en", "fr"]);
/// assert_eq!(table.render()?, "Key,en,fr\ngreeting,Hello,Bonjour\n");
/// # Ok::<(), i18nconv::Error>(())
/// ```
pub trait Parser {
    /// Parses everything `reader` yields.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Opens and parses the file at `path` as raw UTF-8.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serializes into `writer` and flushes it.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Serializes into a `String`, as the file would read.
    fn render(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Creates or truncates the file at `path` and serializes into it.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }
}
