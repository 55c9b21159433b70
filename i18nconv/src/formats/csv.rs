//! Support for the multi-language CSV table.
//!
//! The first line is a header whose first column labels the keys and whose
//! remaining columns name one language each. Every other line holds a key
//! followed by its translations in header order.
//!
//! Fields are split on every comma. Quotes carry no meaning and nothing is
//! escaped on output, so a comma inside a value shifts the columns after it.
use std::{io::BufRead, path::Path};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::warn;

use crate::{error::Error, formats::read_decoded, traits::Parser};

/// Label of the first header column.
pub const KEY_COLUMN: &str = "Key";

/// One data row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub values: Vec<String>,
}

impl Record {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    fn from_fields(fields: &StringRecord) -> Self {
        let mut fields = fields.iter();
        let key = fields.next().unwrap_or_default().to_string();
        Self {
            key,
            values: fields.map(str::to_string).collect(),
        }
    }
}

/// A parsed CSV table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    /// Language columns in header order.
    pub languages: Vec<String>,
    /// Data rows in file order, duplicates included.
    pub records: Vec<Record>,
}

impl Format {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            records: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Records whose value count differs from the number of languages.
    pub fn ragged_records(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|record| record.values.len() != self.languages.len())
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut lines = rdr.records();

        let header = match lines.next() {
            Some(header) => header.map_err(Error::CsvParse)?,
            None => return Err(Error::malformed_table("missing header row")),
        };
        let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
        if languages.is_empty() {
            return Err(Error::malformed_table(
                "header row has no language columns",
            ));
        }

        let mut format = Format::new(languages);
        for line in lines {
            let line = line.map_err(Error::CsvParse)?;
            format.add_record(Record::from_fields(&line));
        }

        for record in format.ragged_records() {
            warn!(
                key = %record.key,
                values = record.values.len(),
                languages = format.languages.len(),
                "row does not match the header width"
            );
        }

        Ok(format)
    }

    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        let mut header = vec![KEY_COLUMN];
        header.extend(self.languages.iter().map(String::as_str));
        wtr.write_record(&header).map_err(Error::CsvParse)?;

        for record in &self.records {
            let mut row = vec![record.key.as_str()];
            row.extend(record.values.iter().map(String::as_str));
            wtr.write_record(&row).map_err(Error::CsvParse)?;
        }

        wtr.flush().map_err(Error::Io)?;
        Ok(())
    }

    /// Override default file reading to strip a byte order mark before the
    /// header is split.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let decoded = read_decoded(path)?;
        Self::from_str(&decoded)
    }
}
