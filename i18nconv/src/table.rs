//! The in-memory message table shared by both conversion directions.
//!
//! Each message key maps to its translations, one slot per language,
//! positionally aligned with the language list of the pass that built the
//! table. Keys keep the order in which they were first seen unless the table
//! is explicitly sorted.

use indexmap::IndexMap;
use tracing::warn;

use crate::{
    error::Error,
    formats::{
        csv::{self as table, Record},
        properties,
    },
};

/// Row order used when a table is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// First-seen order.
    #[default]
    Insertion,
    /// Plain lexicographic order of the full key, case-sensitive.
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageTable {
    rows: IndexMap<String, Vec<String>>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the end of the translations for `key`, creating the
    /// row if needed. Repeated keys accumulate; nothing is deduplicated.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.entry(key.into()).or_default().push(value.into());
    }

    /// Sets the translations for `key`, dropping whatever was there. An
    /// existing key keeps its position.
    pub fn replace(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.rows.insert(key.into(), values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rows
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn sort_keys(&mut self) {
        self.rows.sort_keys();
    }

    pub fn apply_order(&mut self, order: KeyOrder) {
        match order {
            KeyOrder::Insertion => {}
            KeyOrder::Sorted => self.sort_keys(),
        }
    }

    /// Rows whose number of translations differs from `width`.
    pub fn ragged_rows(&self, width: usize) -> impl Iterator<Item = (&str, usize)> {
        self.iter()
            .filter(move |(_, values)| values.len() != width)
            .map(|(key, values)| (key, values.len()))
    }

    /// Appends every pair of one resource file.
    pub fn extend_from_properties(&mut self, format: properties::Format) {
        for pair in format.pairs {
            self.append(pair.key, pair.value);
        }
    }

    /// Replaces rows from a parsed table and returns its language list.
    pub fn extend_from_table(&mut self, format: table::Format) -> Vec<String> {
        for record in format.records {
            self.replace(record.key, record.values);
        }
        format.languages
    }

    /// Renders the table with one column per language.
    ///
    /// Rows are written as they are; a row with fewer or more translations
    /// than languages is only reported in the log.
    pub fn to_table(&self, languages: &[String]) -> table::Format {
        for (key, count) in self.ragged_rows(languages.len()) {
            warn!(
                key,
                values = count,
                languages = languages.len(),
                "row width does not match the language list"
            );
        }

        let mut format = table::Format::new(languages.to_vec());
        for (key, values) in self.iter() {
            format.add_record(Record::new(key, values.to_vec()));
        }
        format
    }

    /// Renders one resource file per language, selecting each language's
    /// value by its position in `languages`.
    ///
    /// Every file is rendered before anything is returned, so a key without
    /// a value for some language fails the whole call.
    pub fn to_properties(&self, languages: &[String]) -> Result<Vec<properties::Format>, Error> {
        languages
            .iter()
            .enumerate()
            .map(|(index, language)| -> Result<properties::Format, Error> {
                let mut format = properties::Format::new(language.clone());
                for (key, values) in self.iter() {
                    let value = values.get(index).ok_or_else(|| Error::MissingTranslation {
                        key: key.to_string(),
                        language: language.clone(),
                    })?;
                    format.add_pair(key, value.clone());
                }
                Ok(format)
            })
            .collect()
    }
}
