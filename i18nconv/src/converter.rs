//! Conversion between a directory of `.properties` files and a CSV table.
//!
//! The direction is chosen once from the input path: a directory becomes one
//! table, a file is read as a table and becomes one resource file per
//! language. Any error aborts the run; files written before the error are
//! left in place.

use std::{
    collections::HashSet,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    collect::{self, collect_resource_files},
    config::Config,
    error::Error,
    formats::{FormatType, PropertiesFormat, TableFormat},
    table::{KeyOrder, MessageTable},
    traits::Parser,
};

/// Base name shared by every generated file.
pub const OUTPUT_FILE_PREFIX: &str = "uiMessages";

/// Which way a run converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Directory of resource files to one table.
    ToTable,
    /// One table to a resource file per language.
    ToResources,
}

impl Direction {
    /// Picks the direction from the type of `input`.
    pub fn detect<P: AsRef<Path>>(input: P) -> Result<Self, Error> {
        let metadata = fs::metadata(input)?;
        if metadata.is_dir() {
            Ok(Direction::ToTable)
        } else {
            Ok(Direction::ToResources)
        }
    }

    /// Format of the files this direction writes.
    pub fn output_format(&self) -> FormatType {
        match self {
            Direction::ToTable => FormatType::Table,
            Direction::ToResources => FormatType::Properties,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub direction: Direction,
    /// Language list in column order.
    pub languages: Vec<String>,
    /// Number of distinct message keys.
    pub keys: usize,
    /// Files written, in the order they were written.
    pub written: Vec<PathBuf>,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wrote {} {} file(s) with {} keys in {} languages [{}]",
            self.written.len(),
            self.direction.output_format(),
            self.keys,
            self.languages.len(),
            self.languages.join(", ")
        )
    }
}

/// Runs one conversion as described by `config`.
///
/// # Arguments
///
/// * `config` - Input path, output directory and key order.
///
/// # Returns
///
/// A [`Report`] of what was written, or the first error encountered.
///
/// # Example
///
/// ```rust,no_run
/// use i18nconv::{Config, converter::run};
///
/// let report = run(&Config::new("./resources").with_output_dir("./generated"))?;
/// println!("{}", report);
/// # Ok::<(), i18nconv::Error>(())
/// ```
pub fn run(config: &Config) -> Result<Report, Error> {
    let direction = Direction::detect(&config.input)?;
    info!(input = %config.input.display(), ?direction, "starting conversion");

    match direction {
        Direction::ToTable => {
            resources_to_table(&config.input, &config.output_dir, config.key_order)
        }
        Direction::ToResources => {
            table_to_resources(&config.input, &config.output_dir, config.key_order)
        }
    }
}

/// Converts every `.properties` file under `input_dir` into one table.
///
/// Columns follow the order the files are found in; each file's values are
/// appended to the rows of its keys. The table is written to
/// `output_dir/uiMessages.csv`.
///
/// # Errors
///
/// Returns `NoInputFiles` when the directory has no resource files,
/// `MalformedFilename` for a file name without a language segment and
/// `MalformedRecord` for a line that is not `key=value`. Nothing is written in
/// any of these cases.
pub fn resources_to_table<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    key_order: KeyOrder,
) -> Result<Report, Error> {
    let files = collect_resource_files(input_dir)?;
    let languages = collect::languages(&files);

    let mut table = MessageTable::new();
    for file in &files {
        let format = PropertiesFormat::read_from(&file.path)?;
        debug!(
            path = %file.path.display(),
            language = %file.language,
            pairs = format.pairs.len(),
            "parsed resource file"
        );
        table.extend_from_properties(format);
    }
    if table.is_empty() {
        warn!("resource files contain no messages, writing a header-only table");
    }
    table.apply_order(key_order);

    let path = output_dir.as_ref().join(table_file_name());
    table.to_table(&languages).write_to(&path)?;
    debug!(path = %path.display(), "wrote table");

    Ok(Report {
        direction: Direction::ToTable,
        keys: table.len(),
        languages,
        written: vec![path],
    })
}

/// Converts the table at `input_file` into one resource file per language
/// column, named `uiMessages_<language>.properties` inside `output_dir`.
///
/// # Errors
///
/// Returns `MalformedTable` for a missing header or an unusable language
/// column and `MissingTranslation` for a row shorter than the header. Both are
/// detected before any file is created.
pub fn table_to_resources<P: AsRef<Path>, Q: AsRef<Path>>(
    input_file: P,
    output_dir: Q,
    key_order: KeyOrder,
) -> Result<Report, Error> {
    let format = TableFormat::read_from(input_file)?;

    let mut table = MessageTable::new();
    let languages = table.extend_from_table(format);
    validate_languages(&languages)?;
    table.apply_order(key_order);

    let formats = table.to_properties(&languages)?;

    let mut written = Vec::with_capacity(formats.len());
    for format in &formats {
        let path = output_dir.as_ref().join(resource_file_name(&format.language));
        format.write_to(&path)?;
        debug!(path = %path.display(), pairs = format.pairs.len(), "wrote resource file");
        written.push(path);
    }

    Ok(Report {
        direction: Direction::ToResources,
        keys: table.len(),
        languages,
        written,
    })
}

/// File name of the table generated from a directory.
pub fn table_file_name() -> String {
    format!("{OUTPUT_FILE_PREFIX}.{}", FormatType::Table.extension())
}

/// File name of the resource file generated for `language`.
pub fn resource_file_name(language: &str) -> String {
    format!(
        "{OUTPUT_FILE_PREFIX}_{language}.{}",
        FormatType::Properties.extension()
    )
}

// Languages end up in file names, so they must be non-empty, free of path
// separators and unique.
fn validate_languages(languages: &[String]) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for language in languages {
        if language.trim().is_empty() || language.contains(['/', '\\']) {
            return Err(Error::malformed_table(format!(
                "unusable language column `{language}`"
            )));
        }
        if !seen.insert(language.as_str()) {
            return Err(Error::malformed_table(format!(
                "duplicate language column `{language}`"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn langs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_direction() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("uiMessages.csv");
        fs::write(&file, "Key,en\n").unwrap();

        assert_eq!(Direction::detect(temp_dir.path()).unwrap(), Direction::ToTable);
        assert_eq!(Direction::detect(&file).unwrap(), Direction::ToResources);
    }

    #[test]
    fn test_detect_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = Direction::detect(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_table_file_name() {
        assert_eq!(table_file_name(), "uiMessages.csv");
    }

    #[test]
    fn test_comment_only_resources_write_header_only_table() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("uiMessages_en.properties"), "# nothing yet\n").unwrap();

        let report = resources_to_table(input.path(), output.path(), KeyOrder::Insertion).unwrap();

        assert_eq!(report.keys, 0);
        assert_eq!(
            fs::read_to_string(output.path().join("uiMessages.csv")).unwrap(),
            "Key,en\n"
        );
    }

    #[test]
    fn test_resource_file_name() {
        assert_eq!(resource_file_name("en"), "uiMessages_en.properties");
        assert_eq!(resource_file_name("pt-BR"), "uiMessages_pt-BR.properties");
    }

    #[test]
    fn test_validate_languages() {
        assert!(validate_languages(&langs(&["en", "fr"])).is_ok());
        assert!(matches!(
            validate_languages(&langs(&["en", ""])),
            Err(Error::MalformedTable(_))
        ));
        assert!(matches!(
            validate_languages(&langs(&["../en"])),
            Err(Error::MalformedTable(_))
        ));
        assert!(matches!(
            validate_languages(&langs(&["en", "en"])),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            direction: Direction::ToResources,
            languages: langs(&["en", "fr"]),
            keys: 3,
            written: vec![PathBuf::from("a"), PathBuf::from("b")],
        };
        assert_eq!(
            report.to_string(),
            "wrote 2 Properties file(s) with 3 keys in 2 languages [en, fr]"
        );
    }
}
