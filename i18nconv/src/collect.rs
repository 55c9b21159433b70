//! Discovery of `.properties` files under an input directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;
use walkdir::WalkDir;

use crate::{error::Error, formats::FormatType};

/// Number of parts a resource file name must split into on `_`: the prefix
/// and `<language>.properties`.
pub const FILE_NAME_SEGMENTS: usize = 2;

/// A resource file together with the language derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub language: String,
    pub path: PathBuf,
}

/// Recursively collects every `.properties` file under `dir`.
///
/// The walk is depth first with entries sorted by file name within each
/// directory, which fixes the column order of the generated table.
pub fn collect_resource_files<P: AsRef<Path>>(dir: P) -> Result<Vec<ResourceFile>, Error> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_properties_extension(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        let language = language_from_file_name(&path)?;
        if language.parse::<LanguageIdentifier>().is_err() {
            warn!(
                path = %path.display(),
                language = %language,
                "language segment is not a valid BCP 47 identifier"
            );
        }
        debug!(path = %path.display(), language = %language, "found resource file");
        files.push(ResourceFile { language, path });
    }

    if files.is_empty() {
        return Err(Error::NoInputFiles {
            dir: dir.to_path_buf(),
        });
    }

    Ok(files)
}

/// The language list of a collection, positionally aligned with it.
pub fn languages(files: &[ResourceFile]) -> Vec<String> {
    files.iter().map(|file| file.language.clone()).collect()
}

/// Derives the language from a name of the form `<prefix>_<language>.properties`.
///
/// Only the file name is split, so underscores in parent directories do not
/// count. On failure the error carries the number of parts the name split into.
pub fn language_from_file_name(path: &Path) -> Result<String, Error> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() != FILE_NAME_SEGMENTS {
        return Err(Error::MalformedFilename {
            path: path.to_path_buf(),
            segments: parts.len(),
        });
    }

    Ok(strip_properties_extension(parts[1])
        .unwrap_or(parts[1])
        .to_string())
}

fn strip_properties_extension(name: &str) -> Option<&str> {
    name.strip_suffix(FormatType::Properties.extension())
        .and_then(|rest| rest.strip_suffix('.'))
}

fn has_properties_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(strip_properties_extension)
        .is_some()
}
