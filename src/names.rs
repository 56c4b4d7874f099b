//! Name source reader
//!
//! Reads researcher names from either a CSV file with a `name` column or a
//! plain-text file with one name per line. File order and duplicates are
//! preserved so the output CSV lines up with the input.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamesError {
    #[error("failed to read names file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse names CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("names CSV has no 'name' column")]
    MissingNameColumn,
}

/// Read researcher names from a TXT or CSV file.
///
/// A `.csv` path is parsed with a header row and the `name` column extracted;
/// rows with an empty or missing value are skipped. Any other path is read
/// line by line, skipping blanks and `#` comments.
pub fn load_names(path: &Path) -> Result<Vec<String>, NamesError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_from_csv(path)
    } else {
        load_from_lines(path)
    }
}

fn load_from_csv(path: &Path) -> Result<Vec<String>, NamesError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let name_index = rdr
        .headers()?
        .iter()
        .position(|h| h == "name")
        .ok_or(NamesError::MissingNameColumn)?;

    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(value) = record.get(name_index) {
            let value = value.trim();
            if !value.is_empty() {
                names.push(value.to_string());
            }
        }
    }
    Ok(names)
}

fn load_from_lines(path: &Path) -> Result<Vec<String>, NamesError> {
    let raw = fs::read_to_string(path).map_err(|source| NamesError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
