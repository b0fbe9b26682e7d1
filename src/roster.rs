//! Roster loading from CSV files.
//!
//! A roster is an ordered list of student display names. The CSV must carry a
//! header row; which columns are required depends on the [`RosterFormat`].

use std::path::Path;

use clap::ValueEnum;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Column layout of the roster CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RosterFormat {
    /// Separate `First Name` and `Last Name` columns.
    Standard,
    /// A single `Full Name` (or `Name`) column.
    Custom,
}

/// Loads the student roster from `path`.
///
/// Returns the display names in CSV row order. Header validation happens
/// before any record is read, so a missing column is reported once, naming
/// every absent column, and no partial roster is ever returned.
pub fn load_roster(path: &Path, format: RosterFormat) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(GenerateError::RosterNotFound(path.to_path_buf()));
    }

    // Flexible so short rows surface as a row-numbered error instead of a
    // generic length mismatch.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h == name);

    let mut names = Vec::new();
    match format {
        RosterFormat::Standard => {
            let (first, last) = match (find("First Name"), find("Last Name")) {
                (Some(f), Some(l)) => (f, l),
                (f, l) => {
                    let mut missing = Vec::new();
                    if f.is_none() {
                        missing.push("First Name");
                    }
                    if l.is_none() {
                        missing.push("Last Name");
                    }
                    return Err(GenerateError::MissingColumns(missing.join(", ")));
                }
            };
            for (row, record) in reader.records().enumerate() {
                let record = record?;
                let first = record
                    .get(first)
                    .ok_or(GenerateError::MissingField(row + 1))?;
                let last = record
                    .get(last)
                    .ok_or(GenerateError::MissingField(row + 1))?;
                names.push(validate_name(format!("{} {}", first.trim(), last.trim()), row)?);
            }
        }
        RosterFormat::Custom => {
            // Accept either header spelling; "Full Name" wins when both exist.
            let name = find("Full Name")
                .or_else(|| find("Name"))
                .ok_or_else(|| GenerateError::MissingColumns("Full Name".into()))?;
            for (row, record) in reader.records().enumerate() {
                let record = record?;
                let value = record
                    .get(name)
                    .ok_or(GenerateError::MissingField(row + 1))?;
                names.push(validate_name(value.trim().to_string(), row)?);
            }
        }
    }

    debug!(students = names.len(), "loaded roster");
    Ok(names)
}

fn validate_name(name: String, row: usize) -> Result<String> {
    if name.trim().is_empty() {
        return Err(GenerateError::EmptyName(row + 1));
    }
    Ok(name)
}
