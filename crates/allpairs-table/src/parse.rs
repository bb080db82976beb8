//! Tab-separated table loader.
//!
//! The first line holds the parameter labels; each following line holds
//! one value per column. Blank cells are skipped, so columns may have
//! domains of different sizes.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{Parameter, ParameterTable};

/// Column separator of the input format.
pub const SEPARATOR: char = '\t';

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error(
        "the first line must be a tab-delimited list of labels with more than one label in it"
    )]
    MissingSeparator,

    #[error("missing column label or extraneous tab in the label row")]
    BlankLabel,

    #[error("each column must have a unique label; label '{label}' is not unique")]
    DuplicateLabel { label: String },

    #[error("row {row} has {found} columns instead of {expected}: {line:?}")]
    ColumnCountMismatch {
        row: usize,
        line: String,
        found: usize,
        expected: usize,
    },

    #[error("failed to read table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse table text into a [`ParameterTable`].
///
/// Empty text yields an empty table.
pub fn parse_table(text: &str) -> Result<ParameterTable, TableError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let Some(header) = lines.next() else {
        return Ok(ParameterTable::default());
    };
    let mut columns = parse_header(header)?;
    let expected = columns.len();

    // Row numbers are 1-based file lines; the header is row 1.
    for (offset, line) in lines.enumerate() {
        let row = offset + 2;
        let cells: Vec<&str> = line.split(SEPARATOR).collect();
        if cells.len() != expected {
            return Err(TableError::ColumnCountMismatch {
                row,
                line: line.to_string(),
                found: cells.len(),
                expected,
            });
        }
        for (column, cell) in columns.iter_mut().zip(cells) {
            if !cell.is_empty() {
                column.values.push(cell.to_string());
            }
        }
    }

    let table = ParameterTable::new(columns)?;
    debug!(
        parameters = table.len(),
        domains = ?table.domain_sizes(),
        "parsed parameter table"
    );
    Ok(table)
}

/// Read and parse a table file.
pub fn load_table(path: &Path) -> Result<ParameterTable, TableError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text)
}

fn parse_header(line: &str) -> Result<Vec<Parameter>, TableError> {
    if !line.contains(SEPARATOR) {
        return Err(TableError::MissingSeparator);
    }

    let mut columns: Vec<Parameter> = Vec::new();
    for label in line.split(SEPARATOR) {
        if label.is_empty() {
            return Err(TableError::BlankLabel);
        }
        if columns.iter().any(|c| c.name == label) {
            return Err(TableError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        columns.push(Parameter::new(label, Vec::new()));
    }
    Ok(columns)
}
