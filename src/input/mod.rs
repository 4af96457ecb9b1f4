use std::io::Read;
use std::path::Path;

pub mod csv;
pub mod reader;

use thiserror::Error;

use crate::model::row::{CellValue, RawRow};
use crate::pipeline::stage1_headers::{SchemaError, ensure_headers};
use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("parse error: {0}")]
    Parse(String),
}

/// A source table: header names in file order plus one raw record per data line.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<RawRow>,
}

/// Reads a `.csv` or `.csv.gz` export and checks its header before building any record.
pub fn load_table(path: &Path) -> Result<Table, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input table");
    parse_table(&text)
}

pub fn parse_table(text: &str) -> Result<Table, InputError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = csv::parse_records(text)?.into_iter();

    let headers = match lines.next() {
        Some(h) => h,
        None => return Err(InputError::Parse("input table is empty".to_string())),
    };
    ensure_headers(&headers)?;

    let mut records = Vec::with_capacity(lines.len());
    let mut ragged = 0usize;
    for fields in lines {
        if fields.len() != headers.len() {
            ragged += 1;
        }
        records.push(build_record(&headers, fields));
    }
    if ragged > 0 {
        tracing::warn!(
            ragged,
            "records with a different cell count than the header; short records read as missing cells"
        );
    }
    tracing::info!(rows = records.len(), columns = headers.len(), "loaded table");

    Ok(Table { headers, records })
}

/// Pairs cells with header names. A repeated header keeps its first column.
fn build_record(headers: &[String], fields: Vec<String>) -> RawRow {
    let mut record = RawRow::new();
    for (header, cell) in headers.iter().zip(fields) {
        if !record.contains(header) {
            record.insert(header.as_str(), CellValue::Text(cell));
        }
    }
    record
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
