use crate::domain::model::JobTable;
use crate::utils::error::{EtlError, Result};

pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/remotive_jobs.csv";

/// Renders the table as a CSV document: header row first, no index column.
pub fn to_csv_bytes(table: &JobTable) -> Result<Vec<u8>> {
    // csv writes a zero-field record as `""`; emit bare empty lines instead
    if table.columns.is_empty() {
        return Ok(vec![b'\n'; table.rows.len() + 1]);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
