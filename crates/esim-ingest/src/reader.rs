//! CSV catalog reading.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use esim_model::{CatalogRow, CatalogTable, DataAmount, DatasetKind};

use crate::columns::{self, ColumnIndex, normalize_header};
use crate::error::{IngestError, Result};

/// A loaded table plus what ingestion had to leave out.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: CatalogTable,
    /// 1-based data-row numbers excluded for missing values.
    pub dropped_rows: Vec<usize>,
}

/// Reads one catalog table from a CSV file.
pub fn read_catalog_table(path: &Path, kind: DatasetKind) -> Result<LoadedTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let source_name = path.display().to_string();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            source_name: source_name.clone(),
            source,
        })?;
    read_records(reader, kind, &source_name)
}

/// Reads one catalog table from in-memory CSV text.
pub fn read_catalog_table_from_str(
    content: &str,
    kind: DatasetKind,
    source_name: &str,
) -> Result<LoadedTable> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());
    read_records(reader, kind, source_name)
}

fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    kind: DatasetKind,
    source_name: &str,
) -> Result<LoadedTable> {
    let csv_error = |source| IngestError::CsvRead {
        source_name: source_name.to_string(),
        source,
    };
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let index = ColumnIndex::resolve(&headers, source_name)?;

    let mut rows = Vec::new();
    let mut dropped_rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row_number = offset + 1;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let cells = index.cells(&record);
        if cells.iter().any(|cell| cell.is_empty()) {
            dropped_rows.push(row_number);
            continue;
        }
        rows.push(parse_row(cells, row_number, source_name)?);
    }

    if !dropped_rows.is_empty() {
        warn!(
            source = source_name,
            dropped = dropped_rows.len(),
            "dropped catalog rows with missing values"
        );
    }
    debug!(source = source_name, kind = %kind, rows = rows.len(), "read catalog table");
    Ok(LoadedTable {
        table: CatalogTable::new(kind, rows),
        dropped_rows,
    })
}

fn parse_row(cells: [&str; 9], row: usize, source_name: &str) -> Result<CatalogRow> {
    let [
        region,
        data_gb,
        validity_days,
        name,
        coverage,
        price_info,
        wifi_hotspot,
        traffic_policy,
        id,
    ] = cells;
    let invalid = |field: &'static str, value: &str| IngestError::InvalidValue {
        field,
        value: value.to_string(),
        row,
        source_name: source_name.to_string(),
    };
    let data_gb: DataAmount = data_gb
        .parse()
        .map_err(|_| invalid(columns::DATA_GB, data_gb))?;
    Ok(CatalogRow {
        region: region.to_string(),
        data_gb,
        validity_days: parse_days(validity_days)
            .ok_or_else(|| invalid(columns::VALIDITY_DAYS, validity_days))?,
        name: name.to_string(),
        coverage: coverage.to_string(),
        price_info: price_info.to_string(),
        wifi_hotspot: wifi_hotspot.to_string(),
        traffic_policy: traffic_policy.to_string(),
        id: id.to_string(),
    })
}

/// Accepts whole-number day counts, including spreadsheet exports like `30.0`.
fn parse_days(value: &str) -> Option<u32> {
    if let Ok(days) = value.parse::<u32>() {
        return Some(days);
    }
    let float = value.parse::<f64>().ok()?;
    (float.fract() == 0.0 && float >= 0.0 && float <= f64::from(u32::MAX)).then(|| float as u32)
}
