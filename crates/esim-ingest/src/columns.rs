//! Header normalization and required-column lookup.

use crate::error::{IngestError, Result};

/// Catalog column names as they appear in the source sheets.
pub const REGION: &str = "Region";
pub const DATA_GB: &str = "Data (GB)";
pub const VALIDITY_DAYS: &str = "Validity (Days)";
pub const NAME: &str = "Name";
pub const COVERAGE: &str = "Coverage";
pub const RRP_INFO: &str = "RRP info";
pub const WIFI_HOTSPOT: &str = "Wi-Fi Hotspot";
pub const TRAFFIC_POLICY: &str = "Traffic Policy";
pub const ID: &str = "ID";

/// Every column a catalog row needs, in row-field order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    REGION,
    DATA_GB,
    VALIDITY_DAYS,
    NAME,
    COVERAGE,
    RRP_INFO,
    WIFI_HOTSPOT,
    TRAFFIC_POLICY,
    ID,
];

/// Trims a header, strips a BOM, and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    /// Resolves every required column against `headers`.
    ///
    /// Matching is exact after normalization, falling back to a
    /// case-insensitive match. Extra columns are ignored.
    pub fn resolve(headers: &[String], source_name: &str) -> Result<Self> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|header| header == column)
                .or_else(|| {
                    headers
                        .iter()
                        .position(|header| header.eq_ignore_ascii_case(column))
                })
                .ok_or_else(|| IngestError::MissingColumn {
                    column,
                    source_name: source_name.to_string(),
                })?;
        }
        Ok(Self { positions })
    }

    /// Cells of `record` in required-column order; absent cells read as empty.
    pub fn cells<'r>(&self, record: &'r csv::StringRecord) -> [&'r str; REQUIRED_COLUMNS.len()] {
        self.positions
            .map(|position| record.get(position).map(normalize_cell).unwrap_or(""))
    }
}
