//! Catalog records: one purchasable plan per row, one table per dataset kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Whether a catalog covers single countries or multi-country regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Country,
    Region,
}

impl DatasetKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 2] = [Self::Country, Self::Region];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Region => "Region",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatasetKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseValueError::UnknownDatasetKind(s.to_string()))
    }
}

/// Plan data allowance in gigabytes.
///
/// Always finite and non-negative. Whole amounts display without a
/// fractional part (`5`, not `5.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DataAmount(f64);

impl DataAmount {
    #[must_use]
    pub fn new(gigabytes: f64) -> Option<Self> {
        (gigabytes.is_finite() && gigabytes >= 0.0).then_some(Self(gigabytes))
    }

    #[must_use]
    pub const fn gigabytes(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DataAmount {
    type Error = ParseValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseValueError::InvalidDataAmount(value.to_string()))
    }
}

impl From<DataAmount> for f64 {
    fn from(amount: DataAmount) -> Self {
        amount.0
    }
}

impl FromStr for DataAmount {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseValueError::InvalidDataAmount(s.to_string()))
    }
}

impl fmt::Display for DataAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0 < 1e15 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One purchasable plan.
///
/// Every text field is non-empty; the ingestion layer drops incomplete rows
/// before a row is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub region: String,
    pub data_gb: DataAmount,
    pub validity_days: u32,
    pub name: String,
    pub coverage: String,
    /// Recommended retail price, stored without a currency symbol.
    pub price_info: String,
    pub wifi_hotspot: String,
    pub traffic_policy: String,
    pub id: String,
}

/// Ordered, immutable rows for one dataset kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    kind: DatasetKind,
    rows: Vec<CatalogRow>,
}

impl CatalogTable {
    #[must_use]
    pub fn new(kind: DatasetKind, rows: Vec<CatalogRow>) -> Self {
        Self { kind, rows }
    }

    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    #[must_use]
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<CatalogRow> {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a CatalogTable {
    type Item = &'a CatalogRow;
    type IntoIter = std::slice::Iter<'a, CatalogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Both catalog tables, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    country: CatalogTable,
    region: CatalogTable,
}

impl Catalog {
    #[must_use]
    pub fn new(country_rows: Vec<CatalogRow>, region_rows: Vec<CatalogRow>) -> Self {
        Self {
            country: CatalogTable::new(DatasetKind::Country, country_rows),
            region: CatalogTable::new(DatasetKind::Region, region_rows),
        }
    }

    #[must_use]
    pub fn table(&self, kind: DatasetKind) -> &CatalogTable {
        match kind {
            DatasetKind::Country => &self.country,
            DatasetKind::Region => &self.region,
        }
    }
}
