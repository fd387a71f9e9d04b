//! Catalog directory loading.

use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use esim_model::{Catalog, DatasetKind};

use crate::error::{IngestError, Result};
use crate::reader::read_catalog_table;

/// File name holding the table for `kind` inside a catalog directory.
#[must_use]
pub fn catalog_file_name(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Country => "Country.csv",
        DatasetKind::Region => "Region.csv",
    }
}

#[must_use]
pub fn catalog_file_path(dir: &Path, kind: DatasetKind) -> PathBuf {
    dir.join(catalog_file_name(kind))
}

/// Both tables of a catalog directory and the rows each one dropped.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub dropped_country_rows: usize,
    pub dropped_region_rows: usize,
}

/// Loads `Country.csv` and `Region.csv` from `dir`.
pub fn load_catalog(dir: &Path) -> Result<LoadedCatalog> {
    let span = info_span!("load_catalog", dir = %dir.display());
    let _guard = span.enter();
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let country = read_catalog_table(
        &catalog_file_path(dir, DatasetKind::Country),
        DatasetKind::Country,
    )?;
    let region = read_catalog_table(
        &catalog_file_path(dir, DatasetKind::Region),
        DatasetKind::Region,
    )?;
    info!(
        country_rows = country.table.len(),
        region_rows = region.table.len(),
        dropped = country.dropped_rows.len() + region.dropped_rows.len(),
        "catalog loaded"
    );
    let dropped_country_rows = country.dropped_rows.len();
    let dropped_region_rows = region.dropped_rows.len();
    Ok(LoadedCatalog {
        catalog: Catalog::new(country.table.into_rows(), region.table.into_rows()),
        dropped_country_rows,
        dropped_region_rows,
    })
}
