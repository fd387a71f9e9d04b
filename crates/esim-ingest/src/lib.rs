//! Catalog ingestion for the travel eSIM storefront.
//!
//! Loads one CSV per dataset kind from a catalog directory, trims and
//! collapses header whitespace, and drops rows with any missing required
//! value before they reach the core.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use esim_ingest::load_catalog;
//!
//! let loaded = load_catalog(Path::new("data"))?;
//! println!("{} country plans", loaded.catalog.table(DatasetKind::Country).len());
//! ```

mod catalog;
mod columns;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Catalog Loading ===
pub use catalog::{LoadedCatalog, catalog_file_name, catalog_file_path, load_catalog};
pub use columns::{REQUIRED_COLUMNS, normalize_header};
pub use reader::{LoadedTable, read_catalog_table, read_catalog_table_from_str};
