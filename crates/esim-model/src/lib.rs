pub mod catalog;
pub mod error;
pub mod filter;
pub mod order;

pub use catalog::{Catalog, CatalogRow, CatalogTable, DataAmount, DatasetKind};
pub use error::{ParseValueError, Result, StorefrontError};
pub use filter::FilterState;
pub use order::{ContactDetails, ContactField, OrderIntent};
