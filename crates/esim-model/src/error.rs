use thiserror::Error;

use crate::order::ContactField;

/// User-recoverable failures surfaced by the storefront.
///
/// None of these are fatal: the session state is left exactly as it was
/// before the rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// One or more contact fields were empty at submit time.
    #[error("Please fill in all fields before submitting (missing: {})", join_fields(.missing))]
    IncompleteContact { missing: Vec<ContactField> },

    /// Submit was attempted without a selected plan.
    #[error("Please select a plan before ordering")]
    NoSelection,

    /// No dataset kind has been chosen yet.
    #[error("Please choose a dataset")]
    EmptyCatalog,
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to parse a filter value from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("unknown dataset kind '{0}' (expected Country or Region)")]
    UnknownDatasetKind(String),
    #[error("invalid data amount '{0}'")]
    InvalidDataAmount(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
