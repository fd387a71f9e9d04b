//! Details-capture dialog gating.

use esim_model::{ContactDetails, StorefrontError};

use crate::selection::SelectionState;

/// Visibility of the order dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrderDialog {
    #[default]
    Closed,
    Open {
        /// Message shown after a rejected submit.
        warning: Option<String>,
    },
}

impl OrderDialog {
    /// Opens the dialog; requires a selected row.
    pub fn open(&self, selection: &SelectionState) -> esim_model::Result<Self> {
        if !selection.is_selected() {
            return Err(StorefrontError::NoSelection);
        }
        match self {
            Self::Open { .. } => Ok(self.clone()),
            Self::Closed => Ok(Self::Open { warning: None }),
        }
    }

    #[must_use]
    pub fn close(&self) -> Self {
        Self::Closed
    }

    /// Records a rejected submit. A closed dialog stays closed.
    #[must_use]
    pub fn with_warning(&self, error: &StorefrontError) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::Open { .. } => Self::Open {
                warning: Some(error.to_string()),
            },
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Open { warning } => warning.as_deref(),
            Self::Closed => None,
        }
    }

    /// True when the dialog is open and every contact field is filled.
    #[must_use]
    pub fn can_submit(&self, contact: &ContactDetails) -> bool {
        self.is_open() && contact.is_complete()
    }
}
