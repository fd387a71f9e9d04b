//! The four dependent filter fields.

use serde::{Deserialize, Serialize};

use crate::catalog::{DataAmount, DatasetKind};

/// Current filter chain.
///
/// Each level depends on the one above it: region on dataset kind, data on
/// region, validity on data. The `with_*` transitions clear every level below
/// the one they set whenever the value actually changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub dataset_kind: Option<DatasetKind>,
    pub region: Option<String>,
    pub data_gb: Option<DataAmount>,
    pub validity_days: Option<u32>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dataset_kind(self, dataset_kind: Option<DatasetKind>) -> Self {
        if self.dataset_kind == dataset_kind {
            return self;
        }
        Self {
            dataset_kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_region(self, region: Option<String>) -> Self {
        if self.region == region {
            return self;
        }
        Self {
            dataset_kind: self.dataset_kind,
            region,
            data_gb: None,
            validity_days: None,
        }
    }

    #[must_use]
    pub fn with_data(self, data_gb: Option<DataAmount>) -> Self {
        if self.data_gb == data_gb {
            return self;
        }
        Self {
            data_gb,
            validity_days: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_validity(self, validity_days: Option<u32>) -> Self {
        Self {
            validity_days,
            ..self
        }
    }

    /// True when no level has been chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gb(value: f64) -> Option<DataAmount> {
        DataAmount::new(value)
    }

    fn full() -> FilterState {
        FilterState::new()
            .with_dataset_kind(Some(DatasetKind::Country))
            .with_region(Some("France".to_string()))
            .with_data(gb(5.0))
            .with_validity(Some(7))
    }

    #[test]
    fn changing_kind_clears_everything_below() {
        let state = full().with_dataset_kind(Some(DatasetKind::Region));
        assert_eq!(state.dataset_kind, Some(DatasetKind::Region));
        assert!(state.region.is_none());
        assert!(state.data_gb.is_none());
        assert!(state.validity_days.is_none());
    }

    #[test]
    fn changing_region_keeps_kind() {
        let state = full().with_region(Some("Spain".to_string()));
        assert_eq!(state.dataset_kind, Some(DatasetKind::Country));
        assert_eq!(state.region.as_deref(), Some("Spain"));
        assert!(state.data_gb.is_none());
        assert!(state.validity_days.is_none());
    }

    #[test]
    fn changing_data_clears_validity_only() {
        let state = full().with_data(gb(10.0));
        assert_eq!(state.region.as_deref(), Some("France"));
        assert_eq!(state.data_gb, gb(10.0));
        assert!(state.validity_days.is_none());
    }

    #[test]
    fn setting_same_value_is_not_a_change() {
        assert_eq!(full().with_region(Some("France".to_string())), full());
        assert_eq!(full().with_data(gb(5.0)), full());
        assert_eq!(full().with_dataset_kind(Some(DatasetKind::Country)), full());
    }

    #[test]
    fn default_is_empty() {
        assert!(FilterState::new().is_empty());
        assert!(!full().is_empty());
    }
}
