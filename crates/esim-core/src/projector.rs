//! Result projection: filter the catalog and shape rows for display.

use serde::Serialize;

use esim_model::{Catalog, CatalogRow, FilterState, StorefrontError};

/// Column headers of the visible result table.
pub const DISPLAY_COLUMNS: [&str; 5] = [
    "Name",
    "Coverage",
    "RRP info",
    "Wi-Fi Hotspot",
    "Traffic Policy",
];

/// Version stamp of a result set.
///
/// Bumped on every filter change; a selection is only honored against the
/// result set of the same generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// The visible columns of one plan. The plan id is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub name: String,
    pub coverage: String,
    /// Price with the currency symbol applied.
    pub price: String,
    pub wifi_hotspot: String,
    pub traffic_policy: String,
}

impl DisplayRow {
    /// Cell values in [`DISPLAY_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.name,
            &self.coverage,
            &self.price,
            &self.wifi_hotspot,
            &self.traffic_policy,
        ]
    }
}

/// A displayed row together with the catalog plan it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub display: DisplayRow,
    pub plan: CatalogRow,
}

/// Rows matching the current filter chain, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    generation: Generation,
    rows: Vec<ResultRow>,
}

impl ResultSet {
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ResultRow> {
        self.rows.get(index)
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

/// Outcome of projecting a filter state.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// No dataset kind chosen yet; distinct from an empty match.
    ChooseDataset,
    Rows(ResultSet),
}

impl Projection {
    #[must_use]
    pub fn result_set(&self) -> Option<&ResultSet> {
        match self {
            Self::ChooseDataset => None,
            Self::Rows(rows) => Some(rows),
        }
    }

    pub fn into_result(self) -> esim_model::Result<ResultSet> {
        match self {
            Self::ChooseDataset => Err(StorefrontError::EmptyCatalog),
            Self::Rows(rows) => Ok(rows),
        }
    }
}

/// Applies the filter chain and the display transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projector {
    currency_symbol: String,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new("$")
    }
}

impl Projector {
    #[must_use]
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Narrows by region, then data, then validity, skipping unset levels.
    #[must_use]
    pub fn project(
        &self,
        catalog: &Catalog,
        filter: &FilterState,
        generation: Generation,
    ) -> Projection {
        let Some(kind) = filter.dataset_kind else {
            return Projection::ChooseDataset;
        };
        let rows = catalog
            .table(kind)
            .iter()
            .filter(|row| filter.region.as_ref().is_none_or(|region| row.region == *region))
            .filter(|row| filter.data_gb.is_none_or(|data_gb| row.data_gb == data_gb))
            .filter(|row| {
                filter
                    .validity_days
                    .is_none_or(|days| row.validity_days == days)
            })
            .map(|row| ResultRow {
                display: self.display_row(row),
                plan: row.clone(),
            })
            .collect();
        Projection::Rows(ResultSet { generation, rows })
    }

    fn display_row(&self, row: &CatalogRow) -> DisplayRow {
        DisplayRow {
            name: row.name.clone(),
            coverage: row.coverage.clone(),
            price: self.format_price(&row.price_info),
            wifi_hotspot: row.wifi_hotspot.clone(),
            traffic_policy: row.traffic_policy.clone(),
        }
    }

    #[must_use]
    pub fn format_price(&self, price_info: &str) -> String {
        format!("{}{}", self.currency_symbol, price_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, gb};
    use esim_model::DatasetKind;

    fn ids(projection: &Projection) -> Vec<&str> {
        projection
            .result_set()
            .expect("rows")
            .rows()
            .iter()
            .map(|row| row.plan.id.as_str())
            .collect()
    }

    #[test]
    fn unset_kind_is_the_choose_sentinel() {
        let projection = Projector::default().project(
            &catalog(),
            &FilterState::new(),
            Generation::default(),
        );
        assert_eq!(projection, Projection::ChooseDataset);
        assert_eq!(
            projection.into_result(),
            Err(StorefrontError::EmptyCatalog)
        );
    }

    #[test]
    fn kind_only_returns_whole_table() {
        let filter = FilterState::new().with_dataset_kind(Some(DatasetKind::Country));
        let projection = Projector::default().project(&catalog(), &filter, Generation::default());
        assert_eq!(ids(&projection), vec!["P1", "P2", "P3", "J1"]);
    }

    #[test]
    fn each_level_narrows_progressively() {
        let projector = Projector::default();
        let catalog = catalog();
        let filter = FilterState::new()
            .with_dataset_kind(Some(DatasetKind::Country))
            .with_region(Some("France".to_string()));
        let generation = Generation::default();
        let project = |filter: &FilterState| projector.project(&catalog, filter, generation);
        assert_eq!(ids(&project(&filter)), vec!["P1", "P2", "P3"]);

        let filter = filter.with_data(gb(5.0));
        assert_eq!(ids(&project(&filter)), vec!["P1", "P3"]);

        let filter = filter.with_validity(Some(15));
        assert_eq!(ids(&project(&filter)), vec!["P3"]);
    }

    #[test]
    fn unknown_value_is_an_empty_set_not_an_error() {
        let filter = FilterState::new()
            .with_dataset_kind(Some(DatasetKind::Country))
            .with_region(Some("Atlantis".to_string()));
        let projection = Projector::default().project(&catalog(), &filter, Generation::default());
        assert!(projection.result_set().expect("rows").is_empty());
    }

    #[test]
    fn price_gets_currency_prefix_and_id_stays_hidden() {
        let filter = FilterState::new().with_dataset_kind(Some(DatasetKind::Region));
        let projection = Projector::new("€").project(&catalog(), &filter, Generation::default());
        let row = &projection.result_set().expect("rows").rows()[0];
        assert_eq!(row.display.price, "€20.99");
        assert_eq!(row.plan.price_info, "20.99");
        assert!(!row.display.cells().contains(&"E1"));
        assert_eq!(row.plan.id, "E1");
    }

    #[test]
    fn generation_is_carried_through() {
        let filter = FilterState::new().with_dataset_kind(Some(DatasetKind::Region));
        let generation = Generation::default().next().next();
        let projection = Projector::default().project(&catalog(), &filter, generation);
        assert_eq!(projection.result_set().expect("rows").generation().value(), 2);
    }
}
