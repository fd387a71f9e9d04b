//! Option sets for each dependent filter level.
//!
//! Every resolver returns values in first-seen catalog order with duplicates
//! removed, and returns an empty list when any upstream selector is unset.

use esim_model::{Catalog, CatalogRow, DataAmount, DatasetKind};

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn rows_for<'a>(
    catalog: &'a Catalog,
    kind: Option<DatasetKind>,
) -> impl Iterator<Item = &'a CatalogRow> + 'a {
    kind.into_iter().flat_map(move |kind| catalog.table(kind).iter())
}

/// Regions present in the table for `kind`.
#[must_use]
pub fn region_options(catalog: &Catalog, kind: Option<DatasetKind>) -> Vec<String> {
    distinct(rows_for(catalog, kind).map(|row| row.region.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Data amounts offered for `region` within `kind`.
#[must_use]
pub fn data_options(
    catalog: &Catalog,
    kind: Option<DatasetKind>,
    region: Option<&str>,
) -> Vec<DataAmount> {
    let Some(region) = region else {
        return Vec::new();
    };
    distinct(
        rows_for(catalog, kind)
            .filter(|row| row.region == region)
            .map(|row| row.data_gb),
    )
}

/// Validity periods offered for `region` and `data_gb` within `kind`.
#[must_use]
pub fn validity_options(
    catalog: &Catalog,
    kind: Option<DatasetKind>,
    region: Option<&str>,
    data_gb: Option<DataAmount>,
) -> Vec<u32> {
    let (Some(region), Some(data_gb)) = (region, data_gb) else {
        return Vec::new();
    };
    distinct(
        rows_for(catalog, kind)
            .filter(|row| row.region == region && row.data_gb == data_gb)
            .map(|row| row.validity_days),
    )
}
