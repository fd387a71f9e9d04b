//! Shared fixtures for unit tests.

use esim_model::{Catalog, CatalogRow, DataAmount};

pub fn gb(value: f64) -> Option<DataAmount> {
    DataAmount::new(value)
}

pub fn plan(region: &str, data_gb: f64, validity_days: u32, id: &str) -> CatalogRow {
    CatalogRow {
        region: region.to_string(),
        data_gb: DataAmount::new(data_gb).expect("valid amount"),
        validity_days,
        name: format!("{region} {data_gb}GB {validity_days}D"),
        coverage: region.to_string(),
        price_info: format!("{}.99", data_gb as u32),
        wifi_hotspot: "Yes".to_string(),
        traffic_policy: format!("Policy {id}"),
        id: id.to_string(),
    }
}

/// Country: France 5/7, France 10/30, France 5/15, Japan 3/7. Region: Europe 20/30.
pub fn catalog() -> Catalog {
    Catalog::new(
        vec![
            plan("France", 5.0, 7, "P1"),
            plan("France", 10.0, 30, "P2"),
            plan("France", 5.0, 15, "P3"),
            plan("Japan", 3.0, 7, "J1"),
        ],
        vec![plan("Europe", 20.0, 30, "E1")],
    )
}
