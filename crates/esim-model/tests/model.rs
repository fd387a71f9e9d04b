use esim_model::{
    Catalog, CatalogRow, ContactField, DataAmount, DatasetKind, ParseValueError, StorefrontError,
};

fn row(region: &str, data_gb: f64, id: &str) -> CatalogRow {
    CatalogRow {
        region: region.to_string(),
        data_gb: DataAmount::new(data_gb).expect("valid amount"),
        validity_days: 7,
        name: format!("{region} {data_gb}GB"),
        coverage: region.to_string(),
        price_info: "9.99".to_string(),
        wifi_hotspot: "Yes".to_string(),
        traffic_policy: "Throttled".to_string(),
        id: id.to_string(),
    }
}

#[test]
fn dataset_kind_parses_case_insensitively() {
    assert_eq!("country".parse::<DatasetKind>(), Ok(DatasetKind::Country));
    assert_eq!(" Region ".parse::<DatasetKind>(), Ok(DatasetKind::Region));
    assert_eq!(
        "Planet".parse::<DatasetKind>(),
        Err(ParseValueError::UnknownDatasetKind("Planet".to_string()))
    );
    assert_eq!(DatasetKind::ALL.map(|kind| kind.to_string()), ["Country", "Region"]);
}

#[test]
fn data_amount_display_drops_whole_fraction() {
    let whole: DataAmount = "5".parse().expect("parse 5");
    let float: DataAmount = "5.0".parse().expect("parse 5.0");
    let half: DataAmount = "0.5".parse().expect("parse 0.5");
    assert_eq!(whole, float);
    assert_eq!(whole.to_string(), "5");
    assert_eq!(half.to_string(), "0.5");
}

#[test]
fn data_amount_rejects_negative_and_nan() {
    assert!("-1".parse::<DataAmount>().is_err());
    assert!("NaN".parse::<DataAmount>().is_err());
    assert!("lots".parse::<DataAmount>().is_err());
    assert!(DataAmount::new(f64::INFINITY).is_none());
}

#[test]
fn data_amount_deserializes_through_validation() {
    let amount: DataAmount = serde_json::from_str("10").expect("deserialize amount");
    assert_eq!(amount.gigabytes(), 10.0);
    assert!(serde_json::from_str::<DataAmount>("-3").is_err());
}

#[test]
fn catalog_routes_tables_by_kind() {
    let catalog = Catalog::new(
        vec![row("France", 5.0, "P1")],
        vec![row("Europe", 10.0, "R1"), row("Asia", 3.0, "R2")],
    );
    assert_eq!(catalog.table(DatasetKind::Country).len(), 1);
    assert_eq!(catalog.table(DatasetKind::Region).len(), 2);
    assert_eq!(catalog.table(DatasetKind::Region).kind(), DatasetKind::Region);
    assert_eq!(catalog.table(DatasetKind::Country).rows()[0].id, "P1");
}

#[test]
fn incomplete_contact_message_names_fields() {
    let error = StorefrontError::IncompleteContact {
        missing: vec![ContactField::Email, ContactField::Phone],
    };
    assert_eq!(
        error.to_string(),
        "Please fill in all fields before submitting (missing: email, phone)"
    );
    assert_eq!(StorefrontError::EmptyCatalog.to_string(), "Please choose a dataset");
}
