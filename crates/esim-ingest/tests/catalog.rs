use std::fs;

use esim_ingest::{IngestError, catalog_file_name, load_catalog, read_catalog_table};
use esim_model::DatasetKind;

const COUNTRY_CSV: &str = " Region , Data (GB) ,Validity (Days),Name,Coverage,RRP info,Wi-Fi Hotspot,Traffic Policy,ID\n\
France,5,7,France 5GB,France,9.99,Yes,Unlimited,P1\n\
France,10,30,France 10GB,France,19.99,Yes,Throttled after 10GB,P2\n\
Japan,3,,Japan 3GB,Japan,7.50,No,Unlimited,J1\n";

const REGION_CSV: &str = "Region,Data (GB),Validity (Days),Name,Coverage,RRP info,Wi-Fi Hotspot,Traffic Policy,ID\n\
Europe,20,30,Europe 20GB,\"France, Spain, Italy\",29.00,Yes,Unlimited,E1\n";

#[test]
fn loads_both_tables_from_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("Country.csv"), COUNTRY_CSV).expect("write country");
    fs::write(dir.path().join("Region.csv"), REGION_CSV).expect("write region");

    let loaded = load_catalog(dir.path()).expect("load catalog");
    let country = loaded.catalog.table(DatasetKind::Country);
    assert_eq!(country.len(), 2);
    assert_eq!(loaded.dropped_country_rows, 1);
    assert_eq!(loaded.dropped_region_rows, 0);

    let region = loaded.catalog.table(DatasetKind::Region);
    assert_eq!(region.rows()[0].coverage, "France, Spain, Italy");
    assert_eq!(region.rows()[0].price_info, "29.00");
}

#[test]
fn missing_region_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("Country.csv"), COUNTRY_CSV).expect("write country");

    let err = load_catalog(dir.path()).unwrap_err();
    match err {
        IngestError::FileNotFound { path } => {
            assert!(path.ends_with(catalog_file_name(DatasetKind::Region)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = load_catalog(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn missing_column_names_the_column() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Country.csv");
    fs::write(&path, "Region,Data (GB),Name\nFrance,5,France 5GB\n").expect("write");

    let err = read_catalog_table(&path, DatasetKind::Country).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingColumn {
            column: "Validity (Days)",
            ..
        }
    ));
}
