use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info_span, trace, warn};

use esim_core::{Storefront, StorefrontConfig};
use esim_ingest::load_catalog;
use esim_model::{Catalog, ContactDetails, DatasetKind};

use crate::cli::{FilterArgs, OrderArgs};
use crate::logging::redact_value;
use crate::render::{options_table, plans_view};

pub fn load_config(path: Option<&Path>) -> Result<StorefrontConfig> {
    match path {
        Some(path) => StorefrontConfig::load(path).context("load storefront config"),
        None => Ok(StorefrontConfig::default()),
    }
}

pub fn open_catalog(dir: &Path) -> Result<Arc<Catalog>> {
    let loaded = load_catalog(dir).with_context(|| format!("load catalog from {}", dir.display()))?;
    Ok(Arc::new(loaded.catalog))
}

/// Builds a storefront session and replays the filter chain into it.
pub fn open_storefront(
    catalog: Arc<Catalog>,
    config: &StorefrontConfig,
    filters: &FilterArgs,
) -> Result<Storefront> {
    let mut store = Storefront::from_config(catalog, config).context("configure storefront")?;
    store.set_dataset_kind(filters.kind);
    store.set_region(filters.region.clone());
    store.set_data(filters.data);
    store.set_validity(filters.days);
    Ok(store)
}

pub fn run_kinds() -> Vec<String> {
    DatasetKind::ALL.iter().map(ToString::to_string).collect()
}

/// Options for the first filter level left unset.
pub fn next_options(store: &Storefront, filters: &FilterArgs) -> (&'static str, Vec<String>) {
    let region = filters.region.as_deref();
    match (filters.kind, region, filters.data) {
        (None, _, _) => ("Single Country / Region", run_kinds()),
        (Some(_), None, _) => ("Destination", store.region_options(filters.kind)),
        (Some(_), Some(_), None) => (
            "Data (GB)",
            store
                .data_options(filters.kind, region)
                .iter()
                .map(ToString::to_string)
                .collect(),
        ),
        (Some(_), Some(_), Some(_)) => (
            "Validity (Days)",
            store
                .validity_options(filters.kind, region, filters.data)
                .iter()
                .map(ToString::to_string)
                .collect(),
        ),
    }
}

pub fn run_options(store: &Storefront, filters: &FilterArgs) {
    let (header, values) = next_options(store, filters);
    println!("{}", options_table(header, &values));
}

pub fn run_plans(store: &Storefront) {
    match plans_view(&store.result_set(), store.selection().selected_index()) {
        Ok(table) => println!("{table}"),
        Err(message) => println!("{message}"),
    }
}

/// Selects the requested row, opens the dialog, and submits the order.
pub fn run_order(store: &mut Storefront, args: &OrderArgs) -> Result<String> {
    let span = info_span!("order", row = args.row);
    let _guard = span.enter();
    let index = args
        .row
        .checked_sub(1)
        .ok_or_else(|| anyhow!("row numbers start at 1"))?;
    let available = store
        .result_set()
        .result_set()
        .map(esim_core::ResultSet::len)
        .ok_or_else(|| anyhow!("choose a dataset with --kind before ordering"))?;
    if index >= available {
        bail!("row {} does not exist ({available} plans match)", args.row);
    }
    store.select_row(index);
    store.open_dialog()?;

    let contact = ContactDetails::new(
        args.name.as_str(),
        args.email.as_str(),
        args.phone.as_str(),
    );
    trace!(
        name = redact_value(&contact.name),
        email = redact_value(&contact.email),
        phone = redact_value(&contact.phone),
        "contact details"
    );
    match store.submit_order(&contact) {
        Ok(target) => Ok(target.into_url()),
        Err(error) => {
            warn!(%error, "order rejected");
            Err(error.into())
        }
    }
}
