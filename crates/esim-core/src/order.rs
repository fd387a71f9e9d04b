//! Order intent assembly: the last validation boundary before handoff.

use esim_model::{CatalogRow, ContactDetails, FilterState, OrderIntent, StorefrontError};

/// Builds the order intent from contact details, filters and the selected plan.
///
/// A missing selection is reported before incomplete contact details. The
/// filter tuple wins where set; unset levels fall back to the plan's own
/// values, which the plan necessarily matches.
pub fn build_order_intent(
    contact: &ContactDetails,
    filter: &FilterState,
    selected: Option<&CatalogRow>,
) -> esim_model::Result<OrderIntent> {
    let plan = selected.ok_or(StorefrontError::NoSelection)?;
    let missing = contact.missing_fields();
    if !missing.is_empty() {
        return Err(StorefrontError::IncompleteContact { missing });
    }
    let dataset_kind = filter.dataset_kind.ok_or(StorefrontError::EmptyCatalog)?;
    Ok(OrderIntent {
        contact: contact.clone(),
        dataset_kind,
        region: filter.region.clone().unwrap_or_else(|| plan.region.clone()),
        data_gb: filter.data_gb.unwrap_or(plan.data_gb),
        validity_days: filter.validity_days.unwrap_or(plan.validity_days),
        traffic_policy: plan.traffic_policy.clone(),
        product_id: plan.id.clone(),
        price_info: plan.price_info.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{gb, plan};
    use esim_model::{ContactField, DatasetKind};

    fn filter() -> FilterState {
        FilterState::new()
            .with_dataset_kind(Some(DatasetKind::Country))
            .with_region(Some("France".to_string()))
            .with_data(gb(5.0))
    }

    #[test]
    fn builds_from_filter_and_plan() {
        let contact = ContactDetails::new("A", "a@x.com", "123");
        let row = plan("France", 5.0, 7, "P1");
        let intent = build_order_intent(&contact, &filter(), Some(&row)).expect("intent");
        assert_eq!(intent.contact, contact);
        assert_eq!(intent.dataset_kind, DatasetKind::Country);
        assert_eq!(intent.region, "France");
        assert_eq!(Some(intent.data_gb), gb(5.0));
        assert_eq!(intent.validity_days, 7);
        assert_eq!(intent.product_id, "P1");
        assert_eq!(intent.traffic_policy, "Policy P1");
        assert_eq!(intent.price_info, "5.99");
    }

    #[test]
    fn no_selection_wins_over_incomplete_contact() {
        let err = build_order_intent(&ContactDetails::default(), &filter(), None).unwrap_err();
        assert_eq!(err, StorefrontError::NoSelection);
    }

    #[test]
    fn incomplete_contact_lists_missing_fields() {
        let contact = ContactDetails::new("A", " ", "");
        let row = plan("France", 5.0, 7, "P1");
        let err = build_order_intent(&contact, &filter(), Some(&row)).unwrap_err();
        assert_eq!(
            err,
            StorefrontError::IncompleteContact {
                missing: vec![ContactField::Email, ContactField::Phone]
            }
        );
    }

    #[test]
    fn unset_kind_is_rejected() {
        let contact = ContactDetails::new("A", "a@x.com", "123");
        let row = plan("France", 5.0, 7, "P1");
        let err = build_order_intent(&contact, &FilterState::new(), Some(&row)).unwrap_err();
        assert_eq!(err, StorefrontError::EmptyCatalog);
    }
}
