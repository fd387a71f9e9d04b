//! Session facade consumed by the presentation and transport layers.

use std::sync::Arc;

use tracing::{info, info_span};

use esim_model::{Catalog, ContactDetails, ContactField, DataAmount, DatasetKind, StorefrontError};

use crate::cascade;
use crate::config::{ConfigError, StorefrontConfig};
use crate::projector::{Projection, Projector};
use crate::session::{Event, Outcome, SessionState};
use crate::selection::SelectionState;
use crate::transport::{OrderTransport, RedirectTarget};

/// One user's storefront session over a shared, read-only catalog.
#[derive(Debug)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    projector: Projector,
    transport: Box<dyn OrderTransport>,
    state: SessionState,
}

impl Storefront {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        projector: Projector,
        transport: Box<dyn OrderTransport>,
    ) -> Self {
        Self {
            catalog,
            projector,
            transport,
            state: SessionState::new(),
        }
    }

    pub fn from_config(
        catalog: Arc<Catalog>,
        config: &StorefrontConfig,
    ) -> Result<Self, ConfigError> {
        let transport = config.build_transport()?;
        Ok(Self::new(
            catalog,
            Projector::new(config.currency_symbol.clone()),
            transport,
        ))
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies `event` and replaces the session state with the result.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let transition = self.state.apply(&self.catalog, &self.projector, event);
        self.state = transition.state;
        transition.outcome
    }

    // === Cascade options ===

    #[must_use]
    pub fn dataset_kinds(&self) -> [DatasetKind; 2] {
        DatasetKind::ALL
    }

    #[must_use]
    pub fn region_options(&self, kind: Option<DatasetKind>) -> Vec<String> {
        cascade::region_options(&self.catalog, kind)
    }

    #[must_use]
    pub fn data_options(
        &self,
        kind: Option<DatasetKind>,
        region: Option<&str>,
    ) -> Vec<DataAmount> {
        cascade::data_options(&self.catalog, kind, region)
    }

    #[must_use]
    pub fn validity_options(
        &self,
        kind: Option<DatasetKind>,
        region: Option<&str>,
        data_gb: Option<DataAmount>,
    ) -> Vec<u32> {
        cascade::validity_options(&self.catalog, kind, region, data_gb)
    }

    // === Filters ===

    pub fn set_dataset_kind(&mut self, kind: Option<DatasetKind>) -> Outcome {
        self.dispatch(Event::SetDatasetKind(kind))
    }

    pub fn set_region(&mut self, region: Option<String>) -> Outcome {
        self.dispatch(Event::SetRegion(region))
    }

    pub fn set_data(&mut self, data_gb: Option<DataAmount>) -> Outcome {
        self.dispatch(Event::SetData(data_gb))
    }

    pub fn set_validity(&mut self, days: Option<u32>) -> Outcome {
        self.dispatch(Event::SetValidity(days))
    }

    // === Results and selection ===

    /// Result set for the current filters.
    #[must_use]
    pub fn result_set(&self) -> Projection {
        self.state.projection(&self.catalog, &self.projector)
    }

    /// Toggles `index` in the current result set.
    pub fn select_row(&mut self, index: usize) -> Outcome {
        let generation = self.state.generation();
        self.dispatch(Event::SelectRow { generation, index })
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.state.selection()
    }

    #[must_use]
    pub fn is_order_action_enabled(&self) -> bool {
        self.state.order_action_enabled()
    }

    // === Order dialog ===

    pub fn open_dialog(&mut self) -> Result<(), StorefrontError> {
        match self.dispatch(Event::OpenDialog) {
            Outcome::Rejected(error) => Err(error),
            _ => Ok(()),
        }
    }

    pub fn close_dialog(&mut self) {
        self.dispatch(Event::CloseDialog);
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.state.dialog().is_open()
    }

    #[must_use]
    pub fn dialog_warning(&self) -> Option<&str> {
        self.state.dialog().warning()
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.dispatch(Event::EditContact {
            field,
            value: value.into(),
        });
    }

    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        self.state.submit_enabled()
    }

    /// Validates `contact` against the selection and hands the order to the
    /// transport. The stored contact changes only when the order goes out.
    pub fn submit_order(
        &mut self,
        contact: &ContactDetails,
    ) -> Result<RedirectTarget, StorefrontError> {
        let span = info_span!("submit_order", generation = self.state.generation().value());
        let _guard = span.enter();
        match self.dispatch(Event::SubmitContact(contact.clone())) {
            Outcome::Submitted(intent) => {
                info!(
                    product_id = %intent.product_id,
                    dataset = %intent.dataset_kind,
                    region = %intent.region,
                    "order handed off"
                );
                Ok(self.transport.submit(&intent))
            }
            Outcome::Rejected(error) => Err(error),
            Outcome::Applied | Outcome::Ignored => Err(StorefrontError::NoSelection),
        }
    }
}
