//! Cascading filter, selection and order-intent state machine.
//!
//! The catalog is narrowed by dataset kind, region, data amount and
//! validity; one result row can be selected; a contact dialog gates the
//! submit; and a transport turns the resulting [`OrderIntent`] into a
//! redirect target.
//!
//! [`OrderIntent`]: esim_model::OrderIntent

pub mod cascade;
pub mod config;
pub mod dialog;
pub mod order;
pub mod projector;
pub mod selection;
pub mod session;
pub mod storefront;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use cascade::{data_options, region_options, validity_options};
pub use config::{ConfigError, StorefrontConfig, TransportKind};
pub use dialog::OrderDialog;
pub use order::build_order_intent;
pub use projector::{
    DISPLAY_COLUMNS, DisplayRow, Generation, Projection, Projector, ResultRow, ResultSet,
};
pub use selection::{Selection, SelectionState};
pub use session::{Event, Outcome, SessionState, Transition};
pub use storefront::Storefront;
pub use transport::{
    MailtoTransport, OrderTransport, QueryStringTransport, RedirectTarget, TransportError,
};
