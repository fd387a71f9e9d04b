//! Session transitions.
//!
//! A [`SessionState`] is never mutated in place: [`SessionState::apply`]
//! returns the next state and what happened, and the caller replaces its
//! copy wholesale.

use tracing::debug;

use esim_model::{
    Catalog, ContactDetails, ContactField, DataAmount, DatasetKind, FilterState, OrderIntent,
    StorefrontError,
};

use crate::dialog::OrderDialog;
use crate::order::build_order_intent;
use crate::projector::{Generation, Projection, Projector};
use crate::selection::SelectionState;

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetDatasetKind(Option<DatasetKind>),
    SetRegion(Option<String>),
    SetData(Option<DataAmount>),
    SetValidity(Option<u32>),
    /// Click on a result row, as seen in the result set of `generation`.
    SelectRow {
        generation: Generation,
        index: usize,
    },
    OpenDialog,
    CloseDialog,
    EditContact {
        field: ContactField,
        value: String,
    },
    /// Submit with the contact details currently held in the session.
    Submit,
    /// Submit with `contact`; it replaces the stored details only on success.
    SubmitContact(ContactDetails),
}

impl Event {
    /// Event name safe for logs; contact values are left out.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetDatasetKind(_) => "set_dataset_kind",
            Self::SetRegion(_) => "set_region",
            Self::SetData(_) => "set_data",
            Self::SetValidity(_) => "set_validity",
            Self::SelectRow { .. } => "select_row",
            Self::OpenDialog => "open_dialog",
            Self::CloseDialog => "close_dialog",
            Self::EditContact { .. } => "edit_contact",
            Self::Submit => "submit",
            Self::SubmitContact(_) => "submit_contact",
        }
    }
}

/// What an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// No-op: same filter value, stale generation, or out-of-range row.
    Ignored,
    Rejected(StorefrontError),
    Submitted(OrderIntent),
}

/// Next state plus outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: SessionState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
        }
    }

    fn unchanged(state: &SessionState, outcome: Outcome) -> Self {
        Self {
            state: state.clone(),
            outcome,
        }
    }
}

/// Everything one browsing session knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    filter: FilterState,
    generation: Generation,
    selection: SelectionState,
    dialog: OrderDialog,
    contact: ContactDetails,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn dialog(&self) -> &OrderDialog {
        &self.dialog
    }

    #[must_use]
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// The result set for the current filters.
    #[must_use]
    pub fn projection(&self, catalog: &Catalog, projector: &Projector) -> Projection {
        projector.project(catalog, &self.filter, self.generation)
    }

    #[must_use]
    pub fn order_action_enabled(&self) -> bool {
        self.selection.for_generation(self.generation).is_some()
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.dialog.can_submit(&self.contact)
    }

    /// Computes the state after `event`.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog, projector: &Projector, event: Event) -> Transition {
        let name = event.name();
        let transition = match event {
            Event::SetDatasetKind(kind) => {
                self.with_filter(self.filter.clone().with_dataset_kind(kind))
            }
            Event::SetRegion(region) => self.with_filter(self.filter.clone().with_region(region)),
            Event::SetData(data_gb) => self.with_filter(self.filter.clone().with_data(data_gb)),
            Event::SetValidity(days) => self.with_filter(self.filter.clone().with_validity(days)),
            Event::SelectRow { generation, index } => {
                self.select_row(catalog, projector, generation, index)
            }
            Event::OpenDialog => match self.dialog.open(&self.selection) {
                Ok(dialog) => Transition::applied(Self {
                    dialog,
                    ..self.clone()
                }),
                Err(error) => Transition::unchanged(self, Outcome::Rejected(error)),
            },
            Event::CloseDialog => Transition::applied(Self {
                dialog: self.dialog.close(),
                ..self.clone()
            }),
            Event::EditContact { field, value } => Transition::applied(Self {
                contact: self.contact.clone().with_field(field, value),
                ..self.clone()
            }),
            Event::Submit => self.submit(&self.contact),
            Event::SubmitContact(contact) => self.submit(&contact),
        };
        debug!(
            event = name,
            outcome = outcome_name(&transition.outcome),
            generation = transition.state.generation.value(),
            selected = ?transition.state.selection.selected_index(),
            dialog_open = transition.state.dialog.is_open(),
            "session transition"
        );
        transition
    }

    fn with_filter(&self, filter: FilterState) -> Transition {
        if filter == self.filter {
            return Transition::unchanged(self, Outcome::Ignored);
        }
        Transition::applied(Self {
            filter,
            generation: self.generation.next(),
            selection: SelectionState::none(),
            dialog: OrderDialog::Closed,
            contact: self.contact.clone(),
        })
    }

    fn select_row(
        &self,
        catalog: &Catalog,
        projector: &Projector,
        generation: Generation,
        index: usize,
    ) -> Transition {
        if generation != self.generation {
            return Transition::unchanged(self, Outcome::Ignored);
        }
        let result_set = match self.projection(catalog, projector).into_result() {
            Ok(result_set) => result_set,
            Err(error) => return Transition::unchanged(self, Outcome::Rejected(error)),
        };
        if index >= result_set.len() {
            return Transition::unchanged(self, Outcome::Ignored);
        }
        let selection = self.selection.toggle_row(&result_set, index);
        let dialog = if selection.is_selected() {
            self.dialog.clone()
        } else {
            OrderDialog::Closed
        };
        Transition::applied(Self {
            selection,
            dialog,
            ..self.clone()
        })
    }

    /// Only the dialog warning changes on a rejected submit.
    fn submit(&self, contact: &ContactDetails) -> Transition {
        let selected = self
            .selection
            .for_generation(self.generation)
            .map(|selection| &selection.plan);
        match build_order_intent(contact, &self.filter, selected) {
            Ok(intent) => Transition {
                state: Self {
                    dialog: OrderDialog::Closed,
                    contact: contact.clone(),
                    ..self.clone()
                },
                outcome: Outcome::Submitted(intent),
            },
            Err(error) => Transition {
                state: Self {
                    dialog: self.dialog.with_warning(&error),
                    ..self.clone()
                },
                outcome: Outcome::Rejected(error),
            },
        }
    }
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Applied => "applied",
        Outcome::Ignored => "ignored",
        Outcome::Rejected(_) => "rejected",
        Outcome::Submitted(_) => "submitted",
    }
}
