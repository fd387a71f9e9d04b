//! Single-row selection over the current result set.

use esim_model::CatalogRow;

use crate::projector::{Generation, ResultSet};

/// A selected result row and the full plan behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub generation: Generation,
    pub index: usize,
    pub plan: CatalogRow,
}

/// At most one selected row, valid only for the generation it was made in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    current: Option<Selection>,
}

impl SelectionState {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Selects `index`, or clears the selection if `index` is already selected.
    ///
    /// An index outside `result_set` leaves the state unchanged.
    #[must_use]
    pub fn toggle_row(&self, result_set: &ResultSet, index: usize) -> Self {
        let generation = result_set.generation();
        let Some(row) = result_set.get(index) else {
            return self.clone();
        };
        let reclick = self
            .current
            .as_ref()
            .is_some_and(|sel| sel.generation == generation && sel.index == index);
        if reclick {
            return Self::none();
        }
        Self {
            current: Some(Selection {
                generation,
                index,
                plan: row.plan.clone(),
            }),
        }
    }

    /// The selection, if it belongs to `generation`.
    #[must_use]
    pub fn for_generation(&self, generation: Generation) -> Option<&Selection> {
        self.current
            .as_ref()
            .filter(|sel| sel.generation == generation)
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.current.as_ref().map(|sel| sel.index)
    }

    #[must_use]
    pub fn selected_plan(&self) -> Option<&CatalogRow> {
        self.current.as_ref().map(|sel| &sel.plan)
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }
}
