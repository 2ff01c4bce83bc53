//! Alert list state as an immutable value.
//!
//! Each operation consumes the current state and returns the next one.
//! The consumer holds the single current reference and drops it when the
//! list goes away; nothing here is shared or mutated in place.

use crate::alerts::model::NormalizedAlert;
use crate::alerts::sort::{SortOrder, sort_by};
use crate::alerts::toggle::toggle_expanded;

/// `loading` and `error` drive a spinner or an error banner in an
/// interactive list. A one-shot consumer such as the CLI only reads the
/// final list, but still reports load failures through [`Self::failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertListState {
    pub alerts: Vec<NormalizedAlert>,
    pub sort: SortOrder,
    pub loading: bool,
    /// Cause of the last failed load, if any.
    pub error: Option<String>,
}

impl Default for AlertListState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AlertListState {
    /// Empty list, load in progress, no sort selected.
    pub fn initial() -> Self {
        Self {
            alerts: Vec::new(),
            sort: SortOrder::Unsorted,
            loading: true,
            error: None,
        }
    }

    /// Replace the list with a freshly loaded batch.
    ///
    /// The previous alerts (and their expand flags) are discarded. The
    /// selected sort order is kept and applied to the new batch.
    pub fn loaded(self, alerts: Vec<NormalizedAlert>) -> Self {
        Self {
            alerts: sort_by(&alerts, self.sort),
            sort: self.sort,
            loading: false,
            error: None,
        }
    }

    /// Record a failed load. The current list stays as it was.
    pub fn failed(self, cause: impl Into<String>) -> Self {
        let cause = cause.into();
        tracing::error!(%cause, "failed to load alerts");
        Self {
            loading: false,
            error: Some(cause),
            ..self
        }
    }

    /// Select a sort order and reorder the current list.
    ///
    /// `Unsorted` keeps the current order as is; it does not restore the
    /// order of the original payload.
    pub fn sorted(self, order: SortOrder) -> Self {
        Self {
            alerts: sort_by(&self.alerts, order),
            sort: order,
            ..self
        }
    }

    /// Flip the expand flag of the alert with `id`.
    pub fn toggled(self, id: &str) -> Self {
        Self {
            alerts: toggle_expanded(&self.alerts, id),
            ..self
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_expanded).count()
    }
}
