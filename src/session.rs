//! Session-scoped view state and host lifecycle tracking.
//!
//! The options a user picks in the grid's dropdowns live for the session
//! only; they override the configured defaults without being persisted.
//! Pagination state lives here too, and resets whenever the filter
//! fingerprint (query, sort, view, gradient field) changes, so a new filter
//! always starts from the initial load count.
//!
//! Both structs are owned by the host-integration layer and passed into the
//! render call explicitly; the crate keeps no global state.

use crate::config::MosaicConfig;
use crate::options::{GradientField, SortOrder, ViewMode};

/// How many cards of the filtered list are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLimit {
    /// At most this many cards
    Limited(usize),
    /// The whole filtered list
    All,
}

impl DisplayLimit {
    /// Number of cards to take from a list of `total`.
    #[must_use]
    pub const fn take_from(self, total: usize) -> usize {
        match self {
            Self::Limited(limit) => {
                if limit < total {
                    limit
                } else {
                    total
                }
            }
            Self::All => total,
        }
    }
}

/// Identity of one filtered view of the collection.
///
/// When any component changes between renders the pagination limit resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFingerprint {
    /// Resolved search query
    pub query: String,
    /// Effective sort order
    pub sort: SortOrder,
    /// Effective view mode
    pub view: ViewMode,
    /// Effective gradient field
    pub field: GradientField,
}

/// Mutable per-session view state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    sort_override: Option<SortOrder>,
    view_override: Option<ViewMode>,
    field_override: Option<GradientField>,
    display_limit: Option<DisplayLimit>,
    last_fingerprint: Option<FilterFingerprint>,
}

impl SessionState {
    /// Fresh session with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort order in effect: the session override, or the configured default.
    #[must_use]
    pub fn effective_sort(&self, config: &MosaicConfig) -> SortOrder {
        self.sort_override.unwrap_or(config.default_sort_order)
    }

    /// View mode in effect.
    #[must_use]
    pub fn effective_view(&self, config: &MosaicConfig) -> ViewMode {
        self.view_override.unwrap_or(config.default_view_mode)
    }

    /// Gradient field in effect.
    #[must_use]
    pub fn effective_field(&self, config: &MosaicConfig) -> GradientField {
        self.field_override.unwrap_or(config.default_gradient_field)
    }

    /// Overrides the sort order for the rest of the session.
    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_override = Some(order);
    }

    /// Overrides the view mode for the rest of the session.
    pub fn set_view(&mut self, mode: ViewMode) {
        self.view_override = Some(mode);
    }

    /// Overrides the gradient field for the rest of the session.
    pub fn set_field(&mut self, field: GradientField) {
        self.field_override = Some(field);
    }

    /// Reconciles pagination with the current filter and returns the limit
    /// to render with. A changed fingerprint resets to the initial count.
    pub fn limit_for(
        &mut self,
        fingerprint: FilterFingerprint,
        initial_load_count: usize,
    ) -> DisplayLimit {
        if self.last_fingerprint.as_ref() != Some(&fingerprint) {
            self.display_limit = None;
            self.last_fingerprint = Some(fingerprint);
        }
        *self
            .display_limit
            .get_or_insert(DisplayLimit::Limited(initial_load_count))
    }

    /// Extends a limited view by `increment` cards. No-op once showing all.
    pub fn extend_limit(&mut self, increment: usize, initial_load_count: usize) {
        self.display_limit = Some(match self.display_limit {
            None => DisplayLimit::Limited(initial_load_count),
            Some(DisplayLimit::Limited(current)) => {
                DisplayLimit::Limited(current.saturating_add(increment))
            }
            Some(DisplayLimit::All) => DisplayLimit::All,
        });
    }

    /// Switches to showing the whole filtered list.
    pub fn show_all(&mut self) {
        self.display_limit = Some(DisplayLimit::All);
    }

    /// Current limit without reconciling, if any has been established.
    #[must_use]
    pub const fn current_limit(&self) -> Option<DisplayLimit> {
        self.display_limit
    }
}

/// Host lifecycle phase, updated from the host's lifecycle callbacks.
///
/// Rendering and command handling are gated on [`HostPhase::is_usable`]:
/// during a sync or while the profile is closing the collection must not be
/// touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPhase {
    syncing: bool,
    closing: bool,
}

impl HostPhase {
    /// Fresh phase: not syncing, not closing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The host started a sync; the collection is off limits.
    pub fn sync_started(&mut self) {
        self.syncing = true;
    }

    /// The sync finished; the collection may be read again.
    pub fn sync_finished(&mut self) {
        self.syncing = false;
    }

    /// The profile is closing; the collection will not come back.
    pub fn profile_closing(&mut self) {
        self.closing = true;
    }

    /// The collection is temporarily closing (e.g. for a backup).
    pub fn collection_closing(&mut self) {
        self.closing = true;
    }

    /// Whether the collection may currently be read.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        !self.syncing && !self.closing
    }
}
