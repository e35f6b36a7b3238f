//! View options the grid exposes as dropdowns.
//!
//! Each option has a stable string key used in three places: the host's
//! configuration document, the webview command payloads, and the rendered
//! `<select>` values. Parsing is shared so the three never drift apart.

use serde::{Deserialize, Serialize};

/// Order in which cards are laid out in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// By card id, i.e. creation time (default)
    #[default]
    CreationAsc,
    /// By current interval, shortest first
    IntervalAsc,
    /// By current interval, longest first
    IntervalDesc,
    /// By due value, nearest first
    DueAsc,
}

impl SortOrder {
    /// All orders in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::CreationAsc,
        Self::IntervalAsc,
        Self::IntervalDesc,
        Self::DueAsc,
    ];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CreationAsc => "id_asc",
            Self::IntervalAsc => "ivl_asc",
            Self::IntervalDesc => "ivl_desc",
            Self::DueAsc => "due_asc",
        }
    }

    /// Parses a string key, if recognized.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.key() == key)
    }

    /// Order clause for the host's card search, in the host's query syntax.
    #[must_use]
    pub const fn order_clause(self) -> &'static str {
        match self {
            Self::CreationAsc => "c.id asc",
            Self::IntervalAsc => "c.ivl asc",
            Self::IntervalDesc => "c.ivl desc",
            Self::DueAsc => "c.due asc",
        }
    }

    /// Translation key of the dropdown label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::CreationAsc => "sort_by_creation",
            Self::IntervalAsc => "sort_by_interval_asc",
            Self::IntervalDesc => "sort_by_interval_desc",
            Self::DueAsc => "sort_by_due_date",
        }
    }
}

/// How tiles are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Discrete colors by card status (default)
    #[default]
    Categorical,
    /// Continuous colors along the configured ramp
    Gradient,
}

impl ViewMode {
    /// All modes in dropdown order.
    pub const ALL: [Self; 2] = [Self::Categorical, Self::Gradient];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Gradient => "gradient",
        }
    }

    /// Parses a string key, if recognized.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Translation key of the dropdown label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Categorical => "view_categorical",
            Self::Gradient => "view_gradient",
        }
    }
}

/// Card metric driving the gradient view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradientField {
    /// Ease factor (permille)
    Factor,
    /// Current interval in days (default)
    #[default]
    Interval,
    /// Lapse count
    Lapses,
    /// Days until the card comes due
    Due,
}

impl GradientField {
    /// All fields in dropdown order.
    pub const ALL: [Self; 4] = [Self::Factor, Self::Interval, Self::Lapses, Self::Due];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Factor => "factor",
            Self::Interval => "ivl",
            Self::Lapses => "lapses",
            Self::Due => "due",
        }
    }

    /// Parses a string key, if recognized.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Translation key of the dropdown label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Factor => "gradient_field_factor",
            Self::Interval => "gradient_field_ivl",
            Self::Lapses => "gradient_field_lapses",
            Self::Due => "gradient_field_due",
        }
    }
}

/// Direction a gradient field ramps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampOrder {
    /// Higher values map toward the end stop (default for most fields)
    #[default]
    Asc,
    /// Ramp runs backward: lower values map toward the end stop
    Desc,
}

impl RampOrder {
    /// Whether this order inverts the ramp.
    #[must_use]
    pub const fn inverts(self) -> bool {
        matches!(self, Self::Desc)
    }
}
