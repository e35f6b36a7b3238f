//! The narrow read interface onto the host collection.
//!
//! Everything the mosaic knows about cards flows through [`CardSource`].
//! The host implements it over its scheduler/database; tests implement it
//! over a vector. The crate never writes through this interface.

use crate::models::{CardId, CardSnapshot};
use crate::options::SortOrder;
use anyhow::Result;
use std::collections::HashMap;

/// Read-only access to the host's card collection.
pub trait CardSource {
    /// Finds card ids matching a search query, in the given order.
    ///
    /// The query uses the host's search syntax (e.g. `deck:"Japanese"`, or
    /// an empty string for the whole collection); [`SortOrder::order_clause`]
    /// supplies the host-side ordering.
    fn find_cards(&self, query: &str, order: SortOrder) -> Result<Vec<CardId>>;

    /// Snapshot of a single card, if it still exists.
    fn card(&self, id: CardId) -> Option<CardSnapshot>;

    /// Epoch-millisecond timestamps of the most recent review per card.
    ///
    /// One batch call for the whole render pass; cards that were never
    /// reviewed are simply absent from the map.
    fn last_review_times(&self, ids: &[CardId]) -> HashMap<CardId, i64>;

    /// The scheduler's current day number, used for due computations.
    fn today(&self) -> i32;
}
