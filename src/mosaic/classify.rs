//! Categorical card classifier.
//!
//! A fixed decision table mapping a card's scheduler state onto one of six
//! display statuses. Evaluation order encodes domain precedence: a suspended
//! or buried card shows as suspended no matter what else is true of it.

use crate::constants::MATURE_INTERVAL_DAYS;
use crate::models::{CardQueue, CardType};
use serde::{Deserialize, Serialize};

/// Display status of a card, as shown in the categorical view.
///
/// Each status maps to one configured palette color and one localized
/// summary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardStatus {
    /// Never studied
    New,
    /// Learning, or reviewing with a short interval
    Young,
    /// Reviewing with an interval of at least 21 days
    Mature,
    /// Relearning after a lapse
    Relearning,
    /// Suspended or buried
    Suspended,
    /// Fallback for state combinations outside the table
    Default,
}

impl CardStatus {
    /// All statuses in summary-legend order.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Young,
        Self::Mature,
        Self::Relearning,
        Self::Suspended,
        Self::Default,
    ];
}

/// Classifies a card by queue, type and interval.
///
/// Priority order, first match wins:
/// 1. suspended / buried queue
/// 2. new type
/// 3. relearning (day-learn) queue
/// 4. learning type
/// 5. review type, split at the mature-interval threshold
/// 6. fallback
///
/// Total over the input space: every combination maps to exactly one status.
///
/// # Examples
///
/// ```
/// use memomosaic::models::{CardQueue, CardType};
/// use memomosaic::mosaic::{classify, CardStatus};
///
/// // Suspension overrides everything else.
/// let status = classify(CardQueue::Suspended, CardType::New, 999);
/// assert_eq!(status, CardStatus::Suspended);
///
/// let status = classify(CardQueue::Review, CardType::Review, 21);
/// assert_eq!(status, CardStatus::Mature);
/// ```
#[must_use]
pub fn classify(queue: CardQueue, card_type: CardType, interval_days: i32) -> CardStatus {
    if queue.is_suspended_or_buried() {
        return CardStatus::Suspended;
    }

    match card_type {
        CardType::New => CardStatus::New,
        _ if queue == CardQueue::DayLearn => CardStatus::Relearning,
        CardType::Learning => CardStatus::Young,
        CardType::Review => {
            if interval_days >= MATURE_INTERVAL_DAYS {
                CardStatus::Mature
            } else {
                CardStatus::Young
            }
        }
        CardType::Relearning => CardStatus::Default,
    }
}
