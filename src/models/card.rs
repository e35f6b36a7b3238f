//! Read-only card snapshots and the scheduler enums they carry.
//!
//! The host scheduler encodes a card's position in the study cycle with two
//! small integer fields, `queue` and `type`. This module gives those codes
//! typed names and bundles the per-card fields the mosaic reads into a
//! snapshot taken at render time. Nothing here is ever written back.

use serde::{Deserialize, Serialize};

/// Host-side card identifier (the card row id, epoch-millis based).
pub type CardId = i64;

/// Scheduler queue a card currently sits in.
///
/// Mirrors the host's queue codes; negative codes are the "parked" states
/// that override every other classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardQueue {
    /// Manually suspended (-1)
    Suspended,
    /// Buried by the scheduler (-2)
    SchedBuried,
    /// Buried by the user (-3)
    UserBuried,
    /// Never studied (0)
    New,
    /// In the intraday learning queue (1)
    Learning,
    /// In the review queue (2)
    Review,
    /// In the day-learning queue, i.e. relearning after a lapse (3)
    DayLearn,
}

impl CardQueue {
    /// Maps a raw host queue code to a typed queue, if recognized.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Suspended),
            -2 => Some(Self::SchedBuried),
            -3 => Some(Self::UserBuried),
            0 => Some(Self::New),
            1 => Some(Self::Learning),
            2 => Some(Self::Review),
            3 => Some(Self::DayLearn),
            _ => None,
        }
    }

    /// Raw host queue code.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Suspended => -1,
            Self::SchedBuried => -2,
            Self::UserBuried => -3,
            Self::New => 0,
            Self::Learning => 1,
            Self::Review => 2,
            Self::DayLearn => 3,
        }
    }

    /// Whether the card is parked: suspended or buried in either flavor.
    #[must_use]
    pub const fn is_suspended_or_buried(self) -> bool {
        matches!(self, Self::Suspended | Self::SchedBuried | Self::UserBuried)
    }

    /// Whether the queue carries a meaningful due value (learning, review or
    /// day-learning). Only these queues can show the due indicator.
    #[must_use]
    pub const fn is_due_bearing(self) -> bool {
        matches!(self, Self::Learning | Self::Review | Self::DayLearn)
    }
}

/// Long-term study phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Never answered (0)
    New,
    /// In initial learning steps (1)
    Learning,
    /// Graduated to reviews (2)
    Review,
    /// Lapsed and relearning (3)
    Relearning,
}

impl CardType {
    /// Maps a raw host type code to a typed phase, if recognized.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Self::New),
            1 => Some(Self::Learning),
            2 => Some(Self::Review),
            3 => Some(Self::Relearning),
            _ => None,
        }
    }

    /// Raw host type code.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::New => 0,
            Self::Learning => 1,
            Self::Review => 2,
            Self::Relearning => 3,
        }
    }
}

/// Read-only snapshot of one card, taken at render time.
///
/// The mosaic never mutates cards; everything it needs to size, color and
/// annotate a tile is captured here in one read through the host interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Card identifier
    pub id: CardId,
    /// Current scheduler queue
    pub queue: CardQueue,
    /// Long-term study phase
    pub card_type: CardType,
    /// Current interval in days (0 for cards that never graduated)
    pub interval_days: i32,
    /// Ease factor in permille (e.g. 2500 = 250%)
    pub ease_factor: u32,
    /// Number of lapses
    pub lapses: u32,
    /// Due value; for review-queue cards this is a scheduler day number
    pub due: i32,
    /// Name of the deck the card belongs to
    pub deck_name: String,
}

impl CardSnapshot {
    /// Days until the card comes due, relative to the scheduler's `today`.
    ///
    /// Only meaningful for review-queue cards; clamped at zero so overdue
    /// cards read as "due now".
    #[must_use]
    pub fn days_until_due(&self, today: i32) -> i32 {
        (self.due - today).max(0)
    }

    /// Whether the card is due today or overdue.
    #[must_use]
    pub fn is_due(&self, today: i32) -> bool {
        self.queue.is_due_bearing() && self.due <= today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_code_roundtrip() {
        for code in -3..=3 {
            let queue = CardQueue::from_code(code).unwrap();
            assert_eq!(queue.code(), code);
        }
        assert_eq!(CardQueue::from_code(4), None);
        assert_eq!(CardQueue::from_code(-4), None);
    }

    #[test]
    fn test_type_code_roundtrip() {
        for code in 0..=3 {
            let card_type = CardType::from_code(code).unwrap();
            assert_eq!(card_type.code(), code);
        }
        assert_eq!(CardType::from_code(-1), None);
        assert_eq!(CardType::from_code(4), None);
    }

    #[test]
    fn test_suspended_or_buried() {
        assert!(CardQueue::Suspended.is_suspended_or_buried());
        assert!(CardQueue::SchedBuried.is_suspended_or_buried());
        assert!(CardQueue::UserBuried.is_suspended_or_buried());
        assert!(!CardQueue::New.is_suspended_or_buried());
        assert!(!CardQueue::Review.is_suspended_or_buried());
    }

    #[test]
    fn test_due_bearing_queues() {
        assert!(CardQueue::Learning.is_due_bearing());
        assert!(CardQueue::Review.is_due_bearing());
        assert!(CardQueue::DayLearn.is_due_bearing());
        assert!(!CardQueue::New.is_due_bearing());
        assert!(!CardQueue::Suspended.is_due_bearing());
    }

    #[test]
    fn test_days_until_due_clamps_overdue() {
        let card = CardSnapshot {
            id: 1,
            queue: CardQueue::Review,
            card_type: CardType::Review,
            interval_days: 30,
            ease_factor: 2500,
            lapses: 0,
            due: 95,
            deck_name: "Default".to_string(),
        };
        assert_eq!(card.days_until_due(100), 0);
        assert_eq!(card.days_until_due(90), 5);
        assert!(card.is_due(100));
        assert!(card.is_due(95));
        assert!(!card.is_due(90));
    }
}
