//! Error types for scoring and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Input was empty.
    #[error("empty card token")]
    Empty,
    /// Rank token is not one of `A`, `2`..`10`, `J`, `Q`, `K`.
    #[error("unrecognized rank")]
    UnknownRank,
    /// Suit token is not one of `H`, `D`, `S`, `C`.
    #[error("unrecognized suit")]
    UnknownSuit,
}

/// Errors that can occur while analyzing a discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The hand does not hold the number of cards a discard is chosen from.
    #[error("expected a hand of {expected} cards, got {actual}")]
    WrongHandSize {
        /// Required hand size.
        expected: usize,
        /// Size of the hand that was supplied.
        actual: usize,
    },
    /// The same card appears twice in the hand.
    #[error("card {0} appears more than once in the hand")]
    DuplicateCard(Card),
}

/// Errors that can occur when taking cards out of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Index is past the end of the hand.
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The same index was selected twice.
    #[error("card index {0} selected more than once")]
    DuplicateIndex(usize),
    /// Wrong number of cards selected for the crib.
    #[error("expected {expected} cards to discard, got {actual}")]
    WrongDiscardCount {
        /// Required number of discards.
        expected: usize,
        /// Number of indices supplied.
        actual: usize,
    },
}

/// Errors that can occur during the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Laying the card would take the count past the limit.
    #[error("playing a card worth {value} on a count of {count} exceeds {limit}")]
    ExceedsLimit {
        /// Running count before the card.
        count: u8,
        /// Counting value of the card.
        value: u8,
        /// Play limit.
        limit: u8,
    },
}

/// Errors that can occur when pegging on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A seat has already reached the target score.
    #[error("the game is already over")]
    GameOver,
}
