//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Number of cards each player throws to the crib in a two-player game.
pub const CRIB_DISCARDS: usize = 2;

/// A player's hand.
///
/// Order only matters for index-based selection; scoring treats the cards as
/// an unordered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn draw(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn play(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes the cards at `indices` for the crib.
    ///
    /// Exactly two distinct indices are required. The cards are returned in
    /// the order the indices were given.
    ///
    /// # Errors
    ///
    /// Returns an error if the wrong number of indices is given, an index is
    /// repeated, or an index is out of range. The hand is left untouched on
    /// error.
    pub fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, HandError> {
        if indices.len() != CRIB_DISCARDS {
            return Err(HandError::WrongDiscardCount {
                expected: CRIB_DISCARDS,
                actual: indices.len(),
            });
        }

        let len = self.cards.len();
        for (pos, &index) in indices.iter().enumerate() {
            if index >= len {
                return Err(HandError::IndexOutOfRange { index, len });
            }
            if indices[..pos].contains(&index) {
                return Err(HandError::DuplicateIndex(index));
            }
        }

        let discarded = indices.iter().map(|&i| self.cards[i]).collect();

        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });

        Ok(discarded)
    }

    /// Returns an independent copy of the hand for the play.
    ///
    /// Cards laid during the play come out of the copy, leaving this hand
    /// intact for the show.
    #[must_use]
    pub fn play_copy(&self) -> Self {
        self.clone()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
