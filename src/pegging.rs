//! Scoring during the play.
//!
//! Cards are laid one at a time onto a shared pile and the running count of
//! their face values may never pass the play limit. Each card scores for the
//! count it reaches and for the pairs and runs it completes at the end of the
//! pile.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{Level, event};

use crate::card::Card;
use crate::error::PlayError;
use crate::options::Rules;

const FIFTEEN: u32 = 15;
const MIN_RUN: usize = 3;

fn pile_count(pile: &[Card]) -> u32 {
    pile.iter().map(|card| u32::from(card.rank.face_value())).sum()
}

/// Same-rank cards at the end of the pile.
fn trailing_pairs(pile: &[Card]) -> u32 {
    let Some(last) = pile.last() else {
        return 0;
    };
    let matching = pile
        .iter()
        .rev()
        .take_while(|card| card.rank == last.rank)
        .count() as u32;
    matching * (matching - 1)
}

/// Length of the longest suffix whose ranks form a run in any order.
fn trailing_run(pile: &[Card]) -> u32 {
    let mut ordinals = Vec::with_capacity(pile.len());
    for len in (MIN_RUN..=pile.len()).rev() {
        ordinals.clear();
        ordinals.extend(pile[pile.len() - len..].iter().map(|card| card.rank.ordinal()));
        ordinals.sort_unstable();
        if ordinals.windows(2).all(|pair| pair[1] == pair[0] + 1) {
            return len as u32;
        }
    }
    0
}

/// Points earned by the last card laid on `pile`.
///
/// `pile` is the current play sequence, oldest card first. The running count
/// is the sum of its face values.
#[must_use]
pub fn score_play(pile: &[Card], rules: &Rules) -> u32 {
    if pile.is_empty() {
        return 0;
    }

    let count = pile_count(pile);
    let mut points = 0;
    if count == FIFTEEN {
        points += 2;
    }
    if count == u32::from(rules.play_limit) {
        points += rules.thirty_one_points;
    }
    points + trailing_pairs(pile) + trailing_run(pile)
}

/// Points to the dealer for turning up a Jack as the starter.
#[must_use]
pub fn his_heels(starter: Card, rules: &Rules) -> u32 {
    if starter.is_jack() {
        rules.heels_points
    } else {
        0
    }
}

/// The current play sequence and its running count.
#[derive(Debug, Clone)]
pub struct PlayPile {
    cards: Vec<Card>,
    count: u8,
    rules: Rules,
}

impl PlayPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            cards: Vec::new(),
            count: 0,
            rules,
        }
    }

    /// Returns whether `card` can be laid without passing the play limit.
    #[must_use]
    pub fn can_play(&self, card: Card) -> bool {
        u16::from(self.count) + u16::from(card.rank.face_value()) <= u16::from(self.rules.play_limit)
    }

    /// Lays `card` on the pile and returns the points it earns.
    ///
    /// Reaching the play limit exactly starts a new sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::ExceedsLimit`] if the card would take the count
    /// past the limit. The pile is unchanged on error.
    pub fn play(&mut self, card: Card) -> Result<u32, PlayError> {
        if !self.can_play(card) {
            return Err(PlayError::ExceedsLimit {
                count: self.count,
                value: card.rank.face_value(),
                limit: self.rules.play_limit,
            });
        }

        self.cards.push(card);
        self.count += card.rank.face_value();
        let points = score_play(&self.cards, &self.rules);

        event!(Level::TRACE, card = %card, count = self.count, points, "card played");

        if self.count == self.rules.play_limit {
            self.reset();
        }
        Ok(points)
    }

    /// Ends the sequence when neither player can lay a card.
    ///
    /// Returns the last-card points owed to whoever played last, or 0 if the
    /// sequence was already closed by reaching the limit.
    pub fn go(&mut self) -> u32 {
        let points = if self.cards.is_empty() {
            0
        } else {
            self.rules.last_card_points
        };
        self.reset();
        points
    }

    /// Clears the pile and the running count.
    pub fn reset(&mut self) {
        event!(Level::TRACE, count = self.count, "play sequence reset");
        self.cards.clear();
        self.count = 0;
    }

    /// Returns the running count.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the cards of the current sequence, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the current sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
