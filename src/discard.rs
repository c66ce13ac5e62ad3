//! Discard selection for a freshly dealt hand.
//!
//! Every way of throwing two of the six dealt cards is scored against every
//! card that could be cut as the starter. The kept four and the thrown two are
//! both counted; the thrown pair is a gain when the crib is ours and a loss
//! when it belongs to the opponent.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{Level, event};

use crate::card::Card;
use crate::deck::full_deck;
use crate::error::DiscardError;
use crate::hand::CRIB_DISCARDS;
use crate::score::score_hand;

/// Number of cards dealt to each player in a two-player game.
pub const DEALT_CARDS: usize = 6;

/// Number of cards kept for the show.
pub const KEPT_CARDS: usize = DEALT_CARDS - CRIB_DISCARDS;

/// One way of splitting a dealt hand, with its expected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscardChoice {
    /// Cards thrown to the crib, in hand order.
    pub discard: [Card; CRIB_DISCARDS],
    /// Cards kept for the show, in hand order.
    pub keep: [Card; KEPT_CARDS],
    /// Average points over every possible starter.
    pub expected: f64,
}

/// Returns every card of the deck not in `cards`, in deck order.
///
/// These are the possible starters when only our own cards are known.
#[must_use]
pub fn missing_cards(cards: &[Card]) -> Vec<Card> {
    full_deck().filter(|card| !cards.contains(card)).collect()
}

fn check_hand(hand: &[Card]) -> Result<(), DiscardError> {
    if hand.len() != DEALT_CARDS {
        return Err(DiscardError::WrongHandSize {
            expected: DEALT_CARDS,
            actual: hand.len(),
        });
    }
    for (pos, card) in hand.iter().enumerate() {
        if hand[..pos].contains(card) {
            return Err(DiscardError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// Sums keep and signed discard points over every starter.
fn total_over_starters(
    keep: &[Card],
    discard: &[Card],
    starters: &[Card],
    is_own_crib: bool,
) -> i64 {
    starters
        .iter()
        .map(|&starter| {
            let kept = i64::from(score_hand(keep, starter, false));
            let thrown = i64::from(score_hand(discard, starter, false));
            if is_own_crib { kept + thrown } else { kept - thrown }
        })
        .sum()
}

/// Scores all 15 discards of a six-card hand.
///
/// Candidates are returned in enumeration order: index pairs `(i, j)` with
/// `i < j`, `i` major, over the hand as given.
///
/// # Errors
///
/// Returns an error if the hand does not hold exactly six distinct cards.
pub fn rank_discards(hand: &[Card], is_own_crib: bool) -> Result<Vec<DiscardChoice>, DiscardError> {
    check_hand(hand)?;

    let starters = missing_cards(hand);
    #[expect(clippy::cast_precision_loss, reason = "at most 52 starters")]
    let starter_count = starters.len() as f64;

    let mut choices = Vec::with_capacity(15);
    for first in 0..DEALT_CARDS {
        for second in first + 1..DEALT_CARDS {
            let discard = [hand[first], hand[second]];

            let mut keep = [hand[0]; KEPT_CARDS];
            let kept = hand
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != first && i != second)
                .map(|(_, card)| *card);
            for (slot, card) in keep.iter_mut().zip(kept) {
                *slot = card;
            }

            let total = total_over_starters(&keep, &discard, &starters, is_own_crib);
            #[expect(clippy::cast_precision_loss, reason = "totals stay far below 2^52")]
            let expected = total as f64 / starter_count;

            event!(
                Level::TRACE,
                first = %discard[0],
                second = %discard[1],
                expected,
                "scored discard"
            );

            choices.push(DiscardChoice {
                discard,
                keep,
                expected,
            });
        }
    }

    Ok(choices)
}

/// Picks the discard with the highest expected value.
///
/// Set `is_own_crib` when the thrown cards go to our own crib. Ties go to the
/// candidate that comes first in [`rank_discards`] order.
///
/// # Errors
///
/// Returns an error if the hand does not hold exactly six distinct cards.
///
/// # Example
///
/// ```
/// use cribrs::{Card, evaluate};
///
/// let hand: Vec<Card> = ["5H", "6S", "JD", "KC", "AH", "4S"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let choice = evaluate(&hand, false).unwrap();
/// assert_eq!(choice.discard, [hand[3], hand[4]]);
/// ```
pub fn evaluate(hand: &[Card], is_own_crib: bool) -> Result<DiscardChoice, DiscardError> {
    let choices = rank_discards(hand, is_own_crib)?;

    let mut best = choices[0];
    for choice in &choices[1..] {
        if choice.expected > best.expected {
            best = *choice;
        }
    }

    event!(
        Level::DEBUG,
        first = %best.discard[0],
        second = %best.discard[1],
        expected = best.expected,
        is_own_crib,
        "selected discard"
    );

    Ok(best)
}
