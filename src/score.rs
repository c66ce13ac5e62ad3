//! Hand scoring for the show.
//!
//! The show total is the sum of five independent counts:
//!
//! | Count      | Cards considered     | Points                                   |
//! |------------|----------------------|------------------------------------------|
//! | fifteens   | hand + starter       | 2 per distinct subset summing to 15      |
//! | pairs      | hand + starter       | `n * (n - 1)` for each rank held `n` times |
//! | runs       | hand + starter       | run length times the rank multiplicities |
//! | flush      | hand, then starter   | 4 or 5 (crib: 5 or nothing)              |
//! | nobs       | hand against starter | 1 for the Jack of the starter's suit     |
//!
//! [`fifteens`], [`pairs`] and [`runs`] accept any card slice, so they can be
//! reused on partial collections. An empty slice scores 0 everywhere.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

const FIFTEEN: usize = 15;
const MIN_RUN: usize = 3;
const FLUSH_SIZE: usize = 4;

/// Per-count points for a scored hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreBreakdown {
    /// Points for combinations totalling fifteen.
    pub fifteens: u32,
    /// Points for pairs, pair royals and double pair royals.
    pub pairs: u32,
    /// Points for runs, including multiple runs.
    pub runs: u32,
    /// Points for a flush.
    pub flush: u32,
    /// Point for his nobs.
    pub nobs: u32,
}

impl ScoreBreakdown {
    /// Sum of all counts.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nobs
    }
}

/// Number of cards held of each rank, indexed by [`Rank::ordinal`].
fn rank_counts(cards: &[Card]) -> [u32; 14] {
    let mut counts = [0; 14];
    for card in cards {
        counts[usize::from(card.rank.ordinal())] += 1;
    }
    counts
}

/// Scores 2 points for every subset of `cards` whose face values total 15.
///
/// Cards are distinct elements even when they share a rank, so `5 5 5 10`
/// holds four fifteens.
///
/// ```
/// use cribrs::{Card, Rank, Suit, score::fifteens};
///
/// let cards = [
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Ten, Suit::Spades),
/// ];
/// assert_eq!(fifteens(&cards), 2);
/// ```
#[must_use]
pub fn fifteens(cards: &[Card]) -> u32 {
    // ways[s] = number of subsets seen so far that sum to s
    let mut ways = [0u32; FIFTEEN + 1];
    ways[0] = 1;
    for card in cards {
        let value = usize::from(card.rank.face_value());
        for sum in (value..=FIFTEEN).rev() {
            ways[sum] += ways[sum - value];
        }
    }
    ways[FIFTEEN] * 2
}

/// Scores 2 points for every unordered pair of same-rank cards.
#[must_use]
pub fn pairs(cards: &[Card]) -> u32 {
    rank_counts(cards)
        .iter()
        .map(|&n| n * n.saturating_sub(1))
        .sum()
}

/// Scores the longest run of consecutive ranks in `cards`.
///
/// A run needs at least three distinct consecutive ranks. Its base value is
/// its length, multiplied by how many cards are held of each rank in it, so a
/// double run of three scores 6 and a triple run scores 9. When two runs of
/// equal length exist the lowest one is scored; that cannot happen with five
/// or fewer cards.
#[must_use]
pub fn runs(cards: &[Card]) -> u32 {
    let counts = rank_counts(cards);

    let mut best_start = 0;
    let mut best_len = 0;
    let mut start = 0;
    let mut len = 0;
    for rank in Rank::ALL {
        let ordinal = usize::from(rank.ordinal());
        if counts[ordinal] == 0 {
            len = 0;
            continue;
        }
        if len == 0 {
            start = ordinal;
        }
        len += 1;
        if len > best_len {
            best_start = start;
            best_len = len;
        }
    }

    if best_len < MIN_RUN {
        return 0;
    }

    let multiplier: u32 = counts[best_start..best_start + best_len].iter().product();
    best_len as u32 * multiplier
}

/// Scores a flush.
///
/// `hand` excludes the starter. Four hand cards of one suit score 4, or 5
/// when the starter matches. A crib only scores the five-card flush.
/// Hands of fewer than four cards never score a flush.
#[must_use]
pub fn flush(hand: &[Card], starter: Card, is_crib: bool) -> u32 {
    if hand.len() < FLUSH_SIZE {
        return 0;
    }
    let suit = hand[0].suit;
    if hand.iter().any(|card| card.suit != suit) {
        return 0;
    }

    if starter.suit == suit {
        5
    } else if is_crib {
        0
    } else {
        4
    }
}

/// Scores 1 if `hand` holds the Jack of the starter's suit.
#[must_use]
pub fn nobs(hand: &[Card], starter: Card) -> u32 {
    u32::from(
        hand.iter()
            .any(|card| card.is_jack() && card.suit == starter.suit),
    )
}

/// Scores `hand` with `starter`, count by count.
#[must_use]
pub fn score_breakdown(hand: &[Card], starter: Card, is_crib: bool) -> ScoreBreakdown {
    let mut combined = Vec::with_capacity(hand.len() + 1);
    combined.extend_from_slice(hand);
    combined.push(starter);

    ScoreBreakdown {
        fifteens: fifteens(&combined),
        pairs: pairs(&combined),
        runs: runs(&combined),
        flush: flush(hand, starter, is_crib),
        nobs: nobs(hand, starter),
    }
}

/// Scores `hand` with `starter` for the show.
///
/// Set `is_crib` when counting the crib, which changes the flush rule.
///
/// # Example
///
/// ```
/// use cribrs::{Card, score_hand};
///
/// let hand: Vec<Card> = ["5H", "5S", "5D", "JC"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let starter: Card = "5C".parse().unwrap();
///
/// assert_eq!(score_hand(&hand, starter, false), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &[Card], starter: Card, is_crib: bool) -> u32 {
    score_breakdown(hand, starter, is_crib).total()
}
