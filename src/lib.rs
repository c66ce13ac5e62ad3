//! A cribbage hand scorer and discard analyzer with optional `no_std` support.
//!
//! The crate scores hands for the show ([`score_hand`]) and picks the two
//! cards to throw to the crib from a six-card deal ([`evaluate`]) by averaging
//! over every possible starter. Play-phase scoring and a two-seat board are
//! provided for driving a full game.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, evaluate, score_hand};
//!
//! let dealt: Vec<Card> = ["5H", "6S", "JD", "KC", "AH", "4S"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let choice = evaluate(&dealt, true).unwrap();
//! let starter: Card = "5C".parse().unwrap();
//! let _points = score_hand(&choice.keep, starter, false);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod discard;
pub mod error;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod score;

// Re-export main types
pub use board::{Board, Seat};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, full_deck};
pub use discard::{DiscardChoice, evaluate, missing_cards, rank_discards};
pub use error::{BoardError, CardError, DiscardError, HandError, PlayError};
pub use hand::Hand;
pub use options::Rules;
pub use pegging::{PlayPile, his_heels, score_play};
pub use score::{ScoreBreakdown, score_breakdown, score_hand};
