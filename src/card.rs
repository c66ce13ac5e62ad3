//! Card, rank and suit types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck enumeration order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the single-letter token for the suit (`H`, `D`, `S`, `C`).
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
            Self::Clubs => 'C',
        }
    }

    /// Parses a suit letter, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for anything other than `H`, `D`, `S` or `C`.
    pub const fn from_token(token: char) -> Result<Self, CardError> {
        match token {
            'H' | 'h' => Ok(Self::Hearts),
            'D' | 'd' => Ok(Self::Diamonds),
            'S' | 's' => Ok(Self::Spades),
            'C' | 'c' => Ok(Self::Clubs),
            _ => Err(CardError::UnknownSuit),
        }
    }
}

/// Card rank.
///
/// Each rank carries two numeric projections: the counting value used for
/// fifteens ([`Rank::face_value`]) and the sequence position used for runs
/// ([`Rank::ordinal`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in a sequence (Ace = 1, Jack = 11, King = 13).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Counting value (Ace = 1, face cards = 10).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns the literal token for the rank.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a rank token (`A`, `2`..`10`, `J`, `Q`, `K`; `T` is accepted for ten).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, CardError> {
        let rank = match token {
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            _ => return Err(CardError::UnknownRank),
        };
        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether this card is a Jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        matches!(self.rank, Rank::Jack)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.token())
    }
}

/// Parses the rank token followed by a suit letter, e.g. `"10H"` or `"qs"`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(CardError::Empty)?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(CardError::UnknownRank);
        }
        Ok(Self::new(Rank::from_token(rank)?, Suit::from_token(suit)?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
