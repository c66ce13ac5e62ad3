//! Two-player cribbage board.

use tracing::{Level, event};

use crate::error::BoardError;
use crate::options::Rules;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// First player.
    First,
    /// Second player.
    Second,
}

impl Seat {
    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Scores for both seats, pegged towards [`Rules::target_score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    scores: [u32; 2],
    rules: Rules,
}

impl Board {
    /// Creates a board with both pegs at zero.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            scores: [0; 2],
            rules,
        }
    }

    /// Moves `seat`'s peg forward by `points`.
    ///
    /// Returns `true` if the seat has now reached the target score.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GameOver`] if either seat already won.
    pub fn peg(&mut self, seat: Seat, points: u32) -> Result<bool, BoardError> {
        if self.winner().is_some() {
            return Err(BoardError::GameOver);
        }

        let score = &mut self.scores[seat.index()];
        *score = score.saturating_add(points);

        let won = *score >= self.rules.target_score;
        if won {
            event!(Level::DEBUG, ?seat, score = *score, "target score reached");
        }
        Ok(won)
    }

    /// Returns the score for `seat`.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    /// Returns the seat that reached the target score, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        if self.scores[0] >= self.rules.target_score {
            Some(Seat::First)
        } else if self.scores[1] >= self.rules.target_score {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Returns the rules the board was created with.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Moves both pegs back to zero.
    pub const fn reset(&mut self) {
        self.scores = [0; 2];
    }
}
