//! Game configuration options.

/// Table rules for the play and the board.
///
/// Hand scoring for the show is fixed and does not read these rules.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use cribrs::Rules;
///
/// let rules = Rules::default()
///     .with_target_score(61)
///     .with_heels_points(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Score that ends the game.
    pub target_score: u32,
    /// Highest running count allowed during the play.
    pub play_limit: u8,
    /// Points for reaching the play limit exactly.
    pub thirty_one_points: u32,
    /// Points for the last card of a play sequence short of the limit.
    pub last_card_points: u32,
    /// Points to the dealer when the starter is a Jack.
    pub heels_points: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            target_score: 121,
            play_limit: 31,
            thirty_one_points: 2,
            last_card_points: 1,
            heels_points: 2,
        }
    }
}

impl Rules {
    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Rules;
    ///
    /// let rules = Rules::default().with_target_score(61);
    /// assert_eq!(rules.target_score, 61);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    /// Sets the highest running count allowed during the play.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Rules;
    ///
    /// let rules = Rules::default().with_play_limit(21);
    /// assert_eq!(rules.play_limit, 21);
    /// ```
    #[must_use]
    pub const fn with_play_limit(mut self, limit: u8) -> Self {
        self.play_limit = limit;
        self
    }

    /// Sets the points for reaching the play limit exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Rules;
    ///
    /// let rules = Rules::default().with_thirty_one_points(1);
    /// assert_eq!(rules.thirty_one_points, 1);
    /// ```
    #[must_use]
    pub const fn with_thirty_one_points(mut self, points: u32) -> Self {
        self.thirty_one_points = points;
        self
    }

    /// Sets the points for the last card of a play sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Rules;
    ///
    /// let rules = Rules::default().with_last_card_points(0);
    /// assert_eq!(rules.last_card_points, 0);
    /// ```
    #[must_use]
    pub const fn with_last_card_points(mut self, points: u32) -> Self {
        self.last_card_points = points;
        self
    }

    /// Sets the dealer's points for a Jack starter.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Rules;
    ///
    /// let rules = Rules::default().with_heels_points(1);
    /// assert_eq!(rules.heels_points, 1);
    /// ```
    #[must_use]
    pub const fn with_heels_points(mut self, points: u32) -> Self {
        self.heels_points = points;
        self
    }
}
