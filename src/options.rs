//! Session configuration options.

use alloc::vec;
use alloc::vec::Vec;

/// Lowest total the dealer can be configured to stand on.
pub const MIN_DEALER_STANDS_ON: u8 = 12;

/// Highest total the dealer can be configured to stand on.
pub const MAX_DEALER_STANDS_ON: u8 = 21;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrs_table::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Balance used when there is no valid saved balance.
    pub starting_balance: usize,
    /// Chip denominations offered to the player.
    pub chips: Vec<usize>,
    /// Blackjack profit ratio (1.5 pays 2.5x the stake in total).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Dealer stops drawing at this total, within
    /// `MIN_DEALER_STANDS_ON..=MAX_DEALER_STANDS_ON`.
    pub dealer_stands_on: u8,
    /// Whether the dealer stops on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Suggested pause between dealer draws, for presenters.
    pub dealer_draw_delay_ms: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            chips: vec![20, 50, 100],
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            dealer_draw_delay_ms: 500,
        }
    }
}

impl SessionOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the chip denominations.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_chips(vec![5, 25]);
    /// assert_eq!(options.chips, vec![5, 25]);
    /// ```
    #[must_use]
    pub fn with_chips(mut self, chips: Vec<usize>) -> Self {
        self.chips = chips;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::{RoundingMode, SessionOptions};
    ///
    /// let options = SessionOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on, clamped to
    /// `MIN_DEALER_STANDS_ON..=MAX_DEALER_STANDS_ON`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// assert_eq!(SessionOptions::default().with_dealer_stands_on(0).dealer_stands_on, 12);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = clamp_stands_on(total);
        self
    }

    /// Returns the dealer's stand total, clamped to the valid range even if
    /// the field was set directly.
    #[must_use]
    pub const fn dealer_stand_total(&self) -> u8 {
        clamp_stands_on(self.dealer_stands_on)
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the pause presenters should leave between dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrs_table::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_draw_delay_ms(0);
    /// assert_eq!(options.dealer_draw_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw_delay_ms(mut self, delay: u64) -> Self {
        self.dealer_draw_delay_ms = delay;
        self
    }
}

const fn clamp_stands_on(total: u8) -> u8 {
    if total < MIN_DEALER_STANDS_ON {
        MIN_DEALER_STANDS_ON
    } else if total > MAX_DEALER_STANDS_ON {
        MAX_DEALER_STANDS_ON
    } else {
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_stands_on_is_clamped() {
        let options = SessionOptions::default();
        assert_eq!(options.clone().with_dealer_stands_on(0).dealer_stands_on, MIN_DEALER_STANDS_ON);
        assert_eq!(options.clone().with_dealer_stands_on(30).dealer_stands_on, MAX_DEALER_STANDS_ON);
        assert_eq!(options.with_dealer_stands_on(19).dealer_stands_on, 19);
    }

    #[test]
    fn stand_total_clamps_direct_field_writes() {
        let options = SessionOptions {
            dealer_stands_on: 250,
            ..SessionOptions::default()
        };
        assert_eq!(options.dealer_stand_total(), MAX_DEALER_STANDS_ON);
    }
}
