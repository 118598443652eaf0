//! Round result types.

use alloc::vec::Vec;

use crate::card::Card;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player was dealt a natural.
    Blackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust {
        /// Whether the player held a natural.
        natural: bool,
    },
    /// Player total beat the dealer.
    PlayerWin {
        /// Whether the player held a natural.
        natural: bool,
    },
    /// Dealer total beat the player.
    DealerWin,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! Player wins!",
            Self::PlayerBust => "Player busts! Dealer wins.",
            Self::DealerBust { .. } => "Dealer busts! Player wins!",
            Self::PlayerWin { .. } => "Player wins!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push!",
        }
    }

    /// Returns whether the stake is paid at the blackjack rate.
    #[must_use]
    pub const fn pays_blackjack(&self) -> bool {
        matches!(
            self,
            Self::Blackjack
                | Self::DealerBust { natural: true }
                | Self::PlayerWin { natural: true }
        )
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(&self) -> bool {
        matches!(
            self,
            Self::Blackjack | Self::DealerBust { .. } | Self::PlayerWin { .. }
        )
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The stake that was riding.
    pub bet: usize,
    /// Amount credited back to the balance (stake included).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The player's final total.
    pub player_value: usize,
    /// The dealer's final total.
    pub dealer_value: usize,
    /// Balance after settlement.
    pub balance: usize,
}
