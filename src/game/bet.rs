use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{BetError, StartError};
use crate::event::{Event, Seat};
use crate::result::Outcome;
use crate::store::BalanceStore;

use super::{GamePhase, GameSession};

impl<S: BalanceStore> GameSession<S> {
    /// Places a chip, moving `amount` from the balance to the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero, the
    /// balance cannot cover it, or the session is over. Nothing changes on
    /// error.
    pub fn place_chip(&mut self, amount: usize) -> Result<Vec<Event>, BetError> {
        if !self.phase.accepts_chips() {
            return Err(BetError::InvalidState);
        }

        let persist_error = self.ledger.debit(amount)?;
        self.bet += amount;
        if self.phase == GamePhase::Idle {
            self.set_phase(GamePhase::Betting);
        }

        let mut events = vec![
            Event::BetChanged(self.bet),
            Event::BalanceChanged(self.balance()),
        ];
        if let Some(err) = persist_error {
            events.push(Event::PersistenceFailed(err.to_string()));
        }

        Ok(events)
    }

    /// Deals a new round: two cards to the player, then two to the dealer
    /// with the second face down.
    ///
    /// A natural is settled at once and the session returns to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns an error if no chips have been placed or a round is already
    /// in progress.
    pub fn start_round(&mut self) -> Result<Vec<Event>, StartError> {
        if !self.phase.accepts_chips() {
            return Err(StartError::InvalidState);
        }
        if self.bet == 0 {
            return Err(StartError::NoBetPlaced);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_revealed = false;
        self.last_result = None;
        self.set_phase(GamePhase::PlayerTurn);

        let mut events = vec![Event::BetChanged(self.bet)];
        self.push_table(&mut events);

        self.deal_to(Seat::Player, false, &mut events);
        self.deal_to(Seat::Player, false, &mut events);
        self.deal_to(Seat::Dealer, false, &mut events);
        self.deal_to(Seat::Dealer, true, &mut events);

        if self.player_hand.is_natural() {
            self.settle(Outcome::Blackjack, &mut events);
        }

        Ok(events)
    }
}
