use alloc::vec::Vec;

use crate::error::ActionError;
use crate::event::{Event, Seat};
use crate::result::Outcome;
use crate::store::BalanceStore;

use super::{GamePhase, GameSession};

impl<S: BalanceStore> GameSession<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.bet == 0 {
            return Err(ActionError::NoBetPlaced);
        }
        if self.phase != GamePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 loses the bet immediately. Otherwise the player may
    /// keep hitting.
    ///
    /// # Errors
    ///
    /// Returns an error if no chips are riding or it is not the player's
    /// turn.
    pub fn hit(&mut self) -> Result<Vec<Event>, ActionError> {
        self.ensure_player_turn()?;

        let mut events = Vec::new();
        self.deal_to(Seat::Player, false, &mut events);

        if self.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust, &mut events);
        } else if self.player_hand.is_natural() {
            // Only a two-card hand can be natural, and a hit always leaves three.
            self.settle(Outcome::Blackjack, &mut events);
        }

        Ok(events)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Reveals the hole card, plays out the dealer, and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no chips are riding or it is not the player's
    /// turn.
    pub fn stand(&mut self) -> Result<Vec<Event>, ActionError> {
        self.ensure_player_turn()?;

        let mut events = Vec::new();
        self.dealer_revealed = true;
        self.set_phase(GamePhase::DealerTurn);
        if let Some(&hole) = self.dealer_hand.cards().get(1) {
            events.push(Event::HoleCardRevealed(hole));
        }
        self.push_table(&mut events);

        self.dealer_play(&mut events);
        let outcome = self.showdown_outcome();
        self.settle(outcome, &mut events);

        Ok(events)
    }
}
