use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::event::{Event, Seat};
use crate::result::{Outcome, RoundResult};
use crate::store::BalanceStore;

use super::{GamePhase, GameSession};

impl<S: BalanceStore> GameSession<S> {
    /// Returns whether the dealer stops drawing at the current hand.
    fn dealer_stands(&self) -> bool {
        let score = self.dealer_hand.score();
        let stands_on = usize::from(self.options.dealer_stand_total());

        if score.total > stands_on {
            return true;
        }
        score.total == stands_on && (!score.is_soft || self.options.stand_on_soft_17)
    }

    /// Dealer draws until reaching the stand total.
    ///
    /// Each draw is emitted as its own event, followed by the updated table.
    pub(super) fn dealer_play(&mut self, events: &mut Vec<Event>) {
        while !self.dealer_stands() {
            self.deal_to(Seat::Dealer, false, events);
        }
        log::debug!(
            "dealer stands with {} after {} cards",
            self.dealer_hand.value(),
            self.dealer_hand.len()
        );
    }

    /// Compares the final hands.
    pub(super) fn showdown_outcome(&self) -> Outcome {
        let natural = self.player_hand.is_natural();
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        if dealer_value > 21 {
            Outcome::DealerBust { natural }
        } else if player_value > dealer_value {
            Outcome::PlayerWin { natural }
        } else if player_value < dealer_value {
            Outcome::DealerWin
        } else {
            Outcome::Push
        }
    }

    /// Pays out `outcome`, records the result, and clears the table.
    pub(super) fn settle(&mut self, outcome: Outcome, events: &mut Vec<Event>) {
        self.set_phase(GamePhase::Resolved);

        let bet = self.bet;
        let settlement = self.ledger.apply_outcome(bet, outcome);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = settlement.credit as isize - bet as isize;

        self.last_result = Some(RoundResult {
            outcome,
            bet,
            payout: settlement.credit,
            net,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            balance: settlement.balance,
        });

        events.push(Event::BalanceChanged(settlement.balance));
        if let Some(err) = settlement.persist_error {
            events.push(Event::PersistenceFailed(err.to_string()));
        }
        events.push(Event::RoundResolved {
            outcome,
            message: String::from(outcome.message()),
        });
        if settlement.ruined {
            events.push(Event::Ruin);
        }

        self.clear_round(events);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::card::{Card, Rank, Suit};
    use crate::game::GameSession;
    use crate::hand::Hand;
    use crate::options::SessionOptions;
    use crate::store::MemoryStore;

    const fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds)
    }

    fn with_dealer(options: SessionOptions, cards: &[Card]) -> GameSession {
        let mut session = GameSession::new(options, MemoryStore::new(), 9);
        session.dealer_hand = Hand::from(cards.to_vec());
        session
    }

    #[test]
    fn stands_on_any_seventeen_by_default() {
        let options = SessionOptions::default();
        assert!(with_dealer(options.clone(), &[c(Rank::Ten), c(Rank::Seven)]).dealer_stands());
        assert!(with_dealer(options.clone(), &[c(Rank::Ace), c(Rank::Six)]).dealer_stands());
        assert!(!with_dealer(options, &[c(Rank::Ten), c(Rank::Six)]).dealer_stands());
    }

    #[test]
    fn hits_soft_seventeen_when_configured() {
        let options = SessionOptions::default().with_stand_on_soft_17(false);
        assert!(!with_dealer(options.clone(), &[c(Rank::Ace), c(Rank::Six)]).dealer_stands());
        assert!(with_dealer(options.clone(), &[c(Rank::Ten), c(Rank::Seven)]).dealer_stands());
        assert!(with_dealer(options, &[c(Rank::Ace), c(Rank::Seven)]).dealer_stands());
    }

    #[test]
    fn out_of_range_stand_total_still_draws_to_a_hand() {
        let options = SessionOptions {
            dealer_stands_on: 0,
            ..SessionOptions::default()
        };
        assert!(!with_dealer(options.clone(), &[]).dealer_stands());
        assert!(with_dealer(options, &[c(Rank::Ten), c(Rank::Two)]).dealer_stands());
    }

    #[test]
    fn dealer_play_draws_until_standing() {
        let mut session = with_dealer(SessionOptions::default(), &[c(Rank::Ten), c(Rank::Six)]);
        session.deck_mut().stack([c(Rank::Two), c(Rank::Three)]);

        let mut events = vec![];
        session.dealer_play(&mut events);

        assert_eq!(session.dealer_hand.len(), 4);
        assert_eq!(session.dealer_hand.value(), 21);
    }
}
