//! Notifications emitted by session transitions and the presenter contract.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, CardFace};
use crate::result::Outcome;

/// Message shown when the balance runs out.
pub const RUIN_MESSAGE: &str = "You are out of money!";

/// Who receives a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A change that presenters should reflect.
///
/// Transitions return events in the order they happened. Each dealt card is
/// its own [`Event::CardDealt`], so presenters can pace draws however they
/// like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One card was dealt.
    CardDealt {
        /// Receiving seat.
        seat: Seat,
        /// The card as it should be shown.
        face: CardFace,
    },
    /// The dealer's hole card was turned over.
    HoleCardRevealed(Card),
    /// The hands on the table changed.
    HandsChanged {
        /// Player cards in deal order.
        player: Vec<Card>,
        /// Dealer cards in deal order.
        dealer: Vec<Card>,
        /// Whether the dealer's hole card is visible.
        dealer_revealed: bool,
    },
    /// The displayed hand values changed.
    ValuesChanged {
        /// Player value text.
        player: String,
        /// Dealer value text.
        dealer: String,
    },
    /// The balance changed.
    BalanceChanged(usize),
    /// The bet changed.
    BetChanged(usize),
    /// The round was settled.
    RoundResolved {
        /// The outcome.
        outcome: Outcome,
        /// Message for the player.
        message: String,
    },
    /// The balance ran out; no more bets are accepted.
    Ruin,
    /// The balance could not be saved. The session continues.
    PersistenceFailed(String),
}

/// Renders session state.
///
/// Only the required methods carry table state; card-by-card notifications
/// default to no-ops.
pub trait Presenter {
    /// The hands changed.
    fn on_hands_changed(&mut self, player: &[Card], dealer: &[Card], dealer_revealed: bool);
    /// The displayed values changed.
    fn on_values_changed(&mut self, player: &str, dealer: &str);
    /// The balance changed.
    fn on_balance_changed(&mut self, balance: usize);
    /// The bet changed.
    fn on_bet_changed(&mut self, bet: usize);
    /// The round was settled.
    fn on_round_resolved(&mut self, message: &str);
    /// The balance ran out.
    fn on_ruin(&mut self);

    /// A card was dealt.
    fn on_card_dealt(&mut self, _seat: Seat, _face: CardFace) {}
    /// The hole card was revealed.
    fn on_hole_card_revealed(&mut self, _card: Card) {}
    /// The balance could not be saved.
    fn on_persistence_failed(&mut self, _reason: &str) {}
}

/// Forwards `events` to `presenter` in order.
pub fn dispatch<'a, P, I>(events: I, presenter: &mut P)
where
    P: Presenter + ?Sized,
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        match event {
            Event::CardDealt { seat, face } => presenter.on_card_dealt(*seat, *face),
            Event::HoleCardRevealed(card) => presenter.on_hole_card_revealed(*card),
            Event::HandsChanged {
                player,
                dealer,
                dealer_revealed,
            } => presenter.on_hands_changed(player, dealer, *dealer_revealed),
            Event::ValuesChanged { player, dealer } => presenter.on_values_changed(player, dealer),
            Event::BalanceChanged(balance) => presenter.on_balance_changed(*balance),
            Event::BetChanged(bet) => presenter.on_bet_changed(*bet),
            Event::RoundResolved { message, .. } => presenter.on_round_resolved(message),
            Event::Ruin => presenter.on_ruin(),
            Event::PersistenceFailed(reason) => presenter.on_persistence_failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Presenter for Recorder {
        fn on_hands_changed(&mut self, player: &[Card], dealer: &[Card], dealer_revealed: bool) {
            self.calls
                .push(format!("hands {} {} {dealer_revealed}", player.len(), dealer.len()));
        }

        fn on_values_changed(&mut self, player: &str, dealer: &str) {
            self.calls.push(format!("values {player} {dealer}"));
        }

        fn on_balance_changed(&mut self, balance: usize) {
            self.calls.push(format!("balance {balance}"));
        }

        fn on_bet_changed(&mut self, bet: usize) {
            self.calls.push(format!("bet {bet}"));
        }

        fn on_round_resolved(&mut self, message: &str) {
            self.calls.push(format!("resolved {message}"));
        }

        fn on_ruin(&mut self) {
            self.calls.push(String::from("ruin"));
        }
    }

    #[test]
    fn dispatch_preserves_order_and_skips_defaults() {
        let events = vec![
            Event::BetChanged(20),
            Event::CardDealt {
                seat: Seat::Dealer,
                face: CardFace::Down,
            },
            Event::BalanceChanged(980),
            Event::ValuesChanged {
                player: String::from("7 / 17"),
                dealer: String::from("10"),
            },
            Event::Ruin,
        ];

        let mut recorder = Recorder::default();
        dispatch(&events, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec!["bet 20", "balance 980", "values 7 / 17 10", "ruin"]
        );
    }
}
