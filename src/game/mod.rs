//! Session engine and round state machine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::CardFace;
use crate::deck::Deck;
use crate::event::{Event, Seat};
use crate::hand::{Hand, score};
use crate::ledger::Ledger;
use crate::options::SessionOptions;
use crate::result::RoundResult;
use crate::store::{BalanceStore, MemoryStore};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GamePhase;

/// A single-player blackjack session.
///
/// The session owns the deck, both hands, the bet, and the balance ledger.
/// Every action runs to completion and returns the [`Event`]s it produced,
/// in order, for a presenter to render.
///
/// # Example
///
/// ```
/// use bjrs_table::{GamePhase, GameSession, MemoryStore, SessionOptions};
///
/// let mut session = GameSession::new(SessionOptions::default(), MemoryStore::new(), 42);
/// session.place_chip(50).unwrap();
/// session.start_round().unwrap();
/// if session.phase() == GamePhase::PlayerTurn {
///     session.stand().unwrap();
/// }
/// assert_eq!(session.phase(), GamePhase::Idle);
/// assert_eq!(session.bet(), 0);
/// ```
#[derive(Debug)]
pub struct GameSession<S = MemoryStore> {
    options: SessionOptions,
    deck: Deck,
    ledger: Ledger<S>,
    phase: GamePhase,
    player_hand: Hand,
    dealer_hand: Hand,
    bet: usize,
    dealer_revealed: bool,
    last_result: Option<RoundResult>,
}

impl<S: BalanceStore> GameSession<S> {
    /// Creates a session, loading the balance from `store`.
    #[must_use]
    pub fn new(options: SessionOptions, store: S, seed: u64) -> Self {
        let ledger = Ledger::open(store, &options);
        log::debug!("session opened with balance {}", ledger.balance());

        Self {
            options,
            deck: Deck::new(seed),
            ledger,
            phase: GamePhase::Idle,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            bet: 0,
            dealer_revealed: false,
            last_result: None,
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the chips currently bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the dealer's hole card is visible.
    #[must_use]
    pub const fn is_dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    /// Returns the most recent round result, until the next round starts.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns whether the balance ran out.
    #[must_use]
    pub const fn is_ruined(&self) -> bool {
        self.ledger.is_ruined()
    }

    /// Returns whether [`GameSession::start_round`] would deal.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.phase.accepts_chips() && self.bet > 0
    }

    /// Returns the configured chips the balance can currently cover.
    #[must_use]
    pub fn affordable_chips(&self) -> Vec<usize> {
        if self.is_ruined() || !self.phase.accepts_chips() {
            return Vec::new();
        }
        self.options
            .chips
            .iter()
            .copied()
            .filter(|&chip| chip <= self.balance())
            .collect()
    }

    /// Returns the deck, e.g. to stack known cards.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the balance store.
    #[must_use]
    pub const fn store(&self) -> &S {
        self.ledger.store()
    }

    /// Returns the balance store mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        self.ledger.store_mut()
    }

    /// Returns events describing the whole table, for an initial render.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Event> {
        let mut events = Vec::with_capacity(4);
        self.push_table(&mut events);
        events.push(Event::BalanceChanged(self.balance()));
        events.push(Event::BetChanged(self.bet));
        events
    }

    /// Returns the player's value text.
    #[must_use]
    pub fn player_display(&self) -> String {
        self.player_hand.score().display()
    }

    /// Returns the dealer's value text. Only the up card counts while the
    /// hole card is hidden.
    #[must_use]
    pub fn dealer_display(&self) -> String {
        if self.dealer_revealed {
            self.dealer_hand.score().display()
        } else {
            let up = self.dealer_hand.cards().get(..1).unwrap_or_default();
            score(up).total.to_string()
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        log::debug!("phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }

    fn deal_to(&mut self, seat: Seat, face_down: bool, events: &mut Vec<Event>) {
        let card = self.deck.draw();
        match seat {
            Seat::Player => self.player_hand.add_card(card),
            Seat::Dealer => self.dealer_hand.add_card(card),
        }
        log::debug!("dealt {card} to {seat:?}");

        let face = if face_down {
            CardFace::Down
        } else {
            CardFace::Up(card)
        };
        events.push(Event::CardDealt { seat, face });
        self.push_table(events);
    }

    fn push_table(&self, events: &mut Vec<Event>) {
        events.push(Event::HandsChanged {
            player: self.player_hand.cards().to_vec(),
            dealer: self.dealer_hand.cards().to_vec(),
            dealer_revealed: self.dealer_revealed,
        });
        events.push(Event::ValuesChanged {
            player: self.player_display(),
            dealer: self.dealer_display(),
        });
    }

    /// Clears the table after settlement and returns to `Idle`.
    fn clear_round(&mut self, events: &mut Vec<Event>) {
        self.bet = 0;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_revealed = false;
        self.set_phase(GamePhase::Idle);

        events.push(Event::BetChanged(0));
        self.push_table(events);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn session() -> GameSession {
        GameSession::new(SessionOptions::default(), MemoryStore::new(), 1)
    }

    #[test]
    fn dealer_display_hides_hole_card() {
        let mut session = session();
        session.dealer_hand = Hand::from(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
        ]);

        assert_eq!(session.dealer_display(), "11");
        session.dealer_revealed = true;
        assert_eq!(session.dealer_display(), "7 / 17");
    }

    #[test]
    fn empty_table_displays_zero() {
        let session = session();
        assert_eq!(session.player_display(), "0");
        assert_eq!(session.dealer_display(), "0");
    }

    #[test]
    fn affordable_chips_follow_balance() {
        let mut session = GameSession::new(
            SessionOptions::default(),
            MemoryStore::with_balance(60),
            1,
        );
        assert_eq!(session.affordable_chips(), vec![20, 50]);
        session.place_chip(50).unwrap();
        assert!(session.affordable_chips().is_empty());
    }
}
