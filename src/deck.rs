//! Infinite-supply card sampler.

use alloc::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shoe that never runs out.
///
/// Every draw picks one of the 52 canonical cards uniformly at random,
/// independent of previous draws.
#[derive(Debug, Clone)]
pub struct Deck {
    rng: ChaCha8Rng,
    stacked: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            stacked: VecDeque::new(),
        }
    }

    /// Draws a card.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.stacked.pop_front() {
            return card;
        }

        let index = self.rng.random_range(0..DECK_SIZE);
        Card::new(Rank::ALL[index / Suit::ALL.len()], Suit::ALL[index % Suit::ALL.len()])
    }

    /// Queues cards to be drawn, in order, before random sampling resumes.
    pub fn stack<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.stacked.extend(cards);
    }

    /// Returns the number of queued cards not yet drawn.
    #[must_use]
    pub fn stacked_len(&self) -> usize {
        self.stacked.len()
    }
}
