//! Hand scoring and hand representation.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// The value of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Best total, demoting aces from 11 to 1 only as needed.
    pub total: usize,
    /// Whether an ace is still counted as 11 in `total`.
    pub is_soft: bool,
}

impl HandScore {
    /// Formats the score for display.
    ///
    /// Soft hands show both totals, e.g. `"7 / 17"`.
    ///
    /// ```
    /// use bjrs_table::hand::HandScore;
    ///
    /// assert_eq!(HandScore { total: 17, is_soft: true }.display(), "7 / 17");
    /// assert_eq!(HandScore { total: 17, is_soft: false }.display(), "17");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        if self.is_soft && self.total <= 21 {
            format!("{} / {}", self.total - 10, self.total)
        } else {
            format!("{}", self.total)
        }
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }
}

/// Scores a sequence of cards.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total is
/// over 21. An empty hand scores 0.
#[must_use]
pub fn score(cards: &[Card]) -> HandScore {
    let mut total: usize = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += usize::from(card.rank.base_value());
    }

    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandScore {
        total,
        is_soft: soft_aces > 0 && total <= 21,
    }
}

/// A hand of cards in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self) -> HandScore {
        score(&self.cards)
    }

    /// Returns the best total.
    #[must_use]
    pub fn value(&self) -> usize {
        self.score().total
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Returns whether the hand is a natural (two cards totalling 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Suit;

    const fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), HandScore { total: 0, is_soft: false });
    }

    #[test]
    fn aces_demote_one_at_a_time() {
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Six)]), HandScore { total: 17, is_soft: true });
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Ace)]), HandScore { total: 12, is_soft: true });
        assert_eq!(
            score(&[c(Rank::Ace), c(Rank::King), c(Rank::Five)]),
            HandScore { total: 16, is_soft: false }
        );
        assert_eq!(
            score(&[c(Rank::Ace), c(Rank::Ace), c(Rank::Nine)]),
            HandScore { total: 21, is_soft: true }
        );
    }

    #[test]
    fn bust_hands_keep_minimum_total() {
        let hand = score(&[c(Rank::King), c(Rank::Queen), c(Rank::Ace), c(Rank::Five)]);
        assert_eq!(hand, HandScore { total: 26, is_soft: false });
        assert!(hand.is_bust());
    }

    #[test]
    fn display_shows_both_soft_totals() {
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Six)]).display(), "7 / 17");
        assert_eq!(score(&[c(Rank::Ace), c(Rank::King), c(Rank::Five)]).display(), "16");
        assert_eq!(score(&[c(Rank::Ace), c(Rank::Jack)]).display(), "11 / 21");
    }

    #[test]
    fn natural_requires_exactly_two_cards() {
        let natural = Hand::from(vec![c(Rank::Ace), c(Rank::Queen)]);
        assert!(natural.is_natural());

        let three_card = Hand::from(vec![c(Rank::Seven), c(Rank::Seven), c(Rank::Seven)]);
        assert_eq!(three_card.value(), 21);
        assert!(!three_card.is_natural());
    }

    #[test]
    fn many_aces_score_without_wrapping() {
        let aces = vec![c(Rank::Ace); 30];
        assert_eq!(score(&aces), HandScore { total: 30, is_soft: false });

        let mut soft = vec![c(Rank::Ace); 11];
        assert_eq!(score(&soft), HandScore { total: 21, is_soft: true });
        soft.extend(vec![c(Rank::King); 30]);
        assert_eq!(score(&soft), HandScore { total: 311, is_soft: false });
    }
}
