//! Card types and asset ids.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Asset id of a face-down card.
pub const BACK_ASSET_ID: &str = "back";

/// Number of distinct cards a draw can produce.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Lowercase name used in asset ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Value counted before any ace demotion (aces count 11).
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Lowercase name used in asset ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        }
    }

    const fn short(self) -> &'static str {
        match self {
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            _ => self.name(),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the asset id, e.g. `"queen_of_spades"`.
    ///
    /// ```
    /// use bjrs_table::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Ten, Suit::Hearts).asset_id(), "10_of_hearts");
    /// ```
    #[must_use]
    pub fn asset_id(&self) -> String {
        format!("{}_of_{}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short(), self.suit.symbol())
    }
}

/// How a card is shown on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Face up.
    Up(Card),
    /// Face down (the dealer's hole card).
    Down,
}

impl CardFace {
    /// Returns the asset id for this face.
    #[must_use]
    pub fn asset_id(&self) -> String {
        match self {
            Self::Up(card) => card.asset_id(),
            Self::Down => String::from(BACK_ASSET_ID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_ids_use_lowercase_names() {
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).asset_id(), "queen_of_spades");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).asset_id(), "ace_of_clubs");
        assert_eq!(Card::new(Rank::Two, Suit::Diamonds).asset_id(), "2_of_diamonds");
        assert_eq!(CardFace::Down.asset_id(), BACK_ASSET_ID);
    }

    #[test]
    fn canonical_deck_has_52_distinct_cards() {
        let mut ids: alloc::vec::Vec<String> = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit).asset_id()))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }
}
