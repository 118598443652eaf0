//! Property tests for hand scoring.

use bjrs_table::{Card, Rank, Suit, score};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

/// Mostly short hands, with some long ace-heavy ones.
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop_oneof![
        3 => prop::collection::vec(any_card(), 0..9),
        1 => (
            prop::collection::vec(Just(Card::new(Rank::Ace, Suit::Spades)), 0..60),
            prop::collection::vec(any_card(), 0..40),
        )
            .prop_map(|(mut aces, rest)| {
                aces.extend(rest);
                aces
            }),
    ]
}

fn hand_and_shuffle() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    any_hand()
        .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
}

/// Every total reachable by counting some of the aces as 11.
fn reachable_totals(cards: &[Card]) -> Vec<(usize, usize)> {
    let aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();
    let hard: usize = cards
        .iter()
        .map(|c| {
            if c.rank == Rank::Ace {
                1
            } else {
                usize::from(c.rank.base_value())
            }
        })
        .sum();

    (0..=aces)
        .map(|high| (hard + 10 * high, high))
        .collect()
}

proptest! {
    #[test]
    fn score_ignores_card_order((cards, shuffled) in hand_and_shuffle()) {
        prop_assert_eq!(score(&cards), score(&shuffled));
    }

    #[test]
    fn score_is_best_total_under_22_or_minimum(cards in any_hand()) {
        let totals = reachable_totals(&cards);
        let best = totals
            .iter()
            .filter(|(total, _)| *total <= 21)
            .max_by_key(|(total, _)| *total)
            .copied()
            .unwrap_or(totals[0]);

        let scored = score(&cards);
        prop_assert_eq!(scored.total, best.0);
        prop_assert_eq!(scored.is_soft, best.1 > 0 && best.0 <= 21);
    }

    #[test]
    fn display_shows_two_values_only_when_soft(cards in any_hand()) {
        let scored = score(&cards);
        let text = scored.display();
        prop_assert_eq!(text.contains(" / "), scored.is_soft);
        prop_assert!(text.ends_with(&scored.total.to_string()));
    }
}
