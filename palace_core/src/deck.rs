use itertools::{iproduct, Itertools};
use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::card::{Card, Rank, Suit};

/// The draw pile. The last element of `cards` is the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = iproduct!(Suit::iter(), Rank::iter())
            .map(|(suit, rank)| Card { suit, rank })
            .collect_vec();
        cards.shuffle(rng);
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{
        card::{Card, Rank, Suit, DECK_SIZE},
        deck::Deck,
    };

    #[test]
    fn shuffled_deck_should_hold_every_card_once() {
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(deck.len(), DECK_SIZE);
        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
    }

    #[test]
    fn draw_should_yield_none_once_exhausted() {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_some());
        }
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn same_seed_should_yield_same_order() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn from_cards_should_draw_from_the_back() {
        let mut deck = Deck::from_cards(vec![
            Card {
                suit: Suit::Clubs,
                rank: Rank::Four,
            },
            Card {
                suit: Suit::Hearts,
                rank: Rank::Ace,
            },
        ]);
        assert_eq!(deck.draw().map(|c| c.rank), Some(Rank::Ace));
        assert_eq!(deck.draw().map(|c| c.rank), Some(Rank::Four));
        assert!(deck.is_empty());
    }
}
