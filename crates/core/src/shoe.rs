use crate::{Card, RngState, RANKS, SUITS};

/// One or more 52-card decks shuffled together and dealt front to back.
#[derive(Debug, Default, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `num_decks` concatenated copies of the base set in canonical
    /// suit-major, rank-minor order. Pure; shuffling is a separate step.
    pub fn new(num_decks: u32) -> Self {
        let mut cards = Vec::with_capacity(52 * num_decks as usize);
        for _ in 0..num_decks {
            for suit in SUITS {
                for rank in RANKS {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    /// A prearranged shoe. Deterministic drills and tests deal from these.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use std::collections::HashMap;

    #[test]
    fn one_deck_has_each_card_once() {
        let shoe = Shoe::new(1);
        assert_eq!(shoe.len(), 52);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in shoe.cards() {
            *counts.entry(*card).or_default() += 1;
        }
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|count| *count == 1));
    }

    #[test]
    fn multi_deck_replicates_every_card() {
        for decks in [2u32, 6] {
            let shoe = Shoe::new(decks);
            assert_eq!(shoe.len(), 52 * decks as usize);
            let mut counts: HashMap<Card, usize> = HashMap::new();
            for card in shoe.cards() {
                *counts.entry(*card).or_default() += 1;
            }
            assert!(counts.values().all(|count| *count == decks as usize));
        }
    }

    #[test]
    fn canonical_order_starts_with_low_hearts() {
        let shoe = Shoe::new(1);
        assert_eq!(shoe.card_at(0), Some(Card::new(Rank::Two, Suit::Hearts)));
        assert_eq!(shoe.card_at(1), Some(Card::new(Rank::Three, Suit::Hearts)));
        assert_eq!(shoe.card_at(12), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(shoe.card_at(13), Some(Card::new(Rank::Two, Suit::Diamonds)));
        assert_eq!(shoe.card_at(51), Some(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut shoe = Shoe::new(3);
        let mut before: Vec<Card> = shoe.cards().to_vec();
        let mut rng = RngState::from_seed(42);
        shoe.shuffle(&mut rng);
        let mut after: Vec<Card> = shoe.cards().to_vec();
        let key = |card: &Card| (card.suit as u8, card.rank as u8);
        before.sort_by_key(key);
        after.sort_by_key(key);
        assert_eq!(before, after);
    }
}
