//! Decks - ordered, drawable, shufflable card pools.
//!
//! A `Deck` is tagged with one zone, stamped onto every card it is
//! constructed with. Drawing from an empty deck is a normal `None`
//! result, never a fault: callers (the player reshuffle, market top-ups)
//! treat a dry deck as expected.

use std::collections::VecDeque;

use crate::cards::{Card, CardId};
use crate::core::{GameRng, Zone};

/// An ordered pool of cards. Front = next draw.
#[derive(Clone, Debug)]
pub struct Deck {
    zone: Zone,
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create a deck, stamping `zone` onto every supplied card.
    /// Order is kept as given.
    #[must_use]
    pub fn new(zone: Zone, cards: Vec<Card>) -> Self {
        let mut cards: VecDeque<Card> = cards.into();
        for card in &mut cards {
            card.set_zone(zone);
        }
        debug_assert!(
            {
                let mut ids: Vec<u32> = cards.iter().map(|c| c.id().raw()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "deck holds duplicate card instances"
        );
        Self { zone, cards }
    }

    /// The zone stamped onto this deck's cards.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Remove and return the front card.
    ///
    /// `None` when the deck is empty - an expected signal, not an error.
    /// The drawn card still carries this deck's zone tag; the caller
    /// restamps it for wherever the card lands.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Uniformly randomize the remaining order. Zone tags are untouched.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Check if a specific minted card is in this deck.
    #[must_use]
    pub fn contains_instance(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardFactory};
    use proptest::prelude::*;

    fn cards(n: u8) -> Vec<Card> {
        CardFactory::new(CardCatalog::bundled()).generate_cards(1..=n)
    }

    #[test]
    fn test_new_stamps_zone() {
        let deck = Deck::new(Zone::LightDeck, cards(5));

        assert_eq!(deck.zone(), Zone::LightDeck);
        assert_eq!(deck.len(), 5);
        for card in deck.iter() {
            assert_eq!(card.zone(), Zone::LightDeck);
        }
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = Deck::new(Zone::PlayerDeck, cards(3));

        assert_eq!(deck.draw().unwrap().number(), 1);
        assert_eq!(deck.draw().unwrap().number(), 2);
        assert_eq!(deck.draw().unwrap().number(), 3);
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_empty_draw_is_silent() {
        let mut deck = Deck::new(Zone::PlayerDeck, Vec::new());
        assert!(deck.draw().is_none());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_shuffle_keeps_zone_and_cards() {
        let mut deck = Deck::new(Zone::HeavyDeck, cards(20));
        let before: Vec<u32> = deck.iter().map(|c| c.id().raw()).collect();

        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        let mut after: Vec<u32> = deck.iter().map(|c| c.id().raw()).collect();
        assert_ne!(after, before);

        after.sort_unstable();
        let mut sorted_before = before;
        sorted_before.sort_unstable();
        assert_eq!(after, sorted_before);

        for card in deck.iter() {
            assert_eq!(card.zone(), Zone::HeavyDeck);
        }
    }

    #[test]
    fn test_contains_instance() {
        let pool = cards(3);
        let id = pool[1].id();
        let mut deck = Deck::new(Zone::PlayerDeck, pool);

        assert!(deck.contains_instance(id));
        deck.draw();
        deck.draw();
        assert!(!deck.contains_instance(id));
    }

    proptest! {
        /// Drawing `len` times yields every card exactly once, then
        /// further draws yield the empty signal.
        #[test]
        fn prop_draw_exhausts_each_card_once(n in 1u8..40) {
            let pool = cards(n);
            let mut expected: Vec<u32> = pool.iter().map(|c| c.id().raw()).collect();
            let mut deck = Deck::new(Zone::PlayerDeck, pool);

            let mut drawn = Vec::new();
            while let Some(card) = deck.draw() {
                drawn.push(card.id().raw());
            }

            prop_assert!(deck.draw().is_none());
            drawn.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(drawn, expected);
        }

        /// Shuffle is a permutation for any seed.
        #[test]
        fn prop_shuffle_is_permutation(n in 1u8..40, seed in any::<u64>()) {
            let mut deck = Deck::new(Zone::PlayerDeck, cards(n));
            let mut before: Vec<u32> = deck.iter().map(|c| c.id().raw()).collect();

            let mut rng = GameRng::new(seed);
            deck.shuffle(&mut rng);

            let mut after: Vec<u32> = deck.iter().map(|c| c.id().raw()).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
