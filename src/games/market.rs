//! Markets - capacity-bounded shared card displays.
//!
//! The light and heavy markets are topped up from their finite supply
//! decks; the general market is wholly regenerated from freshly minted
//! cards on every refill. Taking and restoring cards is index-exact so
//! a rejected buy leaves the display bit-identical.

use crate::cards::{Card, CardId};
use crate::core::Zone;
use crate::decks::Deck;

/// A shared, capacity-bounded display of purchasable cards.
#[derive(Clone, Debug)]
pub struct Market {
    zone: Zone,
    capacity: usize,
    cards: Vec<Card>,
}

impl Market {
    /// Create an empty market for `zone` holding at most `capacity`
    /// cards.
    #[must_use]
    pub fn new(zone: Zone, capacity: usize) -> Self {
        Self {
            zone,
            capacity,
            cards: Vec::with_capacity(capacity),
        }
    }

    /// The market's zone tag.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Display capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cards currently on display.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards on display.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the display is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a specific minted card is on display.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Display index of a specific minted card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Top up to capacity from `deck`, stopping early if it runs dry.
    /// Drawn cards are stamped with the market's zone.
    pub fn fill_from(&mut self, deck: &mut Deck) {
        while self.cards.len() < self.capacity {
            match deck.draw() {
                Some(mut card) => {
                    card.set_zone(self.zone);
                    self.cards.push(card);
                }
                None => break,
            }
        }
    }

    /// Replace the whole display with freshly minted cards (general
    /// market refill).
    pub fn regenerate(&mut self, cards: Vec<Card>) {
        self.cards.clear();
        for mut card in cards {
            card.set_zone(self.zone);
            self.cards.push(card);
        }
    }

    /// Remove and return the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    /// Put a card back at `index` (rolling back a rejected buy).
    pub fn insert_at(&mut self, index: usize, mut card: Card) {
        card.set_zone(self.zone);
        self.cards.insert(index, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardFactory};

    fn deck(n: u8) -> Deck {
        let cards = CardFactory::new(CardCatalog::bundled()).generate_cards(1..=n);
        Deck::new(Zone::LightDeck, cards)
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut supply = deck(10);
        let mut market = Market::new(Zone::LightMarket, 3);

        market.fill_from(&mut supply);

        assert_eq!(market.len(), 3);
        assert_eq!(supply.len(), 7);
        for card in market.cards() {
            assert_eq!(card.zone(), Zone::LightMarket);
        }
    }

    #[test]
    fn test_fill_only_tops_up() {
        let mut supply = deck(10);
        let mut market = Market::new(Zone::LightMarket, 3);

        market.fill_from(&mut supply);
        let id = market.cards()[0].id();
        let at = market.position(id).unwrap();
        market.remove_at(at);

        market.fill_from(&mut supply);
        assert_eq!(market.len(), 3);
        assert_eq!(supply.len(), 6); // exactly one more drawn
    }

    #[test]
    fn test_fill_stops_when_deck_dry() {
        let mut supply = deck(2);
        let mut market = Market::new(Zone::HeavyMarket, 5);

        market.fill_from(&mut supply);
        assert_eq!(market.len(), 2);
        assert!(supply.is_empty());

        // further refills never increase it
        market.fill_from(&mut supply);
        assert_eq!(market.len(), 2);
    }

    #[test]
    fn test_regenerate_replaces_display() {
        let mut factory = CardFactory::new(CardCatalog::bundled());
        let mut market = Market::new(Zone::GeneralMarket, 2);

        market.regenerate(factory.generate_cards(1..=2));
        let first_ids: Vec<u32> = market.cards().iter().map(|c| c.id().raw()).collect();

        market.regenerate(factory.generate_cards(1..=2));
        let second_ids: Vec<u32> = market.cards().iter().map(|c| c.id().raw()).collect();

        assert_eq!(market.len(), 2);
        assert_ne!(first_ids, second_ids); // fresh mints every time
        for card in market.cards() {
            assert_eq!(card.zone(), Zone::GeneralMarket);
        }
    }

    #[test]
    fn test_remove_and_insert_round_trip() {
        let mut supply = deck(5);
        let mut market = Market::new(Zone::LightMarket, 3);
        market.fill_from(&mut supply);

        let order_before: Vec<u32> = market.cards().iter().map(|c| c.id().raw()).collect();

        let id = market.cards()[1].id();
        let at = market.position(id).unwrap();
        let card = market.remove_at(at);
        assert!(!market.contains(id));

        market.insert_at(at, card);
        let order_after: Vec<u32> = market.cards().iter().map(|c| c.id().raw()).collect();
        assert_eq!(order_after, order_before);
    }
}
