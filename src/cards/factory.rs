//! Card minting.
//!
//! The `CardFactory` pairs a [`CardCatalog`] with the `CardId`
//! allocator. Every card in a game comes out of the one factory owned
//! by `Game`, which is what makes `CardId` a usable identity: no two
//! minted cards ever share an id, even when they depict the same
//! element (the general market mints fresh copies on every refill).

use crate::cards::{Card, CardCatalog, CardId, ELEMENTS_AMOUNT};
use crate::core::Zone;

/// Mints cards from catalog records.
#[derive(Clone, Debug)]
pub struct CardFactory {
    catalog: CardCatalog,
    next_id: u32,
}

impl CardFactory {
    /// Create a factory over a catalog.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            next_id: 0,
        }
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Mint one card per catalog element in `range`, inclusive, in
    /// atomic-number order, all tagged `Limbo`.
    ///
    /// Elements absent from the catalog are silently skipped, so the
    /// result may be shorter than the range.
    pub fn generate_cards(&mut self, range: std::ops::RangeInclusive<u8>) -> Vec<Card> {
        let mut next = self.next_id;
        let cards: Vec<Card> = self
            .catalog
            .in_range(range)
            .map(|record| {
                let id = CardId::new(next);
                next += 1;
                Card::new(
                    id,
                    &record.name,
                    &record.symbol,
                    record.number,
                    record.atomic_mass,
                    &record.category,
                    &record.shells,
                    Zone::Limbo,
                )
            })
            .collect();
        self.next_id = next;
        cards
    }

    /// Mint one card per catalog element.
    pub fn generate_all(&mut self) -> Vec<Card> {
        self.generate_cards(1..=ELEMENTS_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn factory() -> CardFactory {
        CardFactory::new(CardCatalog::bundled())
    }

    #[test]
    fn test_generate_cards_in_range() {
        let mut factory = factory();
        let cards = factory.generate_cards(1..=10);

        assert_eq!(cards.len(), 10);
        let numbers: Vec<u8> = cards.iter().map(Card::number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());

        for card in &cards {
            assert_eq!(card.zone(), Zone::Limbo);
        }
    }

    #[test]
    fn test_ids_unique_across_batches() {
        let mut factory = factory();
        let first = factory.generate_cards(1..=10);
        let second = factory.generate_cards(1..=10);

        let ids: FxHashSet<u32> = first
            .iter()
            .chain(second.iter())
            .map(|c| c.id().raw())
            .collect();
        assert_eq!(ids.len(), 20);

        // same element, different mint
        assert!(first[0].structurally_equal(&second[0]));
        assert!(!first[0].same_instance(&second[0]));
    }

    #[test]
    fn test_generate_all() {
        let mut factory = factory();
        let cards = factory.generate_all();
        assert_eq!(cards.len(), ELEMENTS_AMOUNT as usize);
    }

    #[test]
    fn test_card_fields_come_from_record() {
        let mut factory = factory();
        let gold = factory.generate_cards(79..=79).pop().unwrap();

        assert_eq!(gold.symbol(), "Au");
        assert_eq!(gold.name(), "Gold");
        assert_eq!(gold.mass(), 197);
        assert_eq!(gold.category(), "Transition Metal");
    }
}
