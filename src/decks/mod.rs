//! Decks: ordered card pools with a zone-assignment side effect.

mod deck;

pub use deck::Deck;
