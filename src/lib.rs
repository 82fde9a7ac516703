//! # periodical-core
//!
//! The engine for a periodic-table deck-builder: players harvest element
//! cards from their hands for energy, spend that energy buying heavier
//! elements off shared markets, and grow a lab collection one synthesis
//! per turn.
//!
//! ## Design Principles
//!
//! 1. **Rejection, Not Panic**: Disallowed moves return `false`, `None`,
//!    or `Err` with nothing changed. The only fatal fault in the crate
//!    is failing to load element data at startup.
//!
//! 2. **One RNG, One Seed**: Every random outcome flows through the
//!    game's seeded [`GameRng`]. Same seed, same roster, same calls:
//!    same game.
//!
//! 3. **Injected Data**: The element table is a [`CardCatalog`] built
//!    from a path, a JSON string, or the bundled default. Nothing reads
//!    a global location.
//!
//! ## Modules
//!
//! - `core`: Zones, RNG, configuration
//! - `cards`: Element catalog, card instances, the minting factory
//! - `decks`: Ordered draw piles
//! - `players`: Per-player zones, energy economy, turn flags
//! - `games`: Markets and the orchestrating `Game`
//! - `view`: Serializable board snapshots for rendering

pub mod cards;
pub mod core;
pub mod decks;
pub mod games;
pub mod players;
pub mod view;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Zone};

pub use crate::cards::{
    Card, CardCatalog, CardFactory, CardId, CatalogError, ElementRecord, ELEMENTS_AMOUNT,
};

pub use crate::decks::Deck;

pub use crate::players::Player;

pub use crate::games::{Game, GameStatus, Market};

pub use crate::view::{BoardView, CardView, MarketView, PlayerView};
