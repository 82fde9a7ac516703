//! Games: the orchestration layer over players, decks, and markets.

mod game;
mod market;

pub use game::{Game, GameStatus};
pub use market::Market;
