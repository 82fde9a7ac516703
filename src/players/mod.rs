//! Players: per-player zones, energy economy, and turn flags.

mod player;

pub use player::Player;
