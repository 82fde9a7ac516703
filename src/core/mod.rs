//! Core foundation: zone tags, deterministic RNG, configuration.

mod config;
mod rng;
mod zone;

pub use config::GameConfig;
pub use rng::GameRng;
pub use zone::Zone;
