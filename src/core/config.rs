//! Game configuration.
//!
//! A `GameConfig` fixes every tunable of a game at construction time:
//! hand size, roster minimum, the element ranges each deck and market
//! draws from, supply-deck copy counts, and market capacities. The
//! element data source itself is injected separately, into
//! [`CardCatalog`](crate::cards::CardCatalog) construction; there is no
//! global data path.

use std::ops::RangeInclusive;

use crate::cards::ELEMENTS_AMOUNT;

/// Complete game configuration.
///
/// Built with the `with_*` methods starting from `GameConfig::default()`.
///
/// ## Example
///
/// ```
/// use periodical_core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_light_range(1..=20)
///     .with_heavy_range(21..=40)
///     .with_light_market_limit(4);
///
/// assert_eq!(config.light_market_limit, 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Minimum roster size required by `start()`.
    pub min_players: usize,

    /// Cards dealt into the hand each turn.
    pub hand_size: usize,

    /// Element range of each player's starting deck.
    pub starting_deck_range: RangeInclusive<u8>,

    /// Element range regenerated into the general market on every refill.
    pub general_market_range: RangeInclusive<u8>,

    /// Element range of the light supply deck.
    pub light_range: RangeInclusive<u8>,

    /// Full passes over `light_range` when building the light deck.
    pub light_copies: usize,

    /// Light market display capacity.
    pub light_market_limit: usize,

    /// Element range of the heavy supply deck.
    pub heavy_range: RangeInclusive<u8>,

    /// Full passes over `heavy_range` when building the heavy deck.
    pub heavy_copies: usize,

    /// Heavy market display capacity.
    pub heavy_market_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            hand_size: 5,
            starting_deck_range: 1..=10,
            general_market_range: 1..=2,
            light_range: 1..=36,
            light_copies: 2,
            light_market_limit: 3,
            heavy_range: 37..=ELEMENTS_AMOUNT,
            heavy_copies: 2,
            heavy_market_limit: 5,
        }
    }
}

impl GameConfig {
    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        assert!(min > 0, "Must require at least 1 player");
        self.min_players = min;
        self
    }

    /// Set the per-turn hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Set the starting-deck element range.
    #[must_use]
    pub fn with_starting_deck_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.starting_deck_range = range;
        self
    }

    /// Set the general-market element range.
    #[must_use]
    pub fn with_general_market_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.general_market_range = range;
        self
    }

    /// Set the light supply-deck element range.
    #[must_use]
    pub fn with_light_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.light_range = range;
        self
    }

    /// Set the number of light-range passes in the light deck.
    #[must_use]
    pub fn with_light_copies(mut self, copies: usize) -> Self {
        self.light_copies = copies;
        self
    }

    /// Set the light market capacity.
    #[must_use]
    pub fn with_light_market_limit(mut self, limit: usize) -> Self {
        self.light_market_limit = limit;
        self
    }

    /// Set the heavy supply-deck element range.
    #[must_use]
    pub fn with_heavy_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.heavy_range = range;
        self
    }

    /// Set the number of heavy-range passes in the heavy deck.
    #[must_use]
    pub fn with_heavy_copies(mut self, copies: usize) -> Self {
        self.heavy_copies = copies;
        self
    }

    /// Set the heavy market capacity.
    #[must_use]
    pub fn with_heavy_market_limit(mut self, limit: usize) -> Self {
        self.heavy_market_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.min_players, 2);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.starting_deck_range, 1..=10);
        assert_eq!(config.light_market_limit, 3);
        assert_eq!(config.heavy_market_limit, 5);
        assert_eq!(*config.heavy_range.end(), ELEMENTS_AMOUNT);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_min_players(3)
            .with_hand_size(4)
            .with_starting_deck_range(1..=8)
            .with_general_market_range(1..=3)
            .with_light_range(1..=18)
            .with_light_copies(1)
            .with_light_market_limit(2)
            .with_heavy_range(19..=54)
            .with_heavy_copies(3)
            .with_heavy_market_limit(6);

        assert_eq!(config.min_players, 3);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.starting_deck_range, 1..=8);
        assert_eq!(config.general_market_range, 1..=3);
        assert_eq!(config.light_range, 1..=18);
        assert_eq!(config.light_copies, 1);
        assert_eq!(config.light_market_limit, 2);
        assert_eq!(config.heavy_range, 19..=54);
        assert_eq!(config.heavy_copies, 3);
        assert_eq!(config.heavy_market_limit, 6);
    }

    #[test]
    #[should_panic(expected = "Hand size must be at least 1")]
    fn test_zero_hand_size_panics() {
        let _ = GameConfig::default().with_hand_size(0);
    }

    #[test]
    #[should_panic(expected = "Must require at least 1 player")]
    fn test_zero_min_players_panics() {
        let _ = GameConfig::default().with_min_players(0);
    }
}
