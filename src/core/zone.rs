//! Zone tags for card locations.
//!
//! Every card carries exactly one `Zone` tag at any time, and the tag
//! must match the container the card currently lives in. The mutation
//! helpers on `Deck`, `Player`, `Market`, and `Game` are the only code
//! paths that restamp it.

use serde::{Deserialize, Serialize};

/// The logical location a card currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Freshly minted, not yet placed anywhere.
    Limbo,
    /// A player's draw pile.
    PlayerDeck,
    /// A player's hand.
    Hand,
    /// Cards played or bought this turn.
    Table,
    /// A player's spent pile.
    Discard,
    /// A player's permanent lab collection.
    Lab,
    /// The regenerating shared market.
    GeneralMarket,
    /// The finite light supply deck.
    LightDeck,
    /// The finite heavy supply deck.
    HeavyDeck,
    /// The light market display.
    LightMarket,
    /// The heavy market display.
    HeavyMarket,
}

impl Zone {
    /// Check if this zone is one of the shared market displays.
    #[must_use]
    pub fn is_market(self) -> bool {
        matches!(self, Zone::GeneralMarket | Zone::LightMarket | Zone::HeavyMarket)
    }

    /// Check if this zone is a finite supply deck.
    #[must_use]
    pub fn is_supply_deck(self) -> bool {
        matches!(self, Zone::LightDeck | Zone::HeavyDeck)
    }

    /// Check if this zone is owned by a single player.
    #[must_use]
    pub fn is_player_zone(self) -> bool {
        matches!(
            self,
            Zone::PlayerDeck | Zone::Hand | Zone::Table | Zone::Discard | Zone::Lab
        )
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Limbo => "limbo",
            Zone::PlayerDeck => "player deck",
            Zone::Hand => "hand",
            Zone::Table => "table",
            Zone::Discard => "discard",
            Zone::Lab => "lab",
            Zone::GeneralMarket => "general market",
            Zone::LightDeck => "light deck",
            Zone::HeavyDeck => "heavy deck",
            Zone::LightMarket => "light market",
            Zone::HeavyMarket => "heavy market",
        };
        write!(f, "{}", name)
    }
}
