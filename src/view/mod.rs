//! Read-only board snapshots for a rendering layer.
//!
//! Views are plain serializable structs detached from the live game:
//! taking one never mutates or locks anything, and card lists come out
//! pre-sorted for display (by atomic number, the lab by category first)
//! regardless of the insertion order the engine maintains internally.

use serde::Serialize;

use crate::cards::Card;
use crate::core::Zone;
use crate::games::Market;
use crate::players::Player;

/// One card, flattened for display.
#[derive(Clone, Debug, Serialize)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub symbol: String,
    pub number: u8,
    pub mass: u32,
    pub category: String,
    pub shells: Vec<u8>,
    pub zone: Zone,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id().raw(),
            name: card.name().to_string(),
            symbol: card.symbol().to_string(),
            number: card.number(),
            mass: card.mass(),
            category: card.category().to_string(),
            shells: card.shells().to_vec(),
            zone: card.zone(),
        }
    }
}

/// One player's visible state.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub energy: u32,
    pub deck_size: usize,
    pub can_mulligan: bool,
    pub hand: Vec<CardView>,
    pub table: Vec<CardView>,
    pub lab: Vec<CardView>,
    pub discard: Vec<CardView>,
}

impl PlayerView {
    #[must_use]
    pub fn new(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            energy: player.energy(),
            deck_size: player.deck_size(),
            can_mulligan: player.can_mulligan(),
            hand: by_number(player.hand()),
            table: by_number(player.table()),
            lab: by_category(player.lab()),
            discard: by_number(player.discard()),
        }
    }
}

/// One market display.
#[derive(Clone, Debug, Serialize)]
pub struct MarketView {
    pub zone: Zone,
    pub cards: Vec<CardView>,
}

impl MarketView {
    #[must_use]
    pub fn new(market: &Market) -> Self {
        Self {
            zone: market.zone(),
            cards: by_number(market.cards()),
        }
    }
}

/// The whole board, from the perspective of no one in particular.
#[derive(Clone, Debug, Serialize)]
pub struct BoardView {
    pub current_player: String,
    pub players: Vec<PlayerView>,
    pub general_market: MarketView,
    pub light_market: MarketView,
    pub heavy_market: MarketView,
    pub light_deck_size: usize,
    pub heavy_deck_size: usize,
}

fn by_number(cards: &[Card]) -> Vec<CardView> {
    let mut views: Vec<CardView> = cards.iter().map(CardView::from).collect();
    views.sort_by_key(|v| v.number);
    views
}

/// Lab ordering groups the collection by element family.
fn by_category(cards: &[Card]) -> Vec<CardView> {
    let mut views: Vec<CardView> = cards.iter().map(CardView::from).collect();
    views.sort_by(|a, b| a.category.cmp(&b.category).then(a.number.cmp(&b.number)));
    views
}
