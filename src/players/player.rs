//! Players - the turn and zone state machine.
//!
//! A player owns five card containers (deck, hand, table, lab, discard)
//! plus the turn-scoped bookkeeping: `energy`, the reversible-harvest
//! set (`unused`), the single-per-turn lab record (`last_synthesis`),
//! and the sticky `played` flag that gates the mulligan.
//!
//! Every mutating operation either completes fully or changes nothing
//! and reports `false`/`Err` - disallowed moves are policy rejections,
//! not faults. These operations are the only code paths that restamp a
//! card's zone tag or touch container membership, which is what keeps
//! the tag/container invariant intact.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};
use crate::core::{GameRng, Zone};
use crate::decks::Deck;

/// A player: personal zones, energy economy, turn flags.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand_size: usize,
    deck: Deck,
    hand: Vec<Card>,
    table: Vec<Card>,
    lab: Vec<Card>,
    discard: Vec<Card>,
    /// Cards harvested this turn whose energy has not been committed.
    unused: Vec<CardId>,
    energy: u32,
    /// Set once the player has taken any hand action; gates the mulligan.
    played: bool,
    /// The card synthesized this turn, if any. `None` means the lab
    /// action is still available.
    last_synthesis: Option<CardId>,
}

impl Player {
    /// Create a player owning `starting_cards` as their draw pile.
    ///
    /// The cards are stamped `PlayerDeck`; all other containers start
    /// empty. Deal the opening hand with [`Player::end_turn`].
    #[must_use]
    pub fn new(name: impl Into<String>, starting_cards: Vec<Card>, hand_size: usize) -> Self {
        Self {
            name: name.into(),
            hand_size,
            deck: Deck::new(Zone::PlayerDeck, starting_cards),
            hand: Vec::new(),
            table: Vec::new(),
            lab: Vec::new(),
            discard: Vec::new(),
            unused: Vec::new(),
            energy: 0,
            played: false,
            last_synthesis: None,
        }
    }

    // === Queries ===

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Energy accumulated this turn.
    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Whether this player has taken a hand action yet.
    #[must_use]
    pub fn played(&self) -> bool {
        self.played
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// The hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards played or bought this turn.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// The permanent lab collection.
    #[must_use]
    pub fn lab(&self) -> &[Card] {
        &self.lab
    }

    /// The spent pile.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Ids of cards harvested this turn that can still be reversed.
    #[must_use]
    pub fn unused(&self) -> &[CardId] {
        &self.unused
    }

    /// The card synthesized this turn, if any.
    #[must_use]
    pub fn last_synthesis(&self) -> Option<CardId> {
        self.last_synthesis
    }

    /// The hand keyed by atomic number, for input-layer lookups.
    #[must_use]
    pub fn hand_by_number(&self) -> FxHashMap<u8, &Card> {
        index_by_number(&self.hand)
    }

    /// The discard pile keyed by atomic number.
    #[must_use]
    pub fn discard_by_number(&self) -> FxHashMap<u8, &Card> {
        index_by_number(&self.discard)
    }

    // === Turn lifecycle ===

    /// Shuffle the draw pile.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        self.deck.shuffle(rng);
    }

    /// Draw one card into the hand.
    ///
    /// When the draw pile is empty the discard pile silently becomes
    /// the new deck (restamped `PlayerDeck`, then shuffled) before
    /// drawing - the only mechanism by which a depleted pile recovers.
    /// Returns `false` only when deck and discard are both empty.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> bool {
        if self.deck.is_empty() {
            let pool = std::mem::take(&mut self.discard);
            self.deck = Deck::new(Zone::PlayerDeck, pool);
            self.deck.shuffle(rng);
        }
        match self.deck.draw() {
            Some(mut card) => {
                card.set_zone(Zone::Hand);
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Finish the turn.
    ///
    /// Marks `played` if the hand is non-empty (a non-empty hand at
    /// end-of-turn means the player had a turn to act in), discards the
    /// hand and table, draws a fresh hand, and resets the turn-scoped
    /// state: energy, the reversible-harvest set, and lab availability.
    /// The lab pile itself persists - it is the scored collection.
    ///
    /// Also used to deal the opening hand at game start: the hand is
    /// empty at that point, so `played` stays false and the mulligan
    /// remains available.
    pub fn end_turn(&mut self, rng: &mut GameRng) {
        if !self.hand.is_empty() {
            self.played = true;
        }

        let spent: Vec<Card> = self
            .hand
            .drain(..)
            .chain(std::mem::take(&mut self.table))
            .collect();
        for mut card in spent {
            card.set_zone(Zone::Discard);
            self.discard.push(card);
        }

        for _ in 0..self.hand_size {
            self.draw_one(rng);
        }

        self.last_synthesis = None;
        self.unused.clear();
        self.energy = 0;
    }

    /// Check mulligan eligibility: the opening hand is still intact
    /// (deck and hand both at exactly one hand's worth) and no action
    /// has been taken.
    #[must_use]
    pub fn can_mulligan(&self) -> bool {
        self.deck.len() == self.hand_size && self.hand.len() == self.hand_size && !self.played
    }

    /// Redraw the opening hand, if eligible. No state change otherwise.
    pub fn mulligan(&mut self, rng: &mut GameRng) -> bool {
        if self.can_mulligan() {
            self.end_turn(rng);
            true
        } else {
            false
        }
    }

    // === Economy ===

    /// Harvest a hand card for energy, or reverse a harvest from this
    /// turn.
    ///
    /// Forward: the card moves hand to table, its atomic number is
    /// added to `energy`, and it is remembered as reversible. Reverse:
    /// only for a card still in the reversible set - the move and the
    /// energy are undone exactly. Returns `false` (no state change)
    /// when the card is not where the operation needs it.
    pub fn harvest_card(&mut self, card: CardId, reverse: bool) -> bool {
        if reverse {
            let Some(unused_at) = self.unused.iter().position(|&id| id == card) else {
                return false;
            };
            let Some(table_at) = self.table.iter().position(|c| c.id() == card) else {
                return false;
            };
            self.unused.remove(unused_at);
            let mut card = self.table.remove(table_at);
            // harvested this turn, so its number is still in `energy`
            self.energy -= u32::from(card.number());
            card.set_zone(Zone::Hand);
            self.hand.push(card);
            true
        } else {
            let Some(hand_at) = self.hand.iter().position(|c| c.id() == card) else {
                return false;
            };
            let mut card = self.hand.remove(hand_at);
            self.energy += u32::from(card.number());
            self.unused.push(card.id());
            card.set_zone(Zone::Table);
            self.table.push(card);
            true
        }
    }

    /// Move a hand card into the lab, or undo this turn's synthesis.
    ///
    /// At most one card enters the lab per turn: forward is gated on no
    /// synthesis having happened yet, reverse only accepts the exact
    /// card recorded this turn.
    pub fn synthesize(&mut self, card: CardId, reverse: bool) -> bool {
        if reverse {
            if self.last_synthesis != Some(card) {
                return false;
            }
            let Some(lab_at) = self.lab.iter().position(|c| c.id() == card) else {
                return false;
            };
            let mut card = self.lab.remove(lab_at);
            card.set_zone(Zone::Hand);
            self.hand.push(card);
            self.last_synthesis = None;
            true
        } else {
            if self.last_synthesis.is_some() {
                return false;
            }
            let Some(hand_at) = self.hand.iter().position(|c| c.id() == card) else {
                return false;
            };
            let mut card = self.hand.remove(hand_at);
            card.set_zone(Zone::Lab);
            self.last_synthesis = Some(card.id());
            self.lab.push(card);
            true
        }
    }

    /// Buy a card with accumulated energy.
    ///
    /// Succeeds when `card.mass() <= energy`: energy drops to zero, all
    /// harvests this turn become committed (the reversible set is
    /// cleared - harvested cards are not returned), and the card lands
    /// on the table. On insufficient energy the card is handed back
    /// untouched and nothing changes.
    pub fn buy_card(&mut self, mut card: Card) -> Result<(), Card> {
        if card.mass() > self.energy {
            return Err(card);
        }
        self.energy = 0;
        self.unused.clear();
        card.set_zone(Zone::Table);
        self.table.push(card);
        Ok(())
    }

    // === Zone membership dispatch (drag-and-drop surface) ===

    /// Insert a card into one of the player-owned lists, stamping the
    /// zone. Non-player zones hand the card back.
    ///
    /// Together with [`Player::remove_from`] this is the input layer's
    /// optimistic drag surface: remove on grab, insert to commit or
    /// roll back depending on where the drop lands.
    pub fn insert_into(&mut self, zone: Zone, mut card: Card) -> Result<(), Card> {
        match self.zone_list_mut(zone) {
            Some(list) => {
                card.set_zone(zone);
                list.push(card);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Remove a specific minted card from one of the player-owned
    /// lists. `None` if the zone is not player-owned or the card is
    /// not there. The removed card keeps its old zone tag until it is
    /// inserted somewhere.
    pub fn remove_from(&mut self, zone: Zone, card: CardId) -> Option<Card> {
        let list = self.zone_list_mut(zone)?;
        let at = list.iter().position(|c| c.id() == card)?;
        Some(list.remove(at))
    }

    /// Tagged-variant dispatch from a zone to its backing list.
    fn zone_list_mut(&mut self, zone: Zone) -> Option<&mut Vec<Card>> {
        match zone {
            Zone::Hand => Some(&mut self.hand),
            Zone::Table => Some(&mut self.table),
            Zone::Lab => Some(&mut self.lab),
            Zone::Discard => Some(&mut self.discard),
            _ => None,
        }
    }
}

fn index_by_number<'a>(cards: &'a [Card]) -> FxHashMap<u8, &'a Card> {
    cards.iter().map(|c| (c.number(), c)).collect()
}
