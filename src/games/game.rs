//! Game orchestration: roster, turn rotation, supply decks, markets.
//!
//! The `Game` owns the roster, the one RNG, the card factory, two
//! finite supply decks, and three markets. It drives turn progression
//! by delegating to the current player and refills the markets after
//! every consuming action (an end of turn, a successful buy).

use crate::cards::{CardCatalog, CardFactory, CardId};
use crate::core::{GameConfig, GameRng, Zone};
use crate::decks::Deck;
use crate::games::Market;
use crate::players::Player;
use crate::view::{BoardView, MarketView, PlayerView};

/// Game lifecycle status. `NotStarted -> Started` is one-way; a game
/// instance is never restarted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Started,
}

/// A running (or configurable, pre-start) game.
pub struct Game {
    config: GameConfig,
    factory: CardFactory,
    rng: GameRng,
    names: Vec<String>,
    players: Vec<Player>,
    status: GameStatus,
    current: usize,
    light_deck: Deck,
    heavy_deck: Deck,
    light_market: Market,
    heavy_market: Market,
    general_market: Market,
}

impl Game {
    /// Create a game over a catalog with an empty roster.
    ///
    /// The catalog is the injected element data source; `seed` fixes
    /// every random outcome of the game.
    #[must_use]
    pub fn new(config: GameConfig, catalog: CardCatalog, seed: u64) -> Self {
        let general_capacity = catalog
            .in_range(config.general_market_range.clone())
            .count();
        Self {
            light_market: Market::new(Zone::LightMarket, config.light_market_limit),
            heavy_market: Market::new(Zone::HeavyMarket, config.heavy_market_limit),
            general_market: Market::new(Zone::GeneralMarket, general_capacity),
            light_deck: Deck::new(Zone::LightDeck, Vec::new()),
            heavy_deck: Deck::new(Zone::HeavyDeck, Vec::new()),
            factory: CardFactory::new(catalog),
            rng: GameRng::new(seed),
            names: Vec::new(),
            players: Vec::new(),
            status: GameStatus::NotStarted,
            current: 0,
            config,
        }
    }

    // === Roster (pre-start only) ===

    /// Add a name to the roster. Rejected once the game has started.
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        if self.status == GameStatus::Started {
            return false;
        }
        self.names.push(name.into());
        true
    }

    /// Remove the first roster entry matching `name`. Rejected once
    /// the game has started or when the name is unknown.
    pub fn remove_player(&mut self, name: &str) -> bool {
        if self.status == GameStatus::Started {
            return false;
        }
        match self.names.iter().position(|n| n == name) {
            Some(at) => {
                self.names.remove(at);
                true
            }
            None => false,
        }
    }

    // === Lifecycle ===

    /// Start the game.
    ///
    /// Rejected when already started or the roster is below
    /// `min_players`. Otherwise: creates one player per name with a
    /// shuffled starting deck and an opening hand, builds and shuffles
    /// the two finite supply decks, fills all markets, and picks a
    /// uniformly random starting player.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Started || self.names.len() < self.config.min_players {
            return false;
        }

        self.players = Vec::with_capacity(self.names.len());
        for at in 0..self.names.len() {
            let cards = self
                .factory
                .generate_cards(self.config.starting_deck_range.clone());
            let mut player = Player::new(self.names[at].clone(), cards, self.config.hand_size);
            player.shuffle_deck(&mut self.rng);
            // the opening deal; the hand is empty so `played` stays false
            player.end_turn(&mut self.rng);
            self.players.push(player);
        }

        let mut light = Vec::new();
        for _ in 0..self.config.light_copies {
            light.extend(self.factory.generate_cards(self.config.light_range.clone()));
        }
        self.light_deck = Deck::new(Zone::LightDeck, light);
        self.light_deck.shuffle(&mut self.rng);

        let mut heavy = Vec::new();
        for _ in 0..self.config.heavy_copies {
            heavy.extend(self.factory.generate_cards(self.config.heavy_range.clone()));
        }
        self.heavy_deck = Deck::new(Zone::HeavyDeck, heavy);
        self.heavy_deck.shuffle(&mut self.rng);

        self.fill_all_markets();

        self.current = self.rng.gen_range_usize(0..self.players.len());
        self.status = GameStatus::Started;
        true
    }

    /// End the current player's turn.
    ///
    /// Delegates to the player, rotates to the **previous** roster
    /// index (the fixed rotation direction, wrapping), then refills the
    /// markets. Rejected before start.
    pub fn end_turn(&mut self) -> bool {
        if self.status != GameStatus::Started {
            return false;
        }
        self.players[self.current].end_turn(&mut self.rng);
        self.current = (self.current + self.players.len() - 1) % self.players.len();
        self.fill_all_markets();
        true
    }

    /// Mulligan for the current player (delegates; needs the game RNG).
    pub fn mulligan(&mut self) -> bool {
        if self.status != GameStatus::Started {
            return false;
        }
        self.players[self.current].mulligan(&mut self.rng)
    }

    /// Buy a card off any market for the current player.
    ///
    /// The affordability check and energy spend live in
    /// [`Player::buy_card`]; on rejection the card returns to its exact
    /// display slot and nothing changes. A successful buy refills all
    /// markets.
    pub fn buy_card(&mut self, card: CardId) -> bool {
        if self.status != GameStatus::Started {
            return false;
        }

        let (zone, at) = if let Some(at) = self.light_market.position(card) {
            (Zone::LightMarket, at)
        } else if let Some(at) = self.heavy_market.position(card) {
            (Zone::HeavyMarket, at)
        } else if let Some(at) = self.general_market.position(card) {
            (Zone::GeneralMarket, at)
        } else {
            return false;
        };

        let taken = self.market_mut(zone).remove_at(at);
        match self.players[self.current].buy_card(taken) {
            Ok(()) => {
                self.fill_all_markets();
                true
            }
            Err(card) => {
                self.market_mut(zone).insert_at(at, card);
                false
            }
        }
    }

    /// Refill every market: regenerate the general display from freshly
    /// minted cards, then top up light and heavy from their finite
    /// decks. Called after every consuming action.
    fn fill_all_markets(&mut self) {
        let fresh = self
            .factory
            .generate_cards(self.config.general_market_range.clone());
        self.general_market.regenerate(fresh);
        self.light_market.fill_from(&mut self.light_deck);
        self.heavy_market.fill_from(&mut self.heavy_deck);
    }

    fn market_mut(&mut self, zone: Zone) -> &mut Market {
        match zone {
            Zone::LightMarket => &mut self.light_market,
            Zone::HeavyMarket => &mut self.heavy_market,
            Zone::GeneralMarket => &mut self.general_market,
            _ => unreachable!("not a market zone: {zone}"),
        }
    }

    // === Queries ===

    /// Game lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The pre-start roster.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The players, in roster order. Empty before start.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is. `None` before start.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.status == GameStatus::Started {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Mutable access to the current player - the input layer's command
    /// surface for harvest, synthesize, and drag interactions.
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        if self.status == GameStatus::Started {
            self.players.get_mut(self.current)
        } else {
            None
        }
    }

    /// The light market display.
    #[must_use]
    pub fn light_market(&self) -> &Market {
        &self.light_market
    }

    /// The heavy market display.
    #[must_use]
    pub fn heavy_market(&self) -> &Market {
        &self.heavy_market
    }

    /// The general market display.
    #[must_use]
    pub fn general_market(&self) -> &Market {
        &self.general_market
    }

    /// Cards left in the light supply deck.
    #[must_use]
    pub fn light_deck_size(&self) -> usize {
        self.light_deck.len()
    }

    /// Cards left in the heavy supply deck.
    #[must_use]
    pub fn heavy_deck_size(&self) -> usize {
        self.heavy_deck.len()
    }

    /// Snapshot the board for the rendering layer. `None` before start.
    #[must_use]
    pub fn render(&self) -> Option<BoardView> {
        let current = self.current_player()?;
        Some(BoardView {
            current_player: current.name().to_string(),
            players: self.players.iter().map(PlayerView::new).collect(),
            general_market: MarketView::new(&self.general_market),
            light_market: MarketView::new(&self.light_market),
            heavy_market: MarketView::new(&self.heavy_market),
            light_deck_size: self.light_deck.len(),
            heavy_deck_size: self.heavy_deck.len(),
        })
    }
}
