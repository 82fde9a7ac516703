//! Cards - element-derived values with a mutable zone tag.
//!
//! A `Card` is minted once by the [`CardFactory`](super::CardFactory)
//! and then only ever moves between zones; it is never destroyed. The
//! element fields are immutable after construction, the zone tag is
//! restamped by the container operations that move the card.
//!
//! ## Equality
//!
//! `Card` deliberately implements neither `PartialEq` nor `Ord`. The
//! source material conflated value equality with identity depending on
//! context, so the two comparisons are named functions instead:
//!
//! - [`Card::same_instance`]: the two references are the same minted
//!   card (by `CardId`).
//! - [`Card::structurally_equal`]: every element field and the zone tag
//!   match by value, ignoring the mint id.
//!
//! Ordering is always by atomic number, via `sort_by_key(|c| c.number())`.

use smallvec::SmallVec;

use crate::core::Zone;

/// Unique identifier for a minted card instance.
///
/// Allocated by the `CardFactory`, unique for the process lifetime.
/// Two structurally identical cards (the general market mints fresh
/// copies every refill) always have distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single element card.
#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,
    name: String,
    symbol: String,
    number: u8,
    mass: u32,
    category: String,
    shells: SmallVec<[u8; 8]>,
    zone: Zone,
}

impl Card {
    /// Create a card.
    ///
    /// Normalizes `name`, `symbol`, and `category` to title case and
    /// rounds the atomic mass to the nearest integer.
    #[must_use]
    pub fn new(
        id: CardId,
        name: &str,
        symbol: &str,
        number: u8,
        atomic_mass: f64,
        category: &str,
        shells: &[u8],
        zone: Zone,
    ) -> Self {
        Self {
            id,
            name: title_case(name),
            symbol: title_case(symbol),
            number,
            mass: atomic_mass.round() as u32,
            category: title_case(category),
            shells: SmallVec::from_slice(shells),
            zone,
        }
    }

    /// This card's mint id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Element name, title-cased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Atomic number (1..=118). Also the card's harvest value.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Atomic mass rounded to the nearest integer. The card's buy cost.
    #[must_use]
    pub fn mass(&self) -> u32 {
        self.mass
    }

    /// Categorical classification, title-cased.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Electrons per shell, innermost first.
    #[must_use]
    pub fn shells(&self) -> &[u8] {
        &self.shells
    }

    /// The zone this card currently occupies.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Restamp the zone tag. Crate-internal: only the container
    /// operations that actually move the card may call this.
    pub(crate) fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    /// Check whether `other` is the very same minted card.
    #[must_use]
    pub fn same_instance(&self, other: &Card) -> bool {
        self.id == other.id
    }

    /// Check field-wise equality, zone included, mint id ignored.
    #[must_use]
    pub fn structurally_equal(&self, other: &Card) -> bool {
        self.name == other.name
            && self.symbol == other.symbol
            && self.number == other.number
            && self.mass == other.mass
            && self.category == other.category
            && self.shells == other.shells
            && self.zone == other.zone
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) [{}]",
            self.number, self.symbol, self.mass, self.category
        )
    }
}

/// Title-case a string the way Python's `str.title` does: uppercase
/// every letter that follows a non-letter, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(ch);
            boundary = true;
        }
    }
    out
}
