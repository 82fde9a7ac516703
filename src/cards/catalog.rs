//! Element catalog - the static data cards are minted from.
//!
//! The catalog is parsed from a JSON file shaped `{"elements": [...]}`.
//! The data source is injected at construction time (a path, a string,
//! or the bundled default under `data/`); nothing reads a global path.
//!
//! Loading is the one place where a real fault can occur: a record with
//! missing fields or unreadable data is a `CatalogError`, fatal at
//! startup. Everything after load is policy, not faults.

use std::path::Path;

use serde::Deserialize;

/// Highest atomic number the catalog will accept.
pub const ELEMENTS_AMOUNT: u8 = 118;

const BUNDLED_DATA: &str = include_str!("../../data/elements.json");

/// One element as read from the data file.
///
/// `name`, `symbol`, `number`, `atomic_mass`, `category`, and `shells`
/// are required; a record missing any of them fails the whole load.
/// `xpos`/`ypos` (group/period columns for the table viewer) are
/// optional.
#[derive(Clone, Debug, Deserialize)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    pub number: u8,
    pub atomic_mass: f64,
    pub category: String,
    pub shells: Vec<u8>,
    #[serde(default)]
    pub xpos: u16,
    #[serde(default)]
    pub ypos: u16,
}

#[derive(Deserialize)]
struct ElementFile {
    elements: Vec<ElementRecord>,
}

/// Errors from catalog construction.
#[derive(Debug)]
pub enum CatalogError {
    /// The data source could not be read.
    Io(std::io::Error),
    /// The data was not valid element JSON (malformed syntax or a
    /// record with missing/ill-typed fields).
    Parse(serde_json::Error),
    /// The data held no elements in 1..=118.
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read element data: {}", err),
            CatalogError::Parse(err) => write!(f, "failed to parse element data: {}", err),
            CatalogError::Empty => write!(f, "element data holds no usable elements"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Parse(err) => Some(err),
            CatalogError::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// The parsed, validated element table.
///
/// Records are filtered to atomic numbers 1..=118 and sorted ascending.
#[derive(Clone, Debug)]
pub struct CardCatalog {
    elements: Vec<ElementRecord>,
}

impl CardCatalog {
    /// Parse a catalog from element JSON.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let file: ElementFile = serde_json::from_str(data)?;

        let mut elements: Vec<ElementRecord> = file
            .elements
            .into_iter()
            .filter(|e| (1..=ELEMENTS_AMOUNT).contains(&e.number))
            .collect();
        elements.sort_by_key(|e| e.number);

        if elements.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { elements })
    }

    /// Load a catalog from a JSON file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// The catalog bundled with the crate (all 118 elements).
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_DATA).expect("bundled element data is valid")
    }

    /// Number of elements in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the catalog is empty. Always false for a constructed
    /// catalog, kept for the usual pairing with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by atomic number.
    #[must_use]
    pub fn get(&self, number: u8) -> Option<&ElementRecord> {
        self.elements
            .binary_search_by_key(&number, |e| e.number)
            .ok()
            .map(|i| &self.elements[i])
    }

    /// Iterate over all records in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements.iter()
    }

    /// Iterate over the records whose numbers fall in `range`, inclusive.
    pub fn in_range(
        &self,
        range: std::ops::RangeInclusive<u8>,
    ) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .iter()
            .filter(move |e| range.contains(&e.number))
    }
}
