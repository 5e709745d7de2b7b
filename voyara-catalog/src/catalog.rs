use std::path::Path;

use voyara_shared::Trip;

/// Immutable, ordered snapshot of the trip catalog. Loaded once at startup;
/// the feed order is preserved because it doubles as the tie-break for the
/// popularity sort.
#[derive(Debug, Clone)]
pub struct TripCatalog {
    trips: Vec<Trip>,
}

impl TripCatalog {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// Parse a catalog feed from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let trips: Vec<Trip> = serde_json::from_str(json)?;
        Ok(Self::new(trips))
    }

    /// Load the catalog feed from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} trips from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// First `limit` trips in feed order, used for the storefront home rail.
    pub fn featured(&self, limit: usize) -> &[Trip] {
        &self.trips[..limit.min(self.trips.len())]
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog feed: {0}")]
    Parse(#[from] serde_json::Error),
}
