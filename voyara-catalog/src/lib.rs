pub mod catalog;
pub mod query;

pub use catalog::{CatalogError, TripCatalog};
pub use query::{search, DurationBucket, SortKey, TripQuery};
