use std::collections::HashMap;

use voyara_shared::{Trip, TripCategory};

use crate::catalog::TripCatalog;

/// Default price window shown by the storefront slider.
pub const DEFAULT_PRICE_RANGE: [f64; 2] = [0.0, 2000.0];

/// Coarse duration filter offered by the search form. The "3-5" and "5-7"
/// buckets deliberately overlap: a 5-day trip satisfies both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    ThreeToFive,
    FiveToSeven,
    SevenPlus,
}

impl DurationBucket {
    /// Parse a bucket token from the query boundary. Unknown tokens map to
    /// None, which filters nothing.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "3-5" => Some(DurationBucket::ThreeToFive),
            "5-7" => Some(DurationBucket::FiveToSeven),
            "7+" => Some(DurationBucket::SevenPlus),
            _ => None,
        }
    }

    pub fn matches(&self, days: u32) -> bool {
        match self {
            DurationBucket::ThreeToFive => (3..=5).contains(&days),
            DurationBucket::FiveToSeven => (5..=7).contains(&days),
            DurationBucket::SevenPlus => days >= 7,
        }
    }
}

/// Price bucket tokens from the search form, mapped to inclusive ranges.
/// "1500+" is capped at the slider maximum.
pub fn parse_price_bucket(token: &str) -> Option<[f64; 2]> {
    match token {
        "0-500" => Some([0.0, 500.0]),
        "500-1000" => Some([500.0, 1000.0]),
        "1000-1500" => Some([1000.0, 1500.0]),
        "1500+" => Some([1500.0, 2000.0]),
        _ => None,
    }
}

/// Result ordering for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Descending rating x reviews, ties broken by catalog order.
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Rating,
    Duration,
}

impl SortKey {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "popular" => Some(SortKey::Popular),
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "rating" => Some(SortKey::Rating),
            "duration" => Some(SortKey::Duration),
            _ => None,
        }
    }
}

/// One search against the catalog: free-text location, price window,
/// optional duration bucket and category, and a sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub location: String,
    pub price_range: [f64; 2],
    pub duration: Option<DurationBucket>,
    pub category: Option<TripCategory>,
    pub sort: SortKey,
}

impl Default for TripQuery {
    fn default() -> Self {
        Self {
            location: String::new(),
            price_range: DEFAULT_PRICE_RANGE,
            duration: None,
            category: None,
            sort: SortKey::default(),
        }
    }
}

impl TripQuery {
    /// Build a query from the string key/value parameters of a search URL.
    /// Recognized keys: `destination`, `duration`, `price`, `category`,
    /// `sort`. Unknown keys and unrecognized values fall back to defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut query = Self::default();

        if let Some(destination) = params.get("destination") {
            query.location = destination.clone();
        }
        if let Some(token) = params.get("duration") {
            query.duration = DurationBucket::parse(token);
        }
        if let Some(token) = params.get("price") {
            if let Some(range) = parse_price_bucket(token) {
                query.price_range = range;
            }
        }
        if let Some(token) = params.get("category") {
            query.category = TripCategory::parse(token);
        }
        if let Some(token) = params.get("sort") {
            if let Some(sort) = SortKey::parse(token) {
                query.sort = sort;
            }
        }

        query
    }

    fn matches(&self, trip: &Trip) -> bool {
        let matches_location = self.location.is_empty() || {
            let needle = self.location.to_lowercase();
            trip.destination.to_lowercase().contains(&needle)
                || trip.country.to_lowercase().contains(&needle)
        };

        let matches_price =
            trip.price >= self.price_range[0] && trip.price <= self.price_range[1];

        let matches_duration = self
            .duration
            .map_or(true, |bucket| bucket.matches(trip.duration_days()));

        let matches_category = self
            .category
            .map_or(true, |category| trip.category == category);

        matches_location && matches_price && matches_duration && matches_category
    }
}

/// Run a query against a catalog snapshot. Filters are AND-combined, then the
/// surviving trips are stably sorted, so equal keys keep their catalog order.
/// The snapshot itself is never mutated.
pub fn search(catalog: &TripCatalog, query: &TripQuery) -> Vec<Trip> {
    let mut results: Vec<Trip> = catalog
        .trips()
        .iter()
        .filter(|trip| query.matches(trip))
        .cloned()
        .collect();

    match query.sort {
        SortKey::PriceLow => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Duration => results.sort_by_key(|t| t.duration_days()),
        SortKey::Popular => {
            results.sort_by(|a, b| b.popularity_score().total_cmp(&a.popularity_score()))
        }
    }

    results
}
