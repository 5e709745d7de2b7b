use serde::{Deserialize, Serialize};

/// Trip categories offered by the storefront
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripCategory {
    Beach,
    Cultural,
    Adventure,
    Luxury,
}

impl TripCategory {
    /// Parse a category token from the query boundary. Unknown tokens map to None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Beach" => Some(TripCategory::Beach),
            "Cultural" => Some(TripCategory::Cultural),
            "Adventure" => Some(TripCategory::Adventure),
            "Luxury" => Some(TripCategory::Luxury),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TripCategory::Beach => "Beach",
            TripCategory::Cultural => "Cultural",
            TripCategory::Adventure => "Adventure",
            TripCategory::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for TripCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bookable travel package, as supplied by the catalog feed.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: u32,
    pub destination: String,
    pub country: String,
    pub category: TripCategory,
    /// Per-person price
    pub price: f64,
    /// Human-readable duration, e.g. "7 days". The leading integer is the
    /// semantic day count.
    pub duration: String,
    pub rating: f64,
    pub reviews: u32,
    pub description: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<String>,
    pub included: Vec<String>,
    pub images: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Trip {
    /// Day count extracted from the duration string. The feed only guarantees
    /// "day count as a leading integer"; anything without one parses as 0 so
    /// filtering and sorting never fail on a malformed record.
    pub fn duration_days(&self) -> u32 {
        let digits: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Composite popularity score, the default search ranking.
    pub fn popularity_score(&self) -> f64 {
        self.rating * self.reviews as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_with_duration(duration: &str) -> Trip {
        Trip {
            id: 1,
            destination: "Santorini".to_string(),
            country: "Greece".to_string(),
            category: TripCategory::Beach,
            price: 1299.0,
            duration: duration.to_string(),
            rating: 4.8,
            reviews: 324,
            description: String::new(),
            highlights: vec![],
            itinerary: vec![],
            included: vec![],
            images: vec!["santorini-1.jpg".to_string()],
            min_price: 999.0,
            max_price: 1599.0,
        }
    }

    #[test]
    fn test_duration_days_leading_integer() {
        assert_eq!(trip_with_duration("7 days").duration_days(), 7);
        assert_eq!(trip_with_duration("10 days").duration_days(), 10);
        assert_eq!(trip_with_duration("  5 days").duration_days(), 5);
    }

    #[test]
    fn test_duration_days_malformed_is_zero() {
        assert_eq!(trip_with_duration("a week").duration_days(), 0);
        assert_eq!(trip_with_duration("").duration_days(), 0);
    }

    #[test]
    fn test_popularity_score() {
        let trip = trip_with_duration("7 days");
        assert!((trip.popularity_score() - 4.8 * 324.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trip_deserialization_camel_case() {
        let json = r#"
            {
                "id": 3,
                "destination": "Kyoto",
                "country": "Japan",
                "category": "Cultural",
                "price": 1599,
                "duration": "8 days",
                "rating": 4.9,
                "reviews": 512,
                "description": "Temples and tea houses",
                "highlights": ["Fushimi Inari"],
                "itinerary": ["Day 1: Arrival"],
                "included": ["Hotel"],
                "images": ["kyoto-1.jpg"],
                "minPrice": 1299,
                "maxPrice": 1899
            }
        "#;
        let trip: Trip = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(trip.category, TripCategory::Cultural);
        assert_eq!(trip.min_price, 1299.0);
        assert_eq!(trip.duration_days(), 8);
    }
}
