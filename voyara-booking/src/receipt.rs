use chrono::{DateTime, Utc};
use serde::Serialize;
use voyara_shared::Trip;

use crate::forms::PersonalInfo;

/// Confirmation payload handed to the external receipt/notification
/// collaborators. Carries no payment data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub booking_id: String,
    pub trip: Trip,
    pub traveler: PersonalInfo,
    pub travelers: u32,
    pub total_cost: f64,
    pub booked_at: DateTime<Utc>,
}
