use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use voyara_shared::Trip;

use crate::forms::{BookingForm, BookingFormPatch};
use crate::receipt::Receipt;
use crate::validate::{validate_step, FieldError};

/// Booking id prefix; confirmed ids look like `VYR1767225600000A1B2C`.
const BOOKING_ID_PREFIX: &str = "VYR";

/// Checkout steps. Progression is gated by validation; retreat is free.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStep {
    PersonalInfo,
    Payment,
    Review,
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::PersonalInfo
    }
}

impl BookingStep {
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::PersonalInfo => 1,
            BookingStep::Payment => 2,
            BookingStep::Review => 3,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            BookingStep::PersonalInfo => Some(BookingStep::Payment),
            BookingStep::Payment => Some(BookingStep::Review),
            BookingStep::Review => None,
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            BookingStep::PersonalInfo => None,
            BookingStep::Payment => Some(BookingStep::PersonalInfo),
            BookingStep::Review => Some(BookingStep::Payment),
        }
    }
}

/// Result of an `advance` attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Validation passed, the workflow moved to the next step.
    Moved(BookingStep),
    /// Validation passed on the final step; the booking is confirmed.
    Completed(Receipt),
    /// Validation failed; nothing changed.
    Rejected(Vec<FieldError>),
}

/// Result of a `retreat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    Moved(BookingStep),
    /// Already at the first step; the caller should leave the checkout flow.
    ExitWorkflow,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BookingError {
    /// The form layer let the customer reach checkout without a trip.
    #[error("No trip selected for this booking session")]
    NoTripSelected,

    /// A second confirmation would silently orphan the first booking id, so
    /// repeat confirms are rejected until an explicit reset.
    #[error("Booking already confirmed: {0}")]
    AlreadyConfirmed(String),

    #[error("Booking has not been confirmed")]
    NotConfirmed,
}

/// State of one in-progress booking session. Owned by exactly one session and
/// mutated only through the methods below; `total_cost` is recomputed on every
/// mutation that can affect it and never diverges from
/// `trip.price * travelers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingWorkflow {
    trip: Option<Trip>,
    form: BookingForm,
    current_step: BookingStep,
    total_cost: f64,
    booking_id: String,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn current_step(&self) -> BookingStep {
        self.current_step
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    pub fn is_confirmed(&self) -> bool {
        !self.booking_id.is_empty()
    }

    /// Select the trip for this session. Replacing an earlier selection is
    /// allowed and recomputes the cost.
    pub fn set_trip(&mut self, trip: Trip) {
        self.trip = Some(trip);
        self.recompute_total();
    }

    /// Merge a partial form update. Travelers and cost are untouched.
    pub fn update_form(&mut self, patch: BookingFormPatch) {
        self.form.apply(patch);
    }

    /// Set the traveler count, clamped to at least one. Non-numeric input is
    /// rejected at the boundary, not here.
    pub fn set_travelers(&mut self, count: u32) {
        self.form.travelers = count.max(1);
        self.recompute_total();
    }

    /// Field errors for a step, without mutating anything.
    pub fn validate_step(&self, step: BookingStep) -> Vec<FieldError> {
        validate_step(step, &self.form)
    }

    /// Validate the current step and move forward. On the final step a valid
    /// form confirms the booking and yields the receipt. Errors out only on
    /// precondition violations (no trip, repeat confirm); validation failures
    /// are ordinary outcomes.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, BookingError> {
        let errors = self.validate_step(self.current_step);
        if !errors.is_empty() {
            return Ok(AdvanceOutcome::Rejected(errors));
        }

        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                Ok(AdvanceOutcome::Moved(next))
            }
            None => {
                self.confirm()?;
                Ok(AdvanceOutcome::Completed(self.receipt()?))
            }
        }
    }

    /// Step back, or signal the caller to leave the flow from step 1.
    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.current_step.previous() {
            Some(previous) => {
                self.current_step = previous;
                RetreatOutcome::Moved(previous)
            }
            None => RetreatOutcome::ExitWorkflow,
        }
    }

    /// Assign the booking id. Requires a selected trip; a second confirm
    /// without reset is an error rather than a silent re-issue.
    pub fn confirm(&mut self) -> Result<&str, BookingError> {
        if self.trip.is_none() {
            return Err(BookingError::NoTripSelected);
        }
        if self.is_confirmed() {
            return Err(BookingError::AlreadyConfirmed(self.booking_id.clone()));
        }

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(5)
            .map(char::from)
            .collect::<String>()
            .to_uppercase();
        self.booking_id = format!(
            "{}{}{}",
            BOOKING_ID_PREFIX,
            Utc::now().timestamp_millis(),
            suffix
        );

        tracing::info!(
            "Booking confirmed: {} (total {:.2})",
            self.booking_id,
            self.total_cost
        );
        Ok(&self.booking_id)
    }

    /// Confirmation payload for receipt generation. The booking date is
    /// stamped when the receipt is produced.
    pub fn receipt(&self) -> Result<Receipt, BookingError> {
        if !self.is_confirmed() {
            return Err(BookingError::NotConfirmed);
        }
        let trip = self.trip.clone().ok_or(BookingError::NoTripSelected)?;
        Ok(Receipt {
            booking_id: self.booking_id.clone(),
            trip,
            traveler: self.form.personal_info.clone(),
            travelers: self.form.travelers,
            total_cost: self.total_cost,
            booked_at: Utc::now(),
        })
    }

    /// Discard everything and return to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn recompute_total(&mut self) {
        self.total_cost = match &self.trip {
            Some(trip) => trip.price * f64::from(self.form.travelers),
            None => 0.0,
        };
    }
}
