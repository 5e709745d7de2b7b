use axum::{
    extract::{Path, State},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use voyara_booking::{
    AdvanceOutcome, BookingFormPatch, BookingWorkflow, FieldError, Receipt, RetreatOutcome,
};
use voyara_shared::Trip;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings/sessions", post(create_session))
        .route("/v1/bookings/sessions/{id}", get(get_session))
        .route("/v1/bookings/sessions/{id}/trip", put(set_trip))
        .route("/v1/bookings/sessions/{id}/form", patch(update_form))
        .route("/v1/bookings/sessions/{id}/travelers", put(set_travelers))
        .route("/v1/bookings/sessions/{id}/advance", post(advance))
        .route("/v1/bookings/sessions/{id}/retreat", post(retreat))
        .route("/v1/bookings/sessions/{id}/reset", post(reset))
        .route("/v1/bookings/sessions/{id}/receipt", get(receipt))
}

/// What the storefront needs to render a session: progress, cost, a trip
/// summary, and at most the last four card digits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    session_id: Uuid,
    current_step: u8,
    travelers: u32,
    total_cost: f64,
    confirmed: bool,
    booking_id: Option<String>,
    trip: Option<TripSummary>,
    card_last4: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TripSummary {
    id: u32,
    destination: String,
    country: String,
    price: f64,
    duration: String,
}

impl From<&Trip> for TripSummary {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            destination: trip.destination.clone(),
            country: trip.country.clone(),
            price: trip.price,
            duration: trip.duration.clone(),
        }
    }
}

fn session_view(id: Uuid, workflow: &BookingWorkflow) -> SessionView {
    let card = &workflow.form().payment_info.card_number;
    SessionView {
        session_id: id,
        current_step: workflow.current_step().number(),
        travelers: workflow.form().travelers,
        total_cost: workflow.total_cost(),
        confirmed: workflow.is_confirmed(),
        booking_id: workflow
            .is_confirmed()
            .then(|| workflow.booking_id().to_string()),
        trip: workflow.trip().map(TripSummary::from),
        card_last4: (!card.is_empty()).then(|| card.last4().to_string()),
    }
}

/// Run a closure against one session under the write lock, so every update is
/// an atomic read-modify-write and the cost invariant cannot tear.
fn with_session<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut BookingWorkflow) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let mut sessions = state
        .sessions
        .write()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("Session store lock poisoned")))?;
    let workflow = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Booking session not found: {}", id)))?;
    f(workflow)
}

async fn create_session(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let id = Uuid::new_v4();
    let workflow = BookingWorkflow::new();
    let view = session_view(id, &workflow);

    let mut sessions = state
        .sessions
        .write()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("Session store lock poisoned")))?;
    sessions.insert(id, workflow);
    tracing::info!("Booking session created: {}", id);

    Ok(Json(view))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    with_session(&state, id, |workflow| Ok(Json(session_view(id, workflow))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetTripRequest {
    trip_id: u32,
}

async fn set_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTripRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let trip = state
        .catalog
        .get(req.trip_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Trip not found: {}", req.trip_id)))?;

    with_session(&state, id, |workflow| {
        workflow.set_trip(trip);
        Ok(Json(session_view(id, workflow)))
    })
}

async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<BookingFormPatch>,
) -> Result<Json<SessionView>, ApiError> {
    with_session(&state, id, |workflow| {
        workflow.update_form(patch);
        Ok(Json(session_view(id, workflow)))
    })
}

#[derive(Debug, Deserialize)]
struct SetTravelersRequest {
    count: u32,
}

/// The traveler selector is bounded storefront policy; the workflow core only
/// enforces the minimum of one. Zero and out-of-range counts are rejected
/// here so the core never sees them.
async fn set_travelers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTravelersRequest>,
) -> Result<Json<SessionView>, ApiError> {
    if req.count == 0 {
        return Err(ApiError::Validation(vec![FieldError {
            field: "travelers",
            message: "At least one traveler is required",
        }]));
    }
    if req.count > state.booking_config.max_travelers {
        return Err(ApiError::Validation(vec![FieldError {
            field: "travelers",
            message: "Traveler count exceeds the storefront maximum",
        }]));
    }

    with_session(&state, id, |workflow| {
        workflow.set_travelers(req.count);
        Ok(Json(session_view(id, workflow)))
    })
}

async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    with_session(&state, id, |workflow| {
        match workflow.advance()? {
            AdvanceOutcome::Moved(step) => Ok(Json(json!({ "currentStep": step.number() }))),
            AdvanceOutcome::Completed(receipt) => Ok(Json(json!({
                "bookingId": receipt.booking_id,
                "receipt": receipt,
            }))),
            AdvanceOutcome::Rejected(errors) => Err(ApiError::Validation(errors)),
        }
    })
}

async fn retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    with_session(&state, id, |workflow| match workflow.retreat() {
        RetreatOutcome::Moved(step) => Ok(Json(json!({ "currentStep": step.number() }))),
        RetreatOutcome::ExitWorkflow => Ok(Json(json!({ "exit": true }))),
    })
}

async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    with_session(&state, id, |workflow| {
        workflow.reset();
        Ok(Json(session_view(id, workflow)))
    })
}

async fn receipt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Receipt>, ApiError> {
    with_session(&state, id, |workflow| Ok(Json(workflow.receipt()?)))
}
