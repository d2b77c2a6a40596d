use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use charter_booking::{BookingRequest, CharterBooking};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/charter/bookings", post(create_booking).get(list_bookings))
        .route("/v1/charter/bookings/{id}", get(get_booking))
        .route("/v1/charter/bookings/{id}/confirm", post(confirm_booking))
        .route("/v1/charter/bookings/{id}/cancel", post(cancel_booking))
}

/// POST /v1/charter/bookings
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<CharterBooking>), AppError> {
    // Fresh catalog snapshot for every booking
    let flights = state.flight_repo.list_flights().await.map_err(AppError::repository)?;

    let booking = state.bookings.write().await.create_booking(&flights, req)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /v1/charter/bookings?email=
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Json<Vec<CharterBooking>> {
    let manager = state.bookings.read().await;
    Json(manager.list_for_contact(&query.email).into_iter().cloned().collect())
}

/// GET /v1/charter/bookings/{id}
async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<CharterBooking>, AppError> {
    state
        .bookings
        .read()
        .await
        .get(&booking_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Booking not found: {}", booking_id)))
}

/// POST /v1/charter/bookings/{id}/confirm
async fn confirm_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<CharterBooking>, AppError> {
    let booking = state.bookings.write().await.confirm(&booking_id)?;
    Ok(Json(booking))
}

/// POST /v1/charter/bookings/{id}/cancel
async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<CharterBooking>, AppError> {
    let booking = state.bookings.write().await.cancel(&booking_id)?;
    Ok(Json(booking))
}
