use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use charter_core::{resolve, schedule, CharterBookingWish, CharterFlight, ResolveOutcome, Route};
use charter_shared::models::events::WishResolvedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FlightsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DatesQuery {
    pub from: String,
    pub to: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct OperatingDatesResponse {
    pub from: String,
    pub to: String,
    pub dates: Vec<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/charter/flights", get(list_flights))
        .route("/v1/charter/flights/{id}", get(get_flight))
        .route("/v1/charter/routes", get(list_routes))
        .route("/v1/charter/dates", get(operating_dates))
        .route("/v1/charter/resolve", post(resolve_wish))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/charter/flights
async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<Vec<CharterFlight>>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(AppError::repository)?;

    let filtered = flights
        .into_iter()
        .filter(|f| query.from.as_deref().map_or(true, |from| f.from == from.trim()))
        .filter(|f| query.to.as_deref().map_or(true, |to| f.to == to.trim()))
        .collect();

    Ok(Json(filtered))
}

/// GET /v1/charter/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
) -> Result<Json<CharterFlight>, AppError> {
    state
        .flight_repo
        .get_flight(flight_id)
        .await
        .map_err(AppError::repository)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Flight not found: {}", flight_id)))
}

/// GET /v1/charter/routes
async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(AppError::repository)?;
    Ok(Json(schedule::routes(&flights)))
}

/// GET /v1/charter/dates
/// Days in the window on which the route is flown
async fn operating_dates(
    State(state): State<AppState>,
    Query(query): Query<DatesQuery>,
) -> Result<Json<OperatingDatesResponse>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(AppError::repository)?;
    let dates = schedule::operating_dates(&flights, &query.from, &query.to, query.start, query.end)?;

    Ok(Json(OperatingDatesResponse {
        from: query.from,
        to: query.to,
        dates,
    }))
}

/// POST /v1/charter/resolve
/// Both outcomes are answered with 200; failures carry a reason code
async fn resolve_wish(
    State(state): State<AppState>,
    Json(wish): Json<CharterBookingWish>,
) -> Result<Json<ResolveOutcome>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(AppError::repository)?;
    let result = resolve(&flights, &wish);

    let event = WishResolvedEvent {
        from: wish.from.trim().to_string(),
        to: wish.to.trim().to_string(),
        flight_id: result.as_ref().ok().map(|f| f.id),
        reason: result.as_ref().err().map(|r| r.code().to_string()),
        timestamp: Utc::now().timestamp(),
    };
    tracing::info!(?event, "Charter wish checked");

    Ok(Json(ResolveOutcome::from(result)))
}
