//! Handlers for the tour CRUD endpoints.
//!
//! Every handler is a single stateless round trip against the store;
//! the only cross-request invariant is existence, surfaced as 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tours_core::error::CoreError;
use tours_db::models::tour::{CreateTour, Tour, UpdateTour};
use tours_db::repositories::TourRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for listing tours.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match against title, description,
    /// or destination.
    pub search: Option<String>,
    /// Case-insensitive substring match against destination alone.
    pub destination: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /tours
// ---------------------------------------------------------------------------

/// Create a new tour. The server assigns the id and both timestamps.
pub async fn create_tour(
    State(state): State<AppState>,
    Json(input): Json<CreateTour>,
) -> AppResult<impl IntoResponse> {
    let created = TourRepo::create(&state.db, input).await?;
    tracing::info!(id = %created.id, title = %created.title, "Tour created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /tours
// ---------------------------------------------------------------------------

/// List tours, optionally filtered by `search` and/or `destination`.
pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Tour>>> {
    let tours = TourRepo::list(
        &state.db,
        params.search.as_deref(),
        params.destination.as_deref(),
    )
    .await?;
    tracing::debug!(count = tours.len(), "Listed tours");
    Ok(Json(tours))
}

// ---------------------------------------------------------------------------
// GET /tours/{id}
// ---------------------------------------------------------------------------

/// Get a single tour by id.
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tour>> {
    let tour = TourRepo::find_by_id(&state.db, &id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Tour", id })?;
    Ok(Json(tour))
}

// ---------------------------------------------------------------------------
// PUT /tours/{id}
// ---------------------------------------------------------------------------

/// Partially update a tour. Absent fields are left unchanged;
/// `updated_at` always advances on success.
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTour>,
) -> AppResult<Json<Tour>> {
    let updated = TourRepo::update(&state.db, &id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Tour", id })?;
    tracing::info!(id = %updated.id, "Tour updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /tours/{id}
// ---------------------------------------------------------------------------

/// Hard-delete a tour by id. Absence is detected from the deletion
/// result (zero documents affected).
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if TourRepo::delete(&state.db, &id).await? {
        tracing::info!(%id, "Tour deleted");
        Ok(Json(MessageResponse::new("Tour deleted successfully")))
    } else {
        Err(CoreError::NotFound { entity: "Tour", id }.into())
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Service banner at the API root.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Travel Agency Management API"))
}
