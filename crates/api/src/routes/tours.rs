//! Route definitions for the tour CRUD endpoints.
//!
//! Mounted at `/api` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::tours;
use crate::state::AppState;

/// Tour routes.
///
/// ```text
/// GET    /tours        -> list_tours (?search, ?destination)
/// POST   /tours        -> create_tour
/// GET    /tours/{id}   -> get_tour
/// PUT    /tours/{id}   -> update_tour
/// DELETE /tours/{id}   -> delete_tour
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tours", get(tours::list_tours).post(tours::create_tour))
        .route(
            "/tours/{id}",
            get(tours::get_tour)
                .put(tours::update_tour)
                .delete(tours::delete_tour),
        )
}
