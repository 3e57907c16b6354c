pub mod health;
pub mod tours;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                 -> service banner
/// /tours            -> list_tours (?search, ?destination), create_tour
/// /tours/{id}       -> get_tour, update_tour, delete_tour
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::tours::root))
        .merge(tours::router())
}
