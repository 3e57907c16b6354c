use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the database handle shares the client's
/// connection pool, acquired once at process startup.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the tour database.
    pub db: tours_db::Database,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
