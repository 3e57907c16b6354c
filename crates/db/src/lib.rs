//! MongoDB access for the tour service: client setup, models, and
//! repositories.

use mongodb::bson::doc;

pub mod models;
pub mod repositories;

pub use mongodb::{Client, Database};

/// Create a MongoDB client from a connection string.
///
/// The client manages its own connection pool and is created once at
/// process startup; connections are established lazily on first use.
pub async fn connect(connection_string: &str) -> Result<Client, mongodb::error::Error> {
    Client::with_uri_str(connection_string).await
}

/// Verify the store is reachable with a `ping` command.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
