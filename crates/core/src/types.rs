use chrono::{DateTime, Utc};

/// Timestamp type used across models (UTC, RFC 3339 over the wire).
pub type Timestamp = DateTime<Utc>;

/// Generate a fresh tour id: a UUID v4 rendered as a plain string.
///
/// Ids are generated server-side at creation and stored in the `id`
/// field of the document, separate from the store's own `_id`.
pub fn new_tour_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC time, used for `created_at` / `updated_at`.
pub fn now() -> Timestamp {
    Utc::now()
}
