//! Tour document model and DTOs.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use tours_core::types::{new_tour_id, now, Timestamp};

/// A document from the `tours` collection.
///
/// `id` is a server-generated UUID stored as a plain field; the
/// driver's `_id` is left to the store and ignored on read.
///
/// Known latent gaps, kept intentionally: `available_spots` is not
/// constrained against `max_capacity`, and `end_date` is not checked
/// against `start_date`. Both are stored exactly as supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub description: String,
    pub destination: String,
    /// Duration in days.
    pub duration: i32,
    pub price: f64,
    pub max_capacity: i32,
    pub available_spots: i32,
    /// Calendar dates as text, e.g. `2026-09-01`.
    pub start_date: String,
    pub end_date: String,
    pub image_url: String,
    /// Open schema-less map: transportation, accommodation,
    /// activities, arbitrary nesting.
    pub package_details: Document,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tour. All fields are required; the server
/// assigns `id` and both timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTour {
    pub title: String,
    pub description: String,
    pub destination: String,
    pub duration: i32,
    pub price: f64,
    pub max_capacity: i32,
    pub available_spots: i32,
    pub start_date: String,
    pub end_date: String,
    pub image_url: String,
    pub package_details: Document,
}

/// DTO for partially updating a tour. Only non-`None` fields are
/// applied; `skip_serializing_if` keeps absent fields out of the
/// `$set` document entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTour {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_spots: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_details: Option<Document>,
}

impl Tour {
    /// Build a full tour record from a create request: fresh id, both
    /// timestamps set to the current time.
    pub fn from_create(input: CreateTour) -> Self {
        let created = now();
        Self {
            id: new_tour_id(),
            title: input.title,
            description: input.description,
            destination: input.destination,
            duration: input.duration,
            price: input.price,
            max_capacity: input.max_capacity,
            available_spots: input.available_spots,
            start_date: input.start_date,
            end_date: input.end_date,
            image_url: input.image_url,
            package_details: input.package_details,
            created_at: created,
            updated_at: created,
        }
    }
}
