//! Repository for the `tours` collection.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::{Collection, Database};

use crate::models::tour::{CreateTour, Tour, UpdateTour};

const COLLECTION: &str = "tours";

/// Upper bound on the number of documents a list query returns.
const LIST_LIMIT: i64 = 1000;

/// Provides CRUD operations for tours. Every operation is a single
/// round trip against the shared database handle; no state is held
/// between calls.
pub struct TourRepo;

impl TourRepo {
    fn collection(db: &Database) -> Collection<Tour> {
        db.collection(COLLECTION)
    }

    /// Insert a new tour, returning the stored record.
    pub async fn create(db: &Database, input: CreateTour) -> Result<Tour, mongodb::error::Error> {
        let tour = Tour::from_create(input);
        Self::collection(db).insert_one(&tour).await?;
        Ok(tour)
    }

    /// List tours matching the optional filters, in store-default
    /// order, up to [`LIST_LIMIT`] records.
    ///
    /// `search` matches case-insensitively as a substring against
    /// title, description, or destination; `destination` narrows to
    /// the destination field alone. Both combine with AND.
    pub async fn list(
        db: &Database,
        search: Option<&str>,
        destination: Option<&str>,
    ) -> Result<Vec<Tour>, mongodb::error::Error> {
        let filter = build_list_filter(search, destination);
        let cursor = Self::collection(db).find(filter).limit(LIST_LIMIT).await?;
        cursor.try_collect().await
    }

    /// Find a tour by its server-generated id.
    pub async fn find_by_id(
        db: &Database,
        id: &str,
    ) -> Result<Option<Tour>, mongodb::error::Error> {
        Self::collection(db).find_one(doc! { "id": id }).await
    }

    /// Apply a partial update, returning the updated record, or
    /// `None` when no tour with that id exists.
    ///
    /// Only fields present in `input` are written; `updated_at` is
    /// always refreshed, even for an empty partial.
    pub async fn update(
        db: &Database,
        id: &str,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, mongodb::error::Error> {
        let collection = Self::collection(db);

        if collection.find_one(doc! { "id": id }).await?.is_none() {
            return Ok(None);
        }

        let set = build_update_document(input, Utc::now())?;
        collection
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;

        collection.find_one(doc! { "id": id }).await
    }

    /// Delete a tour by id. Returns `true` when a document was
    /// removed; a zero deleted count signals absence.
    pub async fn delete(db: &Database, id: &str) -> Result<bool, mongodb::error::Error> {
        let result = Self::collection(db).delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

/// Case-insensitive substring match for a single field.
///
/// The input is passed to `$regex` verbatim (no escaping), matching
/// the store-side semantics the API has always had.
fn contains_ci(value: &str) -> Document {
    doc! { "$regex": value, "$options": "i" }
}

fn build_list_filter(search: Option<&str>, destination: Option<&str>) -> Document {
    let mut filter = Document::new();

    if let Some(search) = search {
        filter.insert(
            "$or",
            vec![
                doc! { "title": contains_ci(search) },
                doc! { "description": contains_ci(search) },
                doc! { "destination": contains_ci(search) },
            ],
        );
    }

    if let Some(destination) = destination {
        filter.insert("destination", contains_ci(destination));
    }

    filter
}

/// Build the `$set` document for a partial update: exactly the
/// supplied fields plus a fresh `updated_at`.
fn build_update_document(
    input: &UpdateTour,
    updated_at: DateTime<Utc>,
) -> Result<Document, mongodb::error::Error> {
    let mut set = bson::to_document(input)?;
    set.insert("updated_at", bson::to_bson(&updated_at)?);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tour::UpdateTour;

    #[test]
    fn empty_filters_produce_empty_query() {
        let filter = build_list_filter(None, None);
        assert!(filter.is_empty());
    }

    #[test]
    fn search_filter_ors_across_three_fields() {
        let filter = build_list_filter(Some("bali"), None);

        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);

        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "bali");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        assert!(!filter.contains_key("destination"));
    }

    #[test]
    fn destination_filter_targets_destination_only() {
        let filter = build_list_filter(None, Some("Indonesia"));

        let destination = filter.get_document("destination").unwrap();
        assert_eq!(destination.get_str("$regex").unwrap(), "Indonesia");
        assert_eq!(destination.get_str("$options").unwrap(), "i");

        assert!(!filter.contains_key("$or"));
    }

    #[test]
    fn combined_filters_are_anded() {
        let filter = build_list_filter(Some("beach"), Some("Bali"));

        assert!(filter.contains_key("$or"));
        assert_eq!(
            filter
                .get_document("destination")
                .unwrap()
                .get_str("$regex")
                .unwrap(),
            "Bali"
        );
    }

    #[test]
    fn update_document_contains_only_supplied_fields() {
        let input = UpdateTour {
            price: Some(1399.0),
            ..UpdateTour::default()
        };

        let set = build_update_document(&input, chrono::Utc::now()).unwrap();

        assert_eq!(set.get_f64("price").unwrap(), 1399.0);
        assert!(set.contains_key("updated_at"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_partial_still_refreshes_updated_at() {
        let set = build_update_document(&UpdateTour::default(), chrono::Utc::now()).unwrap();

        assert!(set.contains_key("updated_at"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn nested_package_details_survive_serialization() {
        let input = UpdateTour {
            package_details: Some(doc! {
                "transportation": { "flight": "included" },
                "activities": ["surfing", "temples"],
            }),
            ..UpdateTour::default()
        };

        let set = build_update_document(&input, chrono::Utc::now()).unwrap();

        let details = set.get_document("package_details").unwrap();
        assert_eq!(
            details
                .get_document("transportation")
                .unwrap()
                .get_str("flight")
                .unwrap(),
            "included"
        );
        assert_eq!(details.get_array("activities").unwrap().len(), 2);
    }
}
