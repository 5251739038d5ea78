//! Review operations over the `reviews` document.
//!
//! Reviews are a newest-first feed: creates prepend. Rating defaults to 5.

use crate::error::AppError;
use crate::models::{CreateReview, Review, ReviewsDocument, UpdateReview};
use crate::storage::{self, JsonStore};

const DOC: &str = "reviews";

pub async fn get_document(store: &JsonStore) -> Result<ReviewsDocument, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn create_review(
    store: &JsonStore,
    payload: CreateReview,
) -> Result<Review, AppError> {
    store
        .update(DOC, move |doc: &mut ReviewsDocument| {
            let review = Review {
                id: storage::new_id(),
                name: payload.name,
                company: payload.company,
                text: payload.text,
                rating: payload.rating.unwrap_or(5),
                featured: payload.featured.unwrap_or(false),
            };

            doc.reviews.insert(0, review.clone());
            Ok(review)
        })
        .await
}

pub async fn update_review(
    store: &JsonStore,
    id: String,
    update: UpdateReview,
) -> Result<Review, AppError> {
    store
        .update(DOC, move |doc: &mut ReviewsDocument| {
            let review = doc
                .reviews
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
            update.apply(review);
            Ok(review.clone())
        })
        .await
}

pub async fn delete_review(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update(DOC, move |doc: &mut ReviewsDocument| {
            let idx = doc
                .reviews
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
            doc.reviews.remove(idx);
            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_defaults_and_prepends() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.write(DOC, &ReviewsDocument::default()).await.unwrap();

        let first = create_review(
            &store,
            CreateReview {
                name: "Jamie".to_string(),
                text: "Great results".to_string(),
                company: String::new(),
                rating: None,
                featured: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(first.rating, 5);
        assert!(!first.featured);

        create_review(
            &store,
            CreateReview {
                name: "Alex".to_string(),
                text: "Traffic doubled".to_string(),
                company: "Acme".to_string(),
                rating: Some(4),
                featured: Some(true),
            },
        )
        .await
        .unwrap();

        let doc = get_document(&store).await.unwrap();
        assert_eq!(doc.reviews[0].name, "Alex");
        assert_eq!(doc.reviews[1].name, "Jamie");
    }

    #[tokio::test]
    async fn test_stats_survive_entity_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let doc = ReviewsDocument {
            stats: serde_json::json!({"average": 4.9, "total": 120}),
            reviews: vec![],
        };
        store.write(DOC, &doc).await.unwrap();

        create_review(
            &store,
            CreateReview {
                name: "Jamie".to_string(),
                text: "ok".to_string(),
                company: String::new(),
                rating: None,
                featured: None,
            },
        )
        .await
        .unwrap();

        let doc = get_document(&store).await.unwrap();
        assert_eq!(doc.stats["total"], 120);
    }
}
