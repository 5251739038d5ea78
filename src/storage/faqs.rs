//! FAQ operations over the `faqs` document.
//!
//! FAQs are a stable-order list: creates append. The order field is a
//! per-category display rank, defaulted to count-in-category + 1, not
//! enforced contiguous.

use crate::error::AppError;
use crate::models::{CreateFaq, Faq, FaqDocument, UpdateFaq};
use crate::storage::{self, JsonStore};

const DOC: &str = "faqs";

pub async fn get_document(store: &JsonStore) -> Result<FaqDocument, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn create_faq(store: &JsonStore, payload: CreateFaq) -> Result<Faq, AppError> {
    store
        .update(DOC, move |doc: &mut FaqDocument| {
            let category = payload.category.unwrap_or_else(|| "General".to_string());
            let order = payload.order.unwrap_or_else(|| {
                doc.faqs.iter().filter(|f| f.category == category).count() as u32 + 1
            });

            let faq = Faq {
                id: storage::new_id(),
                question: payload.question,
                answer: payload.answer,
                category,
                order,
            };

            doc.faqs.push(faq.clone());
            Ok(faq)
        })
        .await
}

pub async fn update_faq(
    store: &JsonStore,
    id: String,
    update: UpdateFaq,
) -> Result<Faq, AppError> {
    store
        .update(DOC, move |doc: &mut FaqDocument| {
            let faq = doc
                .faqs
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))?;
            update.apply(faq);
            Ok(faq.clone())
        })
        .await
}

pub async fn delete_faq(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update(DOC, move |doc: &mut FaqDocument| {
            let idx = doc
                .faqs
                .iter()
                .position(|f| f.id == id)
                .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))?;
            doc.faqs.remove(idx);
            Ok(())
        })
        .await
}
