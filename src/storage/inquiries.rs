//! Contact inquiry operations over the `inquiries` document.
//!
//! The inquiries store can legitimately start empty: a missing file reads
//! as `{ "inquiries": [] }`. New inquiries are prepended.

use crate::error::AppError;
use crate::models::{InquiriesDocument, Inquiry, UpdateInquiry};
use crate::storage::{self, JsonStore};

const DOC: &str = "inquiries";

pub async fn get_document(store: &JsonStore) -> Result<InquiriesDocument, AppError> {
    Ok(store.read_or_default(DOC).await?)
}

pub async fn create_inquiry(
    store: &JsonStore,
    name: String,
    email: String,
    message: String,
) -> Result<Inquiry, AppError> {
    store
        .update_or_default(DOC, move |doc: &mut InquiriesDocument| {
            let inquiry = Inquiry {
                id: storage::new_id(),
                name,
                email,
                message,
                status: "new".to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            };

            doc.inquiries.insert(0, inquiry.clone());
            Ok(inquiry)
        })
        .await
}

pub async fn update_inquiry(
    store: &JsonStore,
    id: String,
    update: UpdateInquiry,
) -> Result<Inquiry, AppError> {
    store
        .update_or_default(DOC, move |doc: &mut InquiriesDocument| {
            let inquiry = doc
                .inquiries
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;
            update.apply(inquiry);
            Ok(inquiry.clone())
        })
        .await
}

pub async fn delete_inquiry(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update_or_default(DOC, move |doc: &mut InquiriesDocument| {
            let idx = doc
                .inquiries
                .iter()
                .position(|i| i.id == id)
                .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;
            doc.inquiries.remove(idx);
            Ok(())
        })
        .await
}
