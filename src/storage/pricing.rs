//! Pricing plan operations over the `pricing` document.
//!
//! Plans are a stable-order list like FAQs: creates append, order defaults
//! to count-in-category + 1.

use crate::error::AppError;
use crate::models::{CreatePricingPlan, PricingDocument, PricingPlan, UpdatePricingPlan};
use crate::storage::{self, JsonStore};

const DOC: &str = "pricing";

pub async fn get_document(store: &JsonStore) -> Result<PricingDocument, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn create_plan(
    store: &JsonStore,
    payload: CreatePricingPlan,
) -> Result<PricingPlan, AppError> {
    store
        .update(DOC, move |doc: &mut PricingDocument| {
            let category = payload.category.unwrap_or_else(|| "seo".to_string());
            let order = payload.order.unwrap_or_else(|| {
                doc.plans.iter().filter(|p| p.category == category).count() as u32 + 1
            });

            let plan = PricingPlan {
                id: storage::new_id(),
                name: payload.name,
                price: payload.price,
                period: payload.period.unwrap_or_else(|| "/month".to_string()),
                category,
                order,
                features: payload.features,
            };

            doc.plans.push(plan.clone());
            Ok(plan)
        })
        .await
}

pub async fn update_plan(
    store: &JsonStore,
    id: String,
    update: UpdatePricingPlan,
) -> Result<PricingPlan, AppError> {
    store
        .update(DOC, move |doc: &mut PricingDocument| {
            let plan = doc
                .plans
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound("Pricing plan not found".to_string()))?;
            update.apply(plan);
            Ok(plan.clone())
        })
        .await
}

pub async fn delete_plan(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update(DOC, move |doc: &mut PricingDocument| {
            let idx = doc
                .plans
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound("Pricing plan not found".to_string()))?;
            doc.plans.remove(idx);
            Ok(())
        })
        .await
}
