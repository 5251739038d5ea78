//! Case study operations over the `case-studies` document.
//!
//! Same shape as blog posts: newest-first feed, slug generated from the
//! title and de-duplicated with a numeric suffix.

use crate::error::AppError;
use crate::models::{CaseStudiesDocument, CaseStudy, CreateCaseStudy, UpdateCaseStudy};
use crate::storage::{self, JsonStore};

const DOC: &str = "case-studies";

pub async fn get_document(store: &JsonStore) -> Result<CaseStudiesDocument, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn create_study(
    store: &JsonStore,
    payload: CreateCaseStudy,
) -> Result<CaseStudy, AppError> {
    store
        .update(DOC, move |doc: &mut CaseStudiesDocument| {
            let base = payload
                .slug
                .clone()
                .unwrap_or_else(|| storage::slugify(&payload.title));
            let slug = storage::unique_slug(&base, |s| {
                doc.case_studies.iter().any(|c| c.slug == s)
            });

            let study = CaseStudy {
                id: storage::new_id(),
                title: payload.title,
                slug,
                client: payload.client,
                industry: payload.industry,
                summary: payload.summary,
                content: payload.content,
                results: payload.results,
            };

            doc.case_studies.insert(0, study.clone());
            Ok(study)
        })
        .await
}

pub async fn update_study(
    store: &JsonStore,
    id: String,
    update: UpdateCaseStudy,
) -> Result<CaseStudy, AppError> {
    store
        .update(DOC, move |doc: &mut CaseStudiesDocument| {
            let study = doc
                .case_studies
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| AppError::NotFound("Case study not found".to_string()))?;
            update.apply(study);
            Ok(study.clone())
        })
        .await
}

pub async fn delete_study(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update(DOC, move |doc: &mut CaseStudiesDocument| {
            let idx = doc
                .case_studies
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| AppError::NotFound("Case study not found".to_string()))?;
            doc.case_studies.remove(idx);
            Ok(())
        })
        .await
}
