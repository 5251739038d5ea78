//! API route handlers.

pub mod auth;
pub mod blog;
pub mod case_studies;
pub mod faqs;
pub mod homepage;
pub mod inquiries;
pub mod pricing;
pub mod reviews;

use crate::auth::middleware::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

/// Query parameters for DELETE endpoints. The id is optional so a missing
/// value maps to an explicit 400 instead of a query rejection.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Public contact form
        .route("/api/contact", post(inquiries::contact))
        // Admin content endpoints (session cookie required)
        .route(
            "/api/admin/blog",
            get(blog::get_document)
                .post(blog::create_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route(
            "/api/admin/case-studies",
            get(case_studies::get_document)
                .post(case_studies::create_study)
                .put(case_studies::update_study)
                .delete(case_studies::delete_study),
        )
        .route(
            "/api/admin/faqs",
            get(faqs::get_document)
                .post(faqs::create_faq)
                .put(faqs::update_faq)
                .delete(faqs::delete_faq),
        )
        .route(
            "/api/admin/pricing",
            get(pricing::get_document)
                .post(pricing::create_plan)
                .put(pricing::update_plan)
                .delete(pricing::delete_plan),
        )
        .route(
            "/api/admin/reviews",
            get(reviews::get_document)
                .post(reviews::create_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/api/admin/homepage",
            get(homepage::get_document).put(homepage::update_document),
        )
        .route(
            "/api/admin/inquiries",
            get(inquiries::get_document)
                .put(inquiries::update_inquiry)
                .delete(inquiries::delete_inquiry),
        )
}
