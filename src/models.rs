//! Request, response, and document models for the API.
//!
//! All models use serde. Entities are camelCase on the wire because the
//! JSON documents are shared with the JavaScript admin UI.
//!
//! Updates go through explicit per-entity structs of optional fields,
//! merged field-by-field. Unknown keys in a payload are ignored rather
//! than spread into the stored record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Auth Models
// ============================================================================

/// Login request. Fields are optional so missing input maps to a 400
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticated identity returned by login and /me.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// User record as stored in the users document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// bcrypt hash, never returned to clients
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersDocument {
    #[serde(default)]
    pub users: Vec<User>,
}

// ============================================================================
// Blog Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    pub author: String,
    pub published_at: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDocument {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub read_time: Option<String>,
    pub featured: Option<bool>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub read_time: Option<String>,
    pub featured: Option<bool>,
    pub image: Option<String>,
}

impl UpdateBlogPost {
    /// Merge provided fields over an existing post.
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(v) = self.title {
            post.title = v;
        }
        if let Some(v) = self.slug {
            post.slug = v;
        }
        if let Some(v) = self.excerpt {
            post.excerpt = v;
        }
        if let Some(v) = self.content {
            post.content = v;
        }
        if let Some(v) = self.category {
            post.category = v;
        }
        if let Some(v) = self.author {
            post.author = v;
        }
        if let Some(v) = self.published_at {
            post.published_at = v;
        }
        if let Some(v) = self.read_time {
            post.read_time = v;
        }
        if let Some(v) = self.featured {
            post.featured = v;
        }
        if let Some(v) = self.image {
            post.image = Some(v);
        }
    }
}

// ============================================================================
// Case Study Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudiesDocument {
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseStudy {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub results: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseStudy {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    /// Replaced wholesale, not element-merged
    pub results: Option<Vec<String>>,
}

impl UpdateCaseStudy {
    pub fn apply(self, study: &mut CaseStudy) {
        if let Some(v) = self.title {
            study.title = v;
        }
        if let Some(v) = self.slug {
            study.slug = v;
        }
        if let Some(v) = self.client {
            study.client = v;
        }
        if let Some(v) = self.industry {
            study.industry = v;
        }
        if let Some(v) = self.summary {
            study.summary = v;
        }
        if let Some(v) = self.content {
            study.content = v;
        }
        if let Some(v) = self.results {
            study.results = v;
        }
    }
}

// ============================================================================
// FAQ Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqDocument {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub order: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFaq {
    pub id: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub order: Option<u32>,
}

impl UpdateFaq {
    pub fn apply(self, faq: &mut Faq) {
        if let Some(v) = self.question {
            faq.question = v;
        }
        if let Some(v) = self.answer {
            faq.answer = v;
        }
        if let Some(v) = self.category {
            faq.category = v;
        }
        if let Some(v) = self.order {
            faq.order = v;
        }
    }
}

// ============================================================================
// Pricing Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    pub category: String,
    pub order: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingDocument {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePricingPlan {
    pub name: String,
    pub price: String,
    pub period: Option<String>,
    pub category: Option<String>,
    pub order: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePricingPlan {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub period: Option<String>,
    pub category: Option<String>,
    pub order: Option<u32>,
    /// Replaced wholesale, not element-merged
    pub features: Option<Vec<String>>,
}

impl UpdatePricingPlan {
    pub fn apply(self, plan: &mut PricingPlan) {
        if let Some(v) = self.name {
            plan.name = v;
        }
        if let Some(v) = self.price {
            plan.price = v;
        }
        if let Some(v) = self.period {
            plan.period = v;
        }
        if let Some(v) = self.category {
            plan.category = v;
        }
        if let Some(v) = self.order {
            plan.order = v;
        }
        if let Some(v) = self.features {
            plan.features = v;
        }
    }
}

// ============================================================================
// Review Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewsDocument {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub stats: Value,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub company: String,
    pub rating: Option<u8>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub id: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub text: Option<String>,
    pub rating: Option<u8>,
    pub featured: Option<bool>,
}

impl UpdateReview {
    pub fn apply(self, review: &mut Review) {
        if let Some(v) = self.name {
            review.name = v;
        }
        if let Some(v) = self.company {
            review.company = v;
        }
        if let Some(v) = self.text {
            review.text = v;
        }
        if let Some(v) = self.rating {
            review.rating = v;
        }
        if let Some(v) = self.featured {
            review.featured = v;
        }
    }
}

// ============================================================================
// Inquiry Models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiriesDocument {
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
}

/// Contact form submission. Optional fields so missing input maps to a 400.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiry {
    pub id: Option<String>,
    pub status: Option<String>,
}

impl UpdateInquiry {
    pub fn apply(self, inquiry: &mut Inquiry) {
        if let Some(v) = self.status {
            inquiry.status = v;
        }
    }
}
