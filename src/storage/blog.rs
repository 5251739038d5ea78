//! Blog post operations over the `blog` document.
//!
//! Posts are a newest-first feed: creates prepend. Slugs are generated
//! from the title when omitted and de-duplicated with a numeric suffix.

use crate::error::AppError;
use crate::models::{BlogDocument, BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::storage::{self, JsonStore};

const DOC: &str = "blog";

pub async fn get_document(store: &JsonStore) -> Result<BlogDocument, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn create_post(
    store: &JsonStore,
    payload: CreateBlogPost,
) -> Result<BlogPost, AppError> {
    store
        .update(DOC, move |doc: &mut BlogDocument| {
            let base = payload
                .slug
                .clone()
                .unwrap_or_else(|| storage::slugify(&payload.title));
            let slug =
                storage::unique_slug(&base, |s| doc.posts.iter().any(|p| p.slug == s));

            let post = BlogPost {
                id: storage::new_id(),
                title: payload.title,
                slug,
                excerpt: payload.excerpt,
                content: payload.content,
                category: payload.category.unwrap_or_else(|| "SEO".to_string()),
                author: payload
                    .author
                    .unwrap_or_else(|| "Apis Digitech Team".to_string()),
                published_at: payload
                    .published_at
                    .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string()),
                read_time: payload.read_time.unwrap_or_else(|| "5 min read".to_string()),
                featured: payload.featured.unwrap_or(false),
                image: payload.image,
            };

            doc.posts.insert(0, post.clone());
            Ok(post)
        })
        .await
}

pub async fn update_post(
    store: &JsonStore,
    id: String,
    update: UpdateBlogPost,
) -> Result<BlogPost, AppError> {
    store
        .update(DOC, move |doc: &mut BlogDocument| {
            let post = doc
                .posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
            update.apply(post);
            Ok(post.clone())
        })
        .await
}

pub async fn delete_post(store: &JsonStore, id: String) -> Result<(), AppError> {
    store
        .update(DOC, move |doc: &mut BlogDocument| {
            let idx = doc
                .posts
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
            doc.posts.remove(idx);
            Ok(())
        })
        .await
}
