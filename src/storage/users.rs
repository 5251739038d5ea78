//! User operations over the `users` document.
//!
//! Users are immutable at runtime; the only write path is seeding an
//! admin account into an empty document at startup. Login looks up the
//! first record matching an email (no uniqueness constraint beyond that).

use crate::auth;
use crate::error::AppError;
use crate::models::{User, UsersDocument};
use crate::storage::{self, JsonStore};

const DOC: &str = "users";

/// Find a user by email (first match wins).
pub async fn find_by_email(store: &JsonStore, email: &str) -> Result<Option<User>, AppError> {
    let doc: UsersDocument = store.read_or_default(DOC).await?;
    Ok(doc.users.into_iter().find(|u| u.email == email))
}

/// Seed an admin user if the users document is empty or missing.
///
/// Returns true if a user was created.
pub async fn seed_admin(
    store: &JsonStore,
    email: &str,
    password: &str,
    name: &str,
) -> Result<bool, AppError> {
    let doc: UsersDocument = store.read_or_default(DOC).await?;
    if !doc.users.is_empty() {
        return Ok(false);
    }

    let user = User {
        id: storage::new_id(),
        email: email.to_string(),
        password: auth::hash_password(password)?,
        name: name.to_string(),
        role: "admin".to_string(),
    };
    store.write(DOC, &UsersDocument { users: vec![user] }).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_then_find() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let created = seed_admin(&store, "admin@example.com", "secret", "Admin")
            .await
            .unwrap();
        assert!(created);

        let user = find_by_email(&store, "admin@example.com")
            .await
            .unwrap()
            .expect("seeded user should exist");
        assert_eq!(user.role, "admin");
        assert_ne!(user.password, "secret");
        assert!(auth::verify_password("secret", &user.password).unwrap());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(seed_admin(&store, "a@b.com", "pw", "A").await.unwrap());
        assert!(!seed_admin(&store, "c@d.com", "pw", "C").await.unwrap());

        // First seed wins
        assert!(find_by_email(&store, "c@d.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(find_by_email(&store, "ghost@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
