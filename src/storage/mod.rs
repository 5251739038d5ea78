//! Flat-file JSON storage layer.
//!
//! One JSON document per content domain, stored as `{name}.json` under the
//! data directory. Every mutation is a full read-modify-write cycle guarded
//! by a per-document async mutex, and writes go through a temp file plus
//! rename so a crash never leaves a half-written document behind.

pub mod blog;
pub mod case_studies;
pub mod faqs;
pub mod homepage;
pub mod inquiries;
pub mod pricing;
pub mod reviews;
pub mod users;

use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate a fresh entity identifier.
pub fn new_id() -> String {
    nanoid::nanoid!(12)
}

/// Slugify a title: lowercase, whitespace runs become single hyphens,
/// anything outside `[a-z0-9-]` is stripped.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Make a slug unique within its collection by appending a numeric suffix
/// (`title`, `title-2`, `title-3`, ...).
pub fn unique_slug(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// JSON-document-per-domain store.
///
/// Cloning is cheap; clones share the same per-document lock table.
#[derive(Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
    // Single writer per document name. Readers are unguarded: whole-file
    // reads observe either the old file or the renamed-in replacement.
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonStore {
            data_dir: data_dir.into(),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    async fn document_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Load and parse a named document fully into memory.
    ///
    /// An absent or malformed file is a storage error; GET endpoints
    /// surface that as a 500.
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let bytes = tokio::fs::read(self.path(name)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`read`](Self::read), but an absent file yields the empty
    /// default shape (used by stores that can legitimately start empty).
    pub async fn read_or_default<T>(&self, name: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        match tokio::fs::read(self.path(name)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Serialize and persist a whole document, atomically replacing the
    /// previous file via temp file + rename.
    pub async fn write<T: Serialize>(&self, name: &str, doc: &T) -> Result<(), StoreError> {
        let path = self.path(name);
        let tmp = self.data_dir.join(format!("{}.json.tmp", name));
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Read-modify-write a document under its single-writer lock.
    ///
    /// If the closure fails, nothing is written and the file on disk is
    /// untouched.
    pub async fn update<T, R, F>(&self, name: &str, f: F) -> Result<R, AppError>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut T) -> Result<R, AppError>,
    {
        let lock = self.document_lock(name).await;
        let _guard = lock.lock().await;

        let mut doc: T = self.read(name).await?;
        let out = f(&mut doc)?;
        self.write(name, &doc).await?;
        Ok(out)
    }

    /// [`update`](Self::update) variant that starts from the empty default
    /// shape when the document does not exist yet.
    pub async fn update_or_default<T, R, F>(&self, name: &str, f: F) -> Result<R, AppError>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> Result<R, AppError>,
    {
        let lock = self.document_lock(name).await;
        let _guard = lock.lock().await;

        let mut doc: T = self.read_or_default(name).await?;
        let out = f(&mut doc)?;
        self.write(name, &doc).await?;
        Ok(out)
    }
}
