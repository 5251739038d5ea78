//! Homepage singleton operations over the `homepage` document.
//!
//! The homepage is free-form copy edited as one object. PUT deep-merges
//! the patch: nested objects merge recursively, everything else (arrays
//! included) is replaced wholesale.

use crate::error::AppError;
use crate::storage::JsonStore;
use serde_json::Value;

const DOC: &str = "homepage";

pub async fn get_document(store: &JsonStore) -> Result<Value, AppError> {
    Ok(store.read(DOC).await?)
}

pub async fn merge_document(store: &JsonStore, patch: Value) -> Result<Value, AppError> {
    store
        .update(DOC, move |doc: &mut Value| {
            deep_merge(doc, patch);
            Ok(doc.clone())
        })
        .await
}

fn deep_merge(target: &mut Value, patch: Value) {
    match patch {
        Value::Object(patch_map) => {
            if let Value::Object(target_map) = target {
                for (key, value) in patch_map {
                    match target_map.get_mut(&key) {
                        Some(slot) => deep_merge(slot, value),
                        None => {
                            target_map.insert(key, value);
                        }
                    }
                }
            } else {
                *target = Value::Object(patch_map);
            }
        }
        other => *target = other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_nested_objects() {
        let mut target = json!({
            "hero": {"title": "Old", "subtitle": "Keep"},
            "footer": {"text": "Keep"}
        });
        deep_merge(&mut target, json!({"hero": {"title": "New"}}));

        assert_eq!(target["hero"]["title"], "New");
        assert_eq!(target["hero"]["subtitle"], "Keep");
        assert_eq!(target["footer"]["text"], "Keep");
    }

    #[test]
    fn test_deep_merge_replaces_arrays_wholesale() {
        let mut target = json!({"services": ["a", "b", "c"]});
        deep_merge(&mut target, json!({"services": ["d"]}));
        assert_eq!(target["services"], json!(["d"]));
    }

    #[test]
    fn test_deep_merge_adds_new_keys() {
        let mut target = json!({"hero": {}});
        deep_merge(&mut target, json!({"cta": {"label": "Call us"}}));
        assert_eq!(target["cta"]["label"], "Call us");
    }

    #[tokio::test]
    async fn test_merge_document_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .write(DOC, &json!({"hero": {"title": "Old"}}))
            .await
            .unwrap();

        let merged = merge_document(&store, json!({"hero": {"title": "New"}}))
            .await
            .unwrap();
        assert_eq!(merged["hero"]["title"], "New");

        let loaded = get_document(&store).await.unwrap();
        assert_eq!(loaded["hero"]["title"], "New");
    }
}
