use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{StoreError, StoreResult};

/// A user's latest quiz result, stored as the profile JSON the scorer
/// produced. Upserts overwrite: only the newest result is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub profile: Value,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Trait defining the interface for personality-result stores
#[async_trait]
pub trait PersonalityStore: Send + Sync + Debug {
    /// Store (or replace) the user's quiz result.
    async fn upsert_result(&self, user_id: &str, profile: Value) -> StoreResult<PersonalityRecord>;

    /// Fetch the user's stored result, if any.
    async fn get_result(&self, user_id: &str) -> StoreResult<Option<PersonalityRecord>>;
}

/// Type alias for Arc-wrapped PersonalityStore trait objects
pub type PersonalityStoreRef = Arc<dyn PersonalityStore>;

/// In-memory implementation of PersonalityStore
#[derive(Debug, Default)]
pub struct InMemoryPersonalityStore {
    results: RwLock<HashMap<String, PersonalityRecord>>,
}

impl InMemoryPersonalityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonalityStore for InMemoryPersonalityStore {
    async fn upsert_result(&self, user_id: &str, profile: Value) -> StoreResult<PersonalityRecord> {
        let record = PersonalityRecord {
            user_id: user_id.to_string(),
            profile,
            created_at: Utc::now(),
        };

        let mut results = self
            .results
            .write()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        results.insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    async fn get_result(&self, user_id: &str) -> StoreResult<Option<PersonalityRecord>> {
        let results = self
            .results
            .read()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(results.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn upsert_replaces_previous_result() {
        let store = InMemoryPersonalityStore::new();

        store
            .upsert_result("u", json!({"fullType": "ECAS"}))
            .await
            .unwrap();
        store
            .upsert_result("u", json!({"fullType": "IFNP"}))
            .await
            .unwrap();

        let stored = store.get_result("u").await.unwrap().unwrap();
        assert_eq!(stored.profile, json!({"fullType": "IFNP"}));
    }

    #[tokio::test]
    async fn missing_result_is_none() {
        let store = InMemoryPersonalityStore::new();
        assert!(store.get_result("nobody").await.unwrap().is_none());
    }
}
