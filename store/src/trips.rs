use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{StoreError, StoreResult};

/// A persisted trip. Immutable after creation; the plan and packing list
/// are stored as the JSON values the generation call returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub city: String,
    pub days: u32,
    pub activities: Vec<String>,
    #[serde(rename = "mustVisit", skip_serializing_if = "Option::is_none")]
    pub must_visit: Option<Vec<String>>,
    #[serde(rename = "additionalRequests", skip_serializing_if = "Option::is_none")]
    pub additional_requests: Option<String>,
    #[serde(rename = "tripPlan")]
    pub trip_plan: Value,
    #[serde(rename = "packingList")]
    pub packing_list: Value,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields required to persist a trip.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub user_id: String,
    pub city: String,
    pub days: u32,
    pub activities: Vec<String>,
    pub must_visit: Option<Vec<String>>,
    pub additional_requests: Option<String>,
    pub trip_plan: Value,
    pub packing_list: Value,
}

/// Trait defining the interface for trip stores. Reads and deletes are
/// owner-scoped: an id that exists under a different owner reports NotFound.
#[async_trait]
pub trait TripStore: Send + Sync + Debug {
    /// Persist a trip, returning the stored record with its new id.
    async fn save_trip(&self, new_trip: NewTrip) -> StoreResult<TripRecord>;

    /// List a user's trips, newest first.
    async fn list_trips(&self, user_id: &str) -> StoreResult<Vec<TripRecord>>;

    /// Fetch one trip owned by the user.
    async fn get_trip(&self, user_id: &str, trip_id: &str) -> StoreResult<TripRecord>;

    /// Delete one trip owned by the user.
    async fn delete_trip(&self, user_id: &str, trip_id: &str) -> StoreResult<()>;
}

/// Type alias for Arc-wrapped TripStore trait objects
pub type TripStoreRef = Arc<dyn TripStore>;

/// In-memory implementation of TripStore
#[derive(Debug, Default)]
pub struct InMemoryTripStore {
    // Sequence disambiguates newest-first ordering when two saves land on
    // the same timestamp.
    trips: RwLock<HashMap<String, (u64, TripRecord)>>,
    seq: AtomicU64,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn save_trip(&self, new_trip: NewTrip) -> StoreResult<TripRecord> {
        let record = TripRecord {
            id: Uuid::new_v4().to_string(),
            user_id: new_trip.user_id,
            city: new_trip.city,
            days: new_trip.days,
            activities: new_trip.activities,
            must_visit: new_trip.must_visit,
            additional_requests: new_trip.additional_requests,
            trip_plan: new_trip.trip_plan,
            packing_list: new_trip.packing_list,
            created_at: Utc::now(),
        };

        let mut trips = self
            .trips
            .write()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        trips.insert(record.id.clone(), (seq, record.clone()));
        debug!(trip_id = %record.id, user_id = %record.user_id, "Saved trip");

        Ok(record)
    }

    async fn list_trips(&self, user_id: &str) -> StoreResult<Vec<TripRecord>> {
        let trips = self
            .trips
            .read()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut owned: Vec<(u64, TripRecord)> = trips
            .values()
            .filter(|(_, t)| t.user_id == user_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(owned.into_iter().map(|(_, t)| t).collect())
    }

    async fn get_trip(&self, user_id: &str, trip_id: &str) -> StoreResult<TripRecord> {
        let trips = self
            .trips
            .read()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        trips
            .get(trip_id)
            .filter(|(_, t)| t.user_id == user_id)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| StoreError::NotFound("Trip not found".to_string()))
    }

    async fn delete_trip(&self, user_id: &str, trip_id: &str) -> StoreResult<()> {
        let mut trips = self
            .trips
            .write()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let owned = trips
            .get(trip_id)
            .is_some_and(|(_, t)| t.user_id == user_id);
        if !owned {
            return Err(StoreError::NotFound("Trip not found".to_string()));
        }

        trips.remove(trip_id);
        debug!(trip_id, user_id, "Deleted trip");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_trip(user_id: &str, city: &str) -> NewTrip {
        NewTrip {
            user_id: user_id.to_string(),
            city: city.to_string(),
            days: 3,
            activities: vec!["Food".to_string()],
            must_visit: None,
            additional_requests: None,
            trip_plan: json!({"days": [], "locations": []}),
            packing_list: json!({"categories": []}),
        }
    }

    #[tokio::test]
    async fn save_then_list_is_owner_scoped() {
        let store = InMemoryTripStore::new();
        let saved = store.save_trip(new_trip("user-u", "Lisbon")).await.unwrap();

        let for_u = store.list_trips("user-u").await.unwrap();
        assert_eq!(for_u.len(), 1);
        assert_eq!(for_u[0].id, saved.id);

        let for_v = store.list_trips("user-v").await.unwrap();
        assert!(for_v.is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryTripStore::new();
        store.save_trip(new_trip("u", "Lisbon")).await.unwrap();
        store.save_trip(new_trip("u", "Porto")).await.unwrap();
        store.save_trip(new_trip("u", "Faro")).await.unwrap();

        let cities: Vec<String> = store
            .list_trips("u")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.city)
            .collect();
        assert_eq!(cities, vec!["Faro", "Porto", "Lisbon"]);
    }

    #[tokio::test]
    async fn delete_then_get_reports_not_found() {
        let store = InMemoryTripStore::new();
        let saved = store.save_trip(new_trip("u", "Lisbon")).await.unwrap();

        store.delete_trip("u", &saved.id).await.unwrap();
        let result = store.get_trip("u", &saved.id).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn other_owner_cannot_get_or_delete() {
        let store = InMemoryTripStore::new();
        let saved = store.save_trip(new_trip("u", "Lisbon")).await.unwrap();

        let result = store.get_trip("v", &saved.id).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        let result = store.delete_trip("v", &saved.id).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        // Still there for the real owner.
        assert!(store.get_trip("u", &saved.id).await.is_ok());
    }
}
