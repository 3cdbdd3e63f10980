use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{StoreError, StoreResult};

/// A registered user. The password is only ever stored hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Trait defining the interface for user stores
#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    /// Create a user; fails with Conflict when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> StoreResult<UserRecord>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>>;
}

/// Type alias for Arc-wrapped UserStore trait objects
pub type UserStoreRef = Arc<dyn UserStore>;

/// In-memory implementation of UserStore
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<UserRecord> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::Conflict("Email already exists".to_string()));
        }

        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };

        users.insert(user.id.clone(), user.clone());
        debug!(user_id = %user.id, "Created user");

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.get(id).cloned())
    }
}
