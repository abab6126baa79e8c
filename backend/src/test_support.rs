//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`; only
//! compiled for tests or with the `test-support` feature.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug)]
struct Store {
    next_id: i64,
    rows: BTreeMap<UserId, NewUser>,
}

/// In-memory [`UserRepository`] mirroring the PostgreSQL adapter.
///
/// Identifiers are assigned from 1 upwards and never reused, like a serial
/// column. A failing repository reports every call as a connection error.
///
/// # Examples
/// ```
/// use mobility_api::domain::ports::UserRepository;
/// use mobility_api::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repository = InMemoryUserRepository::new();
/// assert!(repository.list_all().await.expect("list").is_empty());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
    failure: Option<String>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
            failure: None,
        }
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose every operation fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn store(&self) -> Result<std::sync::MutexGuard<'_, Store>, UserPersistenceError> {
        if let Some(message) = &self.failure {
            return Err(UserPersistenceError::connection(message.clone()));
        }
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.store()?;
        let id = UserId::new(store.next_id)
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        store.next_id += 1;
        store.rows.insert(id, user.clone());
        Ok(User::new(id, user.clone()))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store
            .rows
            .iter()
            .map(|(id, record)| User::new(*id, record.clone()))
            .collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut store = self.store()?;
        Ok(store.rows.remove(&id).is_some())
    }
}
