//! Driven port for user record storage.
//!
//! Adapters persist [`NewUser`] records, assign identifiers, and report
//! failures as [`UserPersistenceError`]. The domain service decides how those
//! failures surface to callers.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record and return it with its assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Every stored record. Callers must not rely on the order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Remove the record with `id`; `false` when no such record existed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
