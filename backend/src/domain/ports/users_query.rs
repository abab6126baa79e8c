//! Driving port for reading user records.
//!
//! Inbound adapters list users through this port without touching
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    ///
    /// # Errors
    ///
    /// Returns an internal error when storage is unavailable.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
