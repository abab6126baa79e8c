//! Driving port for mutating user records.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Domain use-case port for creating and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a validated record and return it with its identifier.
    ///
    /// # Errors
    ///
    /// Returns an internal error when storage fails.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Delete the user with `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no such user exists, or an internal
    /// error when storage fails.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
