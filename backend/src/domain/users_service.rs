//! User record domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`]. Storage
//! failures are logged with their cause and surface as opaque internal
//! errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UsersService<R> {
    repository: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
    error!(operation, error = %err, "user repository failure");
    match err {
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.repository
            .insert(&user)
            .await
            .map_err(|err| map_persistence_error("create_user", err))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|err| map_persistence_error("delete_user", err))?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(format!("User with id {id} not found")))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(|err| map_persistence_error("list_users", err))
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
