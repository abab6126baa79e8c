//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain storage ports backed by PostgreSQL
//! via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leak to the domain.
//! - **Strongly typed errors**: database failures map to
//!   [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```no_run
//! use mobility_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), mobility_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgresql://localhost/mobility")).await?;
//! let repository = DieselUserRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
