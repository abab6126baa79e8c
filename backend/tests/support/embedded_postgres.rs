//! Database lifecycle helpers for suites running against embedded PostgreSQL.
//!
//! Creation and teardown go through the `postgres` client because
//! `DROP DATABASE` cannot run inside the transaction Diesel would open.
//! Schema setup uses the crate's own embedded migrations.

use mobility_api::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

const ADMIN_DATABASE: &str = "postgres";

fn admin_client(cluster: &TestCluster) -> Result<Client, String> {
    let url = cluster.connection().database_url(ADMIN_DATABASE);
    Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Drop `name` if present and create it empty.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let mut client = admin_client(cluster)?;
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE);"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\";"))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

/// Apply every migration to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<usize, String> {
    run_pending_migrations(url).map_err(|err| err.to_string())
}

/// Drop the `users` table to simulate schema loss.
pub fn drop_users_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS users;")
        .map_err(|err| format_postgres_error(&err))
}
